use std::collections::BTreeMap;

use tracing::warn;

use super::domain::{
    Answer, AnswerIssue, Question, QuestionCatalog, QuestionKind, Section, LIKERT_MAX,
};

/// A validated answer joined with its catalog question.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IndexedAnswer<'a> {
    pub(crate) question: &'a Question,
    pub(crate) answer: &'a Answer,
}

/// Groups validated answers by (section, sub-dimension) so the scorers read
/// disjoint partitions without rescanning the raw answer list.
///
/// Exclusion policy: an answer referencing an unknown question, or carrying a
/// value outside its question's domain, lands in no partition and is recorded
/// as an [`AnswerIssue`]. Scoring continues without it.
#[derive(Debug)]
pub(crate) struct AnswerIndex<'a> {
    partitions: BTreeMap<(Section, String), Vec<IndexedAnswer<'a>>>,
    issues: Vec<AnswerIssue>,
}

impl<'a> AnswerIndex<'a> {
    pub(crate) fn build(catalog: &'a QuestionCatalog, answers: &'a [Answer]) -> Self {
        let mut partitions: BTreeMap<(Section, String), Vec<IndexedAnswer<'a>>> = BTreeMap::new();
        let mut issues = Vec::new();

        for answer in answers {
            let Some(question) = catalog.get(&answer.question_id) else {
                let issue = AnswerIssue::UnknownQuestion {
                    question_id: answer.question_id.clone(),
                };
                warn!(%issue, "excluding answer from scoring");
                issues.push(issue);
                continue;
            };

            if let Some(max_allowed) = max_value_for(question) {
                if answer.value > max_allowed {
                    let issue = AnswerIssue::ValueOutOfRange {
                        question_id: answer.question_id.clone(),
                        value: answer.value,
                        max_allowed,
                    };
                    warn!(%issue, "excluding answer from scoring");
                    issues.push(issue);
                    continue;
                }
            }

            partitions
                .entry((question.section(), question.sub_dimension().to_string()))
                .or_default()
                .push(IndexedAnswer { question, answer });
        }

        Self { partitions, issues }
    }

    /// Validated answers for one (section, sub-dimension) pair.
    pub(crate) fn partition(&self, section: Section, sub_dimension: &str) -> &[IndexedAnswer<'a>] {
        self.partitions
            .get(&(section, sub_dimension.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Count of validated answers across a whole section.
    pub(crate) fn section_item_count(&self, section: Section) -> usize {
        self.partitions
            .iter()
            .filter(|((entry_section, _), _)| *entry_section == section)
            .map(|(_, answers)| answers.len())
            .sum()
    }

    pub(crate) fn issues(&self) -> &[AnswerIssue] {
        &self.issues
    }

    pub(crate) fn into_issues(self) -> Vec<AnswerIssue> {
        self.issues
    }
}

/// Largest acceptable answer value, or `None` when the question declares no
/// upper bound (aptitude questions without an option count).
fn max_value_for(question: &Question) -> Option<u32> {
    match &question.kind {
        // Catalog validation guarantees option_count >= 1 when present.
        QuestionKind::Aptitude { option_count, .. } => option_count.map(|count| count - 1),
        QuestionKind::Personality { .. } | QuestionKind::Interest { .. } => Some(LIKERT_MAX),
    }
}
