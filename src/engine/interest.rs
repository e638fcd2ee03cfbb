use std::collections::{BTreeMap, BTreeSet};

use super::config::EngineConfig;
use super::domain::{QuestionCatalog, QuestionKind, Section};
use super::index::AnswerIndex;
use super::personality::likert_percentage;

/// Scores the RIASEC interest dimensions.
///
/// Identical aggregation to the personality scorer minus reverse-scoring.
/// Questions are tagged with code letters; the resulting map is keyed by the
/// configured dimension name so the score document reads "investigative"
/// rather than "I".
pub(crate) fn score_interest(
    catalog: &QuestionCatalog,
    index: &AnswerIndex<'_>,
    config: &EngineConfig,
) -> BTreeMap<String, f64> {
    let mut codes: BTreeSet<&str> = config
        .interest_dimensions
        .iter()
        .map(|dimension| dimension.code.as_str())
        .collect();
    for question in catalog.questions() {
        if let QuestionKind::Interest { riasec_code } = &question.kind {
            codes.insert(riasec_code.as_str());
        }
    }

    let mut scores = BTreeMap::new();
    for code in codes {
        let entries = index.partition(Section::Interest, code);
        let contributed: u32 = entries.iter().map(|entry| entry.answer.value + 1).sum();
        let score = likert_percentage(contributed, entries.len());
        scores.insert(config.interest_name(code).to_string(), score);
    }

    scores
}
