use std::collections::{BTreeMap, BTreeSet};

use super::config::EngineConfig;
use super::domain::{QuestionCatalog, QuestionKind, Section};
use super::index::AnswerIndex;

/// Scores the Likert-style personality traits.
///
/// Answers are stored zero-based, so each item contributes `value + 1`
/// (1..=5); reverse-scored items contribute `6 - (value + 1)` instead. A
/// trait with no validly answered items scores 0.
pub(crate) fn score_personality(
    catalog: &QuestionCatalog,
    index: &AnswerIndex<'_>,
    config: &EngineConfig,
) -> BTreeMap<String, f64> {
    let mut traits: BTreeSet<&str> = config
        .personality_traits
        .iter()
        .map(String::as_str)
        .collect();
    for question in catalog.questions() {
        if let QuestionKind::Personality { trait_name, .. } = &question.kind {
            traits.insert(trait_name.as_str());
        }
    }

    let mut scores = BTreeMap::new();
    for trait_name in traits {
        let entries = index.partition(Section::Personality, trait_name);

        let contributed: u32 = entries
            .iter()
            .map(|entry| {
                let value = entry.answer.value + 1;
                match entry.question.kind {
                    QuestionKind::Personality { reversed: true, .. } => 6 - value,
                    _ => value,
                }
            })
            .sum();

        let score = likert_percentage(contributed, entries.len());
        scores.insert(trait_name.to_string(), score);
    }

    scores
}

/// Normalizes a 1..=5 item sum to 0..=100, guarding the empty case.
pub(crate) fn likert_percentage(contributed: u32, item_count: usize) -> f64 {
    if item_count == 0 {
        return 0.0;
    }

    f64::from(contributed) / (item_count as f64 * 5.0) * 100.0
}
