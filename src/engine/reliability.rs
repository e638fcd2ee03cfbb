use std::collections::BTreeMap;

use super::domain::Section;
use super::index::AnswerIndex;

/// Placeholder internal-consistency coefficient reported until a real
/// statistic lands.
pub(crate) const PLACEHOLDER_COEFFICIENT: f64 = 0.85;

/// Per-section internal-consistency estimate.
///
/// STUB: this reports [`PLACEHOLDER_COEFFICIENT`] for every section with at
/// least two validly answered items and omits the rest. A real Cronbach's
/// alpha needs item-score variance across many respondents, and a single
/// respondent's invocation cannot supply that matrix.
///
/// TODO: compute the variance-ratio alpha here once the hosting application
/// forwards per-item response matrices across respondents.
pub(crate) fn estimate_reliability(index: &AnswerIndex<'_>) -> BTreeMap<String, f64> {
    let mut coefficients = BTreeMap::new();

    for section in Section::ordered() {
        if index.section_item_count(section) >= 2 {
            coefficients.insert(section.label().to_string(), PLACEHOLDER_COEFFICIENT);
        }
    }

    coefficients
}
