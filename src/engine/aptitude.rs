use std::collections::{BTreeMap, BTreeSet};

use super::config::EngineConfig;
use super::domain::{AptitudeSubScore, QuestionCatalog, QuestionKind, Section};
use super::index::AnswerIndex;

/// Scores the correctness-based aptitude section and derives the overall
/// aptitude mean.
///
/// The sub-domain universe is the configured canonical set united with every
/// sub-domain the catalog declares, so new categories flow through without
/// engine changes. Sub-domains nobody answered score 0 and stay out of the
/// overall mean.
pub(crate) fn score_aptitude(
    catalog: &QuestionCatalog,
    index: &AnswerIndex<'_>,
    config: &EngineConfig,
) -> (BTreeMap<String, AptitudeSubScore>, f64) {
    let mut question_counts: BTreeMap<&str, u32> = BTreeMap::new();
    for question in catalog.questions() {
        if let QuestionKind::Aptitude { sub_domain, .. } = &question.kind {
            *question_counts.entry(sub_domain.as_str()).or_insert(0) += 1;
        }
    }

    let mut sub_domains: BTreeSet<&str> = config
        .aptitude_domains
        .iter()
        .map(String::as_str)
        .collect();
    sub_domains.extend(question_counts.keys().copied());

    let mut scores = BTreeMap::new();
    let mut answered_adjusted = Vec::new();

    for sub_domain in sub_domains {
        let total = question_counts.get(sub_domain).copied().unwrap_or(0);
        let entries = index.partition(Section::Aptitude, sub_domain);

        let correct = entries
            .iter()
            .filter(|entry| match &entry.question.kind {
                QuestionKind::Aptitude { correct_option, .. } => {
                    entry.answer.value == *correct_option
                }
                _ => false,
            })
            .count() as u32;

        let raw = if total == 0 {
            0.0
        } else {
            (f64::from(correct) / f64::from(total) * 100.0).min(100.0)
        };

        let time_spent_seconds: u32 = entries
            .iter()
            .filter_map(|entry| entry.answer.time_spent_seconds)
            .sum();
        let timed_answers = entries
            .iter()
            .filter(|entry| entry.answer.time_spent_seconds.is_some())
            .count() as u32;

        // Only answers that recorded a time contribute to the average.
        let bonus = if timed_answers == 0 {
            0.0
        } else {
            let average_seconds = f64::from(time_spent_seconds) / f64::from(timed_answers);
            config.time_bonus.bonus_for(average_seconds)
        };

        let adjusted = (raw + bonus).min(100.0);

        if !entries.is_empty() {
            answered_adjusted.push(adjusted);
        }

        scores.insert(
            sub_domain.to_string(),
            AptitudeSubScore {
                raw,
                adjusted,
                correct,
                total,
                time_spent_seconds,
            },
        );
    }

    let overall = if answered_adjusted.is_empty() {
        0.0
    } else {
        answered_adjusted.iter().sum::<f64>() / answered_adjusted.len() as f64
    };

    (scores, overall)
}
