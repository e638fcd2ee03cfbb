use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::domain::ScoreDocument;
use super::matcher::CareerMatch;

/// A structured career recommendation for the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

/// Human-readable rendering of a scored assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeBundle {
    pub trait_summary: String,
    pub interest_summary: String,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

pub(crate) fn generate_narrative(
    document: &ScoreDocument,
    matches: &[CareerMatch],
    config: &EngineConfig,
) -> NarrativeBundle {
    let thresholds = config.narrative;

    NarrativeBundle {
        trait_summary: trait_summary(document),
        interest_summary: interest_summary(document),
        strengths: strengths(document, thresholds.strength_floor),
        development_areas: development_areas(document, thresholds.development_ceiling),
        recommendations: recommendations(matches, thresholds.recommendation_count),
    }
}

fn trait_summary(document: &ScoreDocument) -> String {
    let mut scored: Vec<(&str, f64)> = document
        .personality
        .iter()
        .map(|(name, score)| (name.as_str(), *score))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    match scored.first().copied() {
        Some((name, score)) if score > 0.0 => {
            let mut summary =
                format!("Your personality profile is led by {name} ({score:.0}/100).");
            if let Some((low_name, low_score)) = scored.last().copied() {
                if low_score < score {
                    summary.push_str(&format!(" {low_name} scored lowest at {low_score:.0}/100."));
                }
            }
            summary
        }
        _ => "Not enough personality responses were recorded to characterize your traits."
            .to_string(),
    }
}

fn interest_summary(document: &ScoreDocument) -> String {
    let mut scored: Vec<(&str, f64)> = document
        .interest
        .iter()
        .map(|(name, score)| (name.as_str(), *score))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let leading: Vec<&str> = scored
        .iter()
        .take(2)
        .filter(|(_, score)| *score > 0.0)
        .map(|(name, _)| *name)
        .collect();

    match leading.as_slice() {
        [first, second] => format!("Your interests lean {first} and {second}."),
        [only] => format!("Your interests lean strongly {only}."),
        _ => "Not enough interest responses were recorded to characterize your preferences."
            .to_string(),
    }
}

/// Strengths across all three sections, uniformly from the typed document.
fn strengths(document: &ScoreDocument, floor: f64) -> Vec<String> {
    let mut strengths = Vec::new();

    for (sub_domain, score) in &document.aptitude {
        if score.adjusted >= floor {
            strengths.push(format!(
                "{sub_domain} aptitude ({:.0}/100)",
                score.adjusted
            ));
        }
    }
    for (trait_name, score) in &document.personality {
        if *score >= floor {
            strengths.push(format!("{trait_name} ({score:.0}/100)"));
        }
    }
    for (dimension, score) in &document.interest {
        if *score >= floor {
            strengths.push(format!("{dimension} interest ({score:.0}/100)"));
        }
    }

    if strengths.is_empty() {
        strengths.push(
            "A balanced profile without a single dominant strength; broad exploration is a good next step."
                .to_string(),
        );
    }

    strengths
}

fn development_areas(document: &ScoreDocument, ceiling: f64) -> Vec<String> {
    let mut areas = Vec::new();

    for (sub_domain, score) in &document.aptitude {
        if score.total > 0 && score.adjusted <= ceiling {
            areas.push(format!(
                "{sub_domain} aptitude ({:.0}/100)",
                score.adjusted
            ));
        }
    }
    for (trait_name, score) in &document.personality {
        if *score <= ceiling {
            areas.push(format!("{trait_name} ({score:.0}/100)"));
        }
    }
    for (dimension, score) in &document.interest {
        if *score <= ceiling {
            areas.push(format!("{dimension} interest ({score:.0}/100)"));
        }
    }

    if areas.is_empty() {
        areas.push("No pronounced development areas surfaced in this assessment.".to_string());
    }

    areas
}

fn recommendations(matches: &[CareerMatch], count: usize) -> Vec<Recommendation> {
    let top: Vec<Recommendation> = matches
        .iter()
        .take(count)
        .map(|career_match| {
            let title = career_match.career.title.clone();
            Recommendation {
                description: format!(
                    "{} Overall match: {:.0}%.",
                    career_match.career.description, career_match.match_percentage
                ),
                action_items: vec![
                    format!("Research the day-to-day responsibilities of a {title}"),
                    format!("Compare the qualifications a {title} needs with your current training"),
                    "Arrange a conversation with someone working in the field".to_string(),
                ],
                title,
            }
        })
        .collect();

    if top.is_empty() {
        return vec![Recommendation {
            title: "Broaden your exploration".to_string(),
            description:
                "No career in the current catalog produced a qualifying match. Retake the \
                 assessment after answering more questions, or explore adjacent fields."
                    .to_string(),
            action_items: vec![
                "Complete any unanswered assessment sections".to_string(),
                "Browse the full career catalog without a match filter".to_string(),
            ],
        }];
    }

    top
}
