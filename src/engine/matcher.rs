use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::domain::{CareerProfile, ProfileVector};

/// Sub-match components behind an overall match percentage. Components the
/// career declared no data for read 0 here but did not dilute the overall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchFactors {
    pub interest: f64,
    pub personality: f64,
    pub aptitude: f64,
}

/// A career catalog entry enriched with its computed match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career: CareerProfile,
    pub match_percentage: f64,
    pub factors: MatchFactors,
}

/// Ranks the career catalog against a respondent profile, descending by
/// match percentage. The sort is stable, so ties keep catalog order.
pub(crate) fn rank_careers(
    profile: &ProfileVector,
    careers: &[CareerProfile],
    config: &EngineConfig,
) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = careers
        .iter()
        .map(|career| match_career(profile, career, config))
        .collect();

    matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    matches
}

fn match_career(
    profile: &ProfileVector,
    career: &CareerProfile,
    config: &EngineConfig,
) -> CareerMatch {
    let weights = config.weights;
    let interest = interest_component(profile, career, config);
    let personality = personality_component(profile, career);
    // No career-side aptitude profile exists, so the respondent's overall
    // aptitude is the component and it always contributes.
    let aptitude = profile.aptitude_overall;

    let mut numerator = aptitude * weights.aptitude;
    let mut contributing_weight = weights.aptitude;

    if let Some(component) = interest {
        numerator += component * weights.interest;
        contributing_weight += weights.interest;
    }
    if let Some(component) = personality {
        numerator += component * weights.personality;
        contributing_weight += weights.personality;
    }

    let match_percentage = if contributing_weight > 0.0 {
        (numerator / contributing_weight).clamp(0.0, 100.0)
    } else {
        0.0
    };

    CareerMatch {
        career: career.clone(),
        match_percentage,
        factors: MatchFactors {
            interest: interest.unwrap_or(0.0),
            personality: personality.unwrap_or(0.0),
            aptitude,
        },
    }
}

/// Requirement-weighted interest similarity: codes central to the career
/// (higher required scores) dominate the average. `None` when the career
/// declares no interest requirements, including an all-zero vector.
fn interest_component(
    profile: &ProfileVector,
    career: &CareerProfile,
    config: &EngineConfig,
) -> Option<f64> {
    let mut weighted_similarity = 0.0;
    let mut total_weight = 0.0;

    for (code, required) in &career.riasec_profile {
        let required = required.clamp(0.0, 100.0);
        let respondent = profile
            .interest
            .get(config.interest_name(code))
            .copied()
            .unwrap_or(0.0);

        let similarity = (100.0 - (respondent - required).abs()).max(0.0);
        let weight = required / 100.0;

        weighted_similarity += similarity * weight;
        total_weight += weight;
    }

    (total_weight > 0.0).then(|| weighted_similarity / total_weight)
}

/// Unweighted mean similarity over the traits the career declares.
fn personality_component(profile: &ProfileVector, career: &CareerProfile) -> Option<f64> {
    if career.personality_fit.is_empty() {
        return None;
    }

    let similarity_sum: f64 = career
        .personality_fit
        .iter()
        .map(|(trait_name, required)| {
            let required = required.clamp(0.0, 100.0);
            let respondent = profile.personality.get(trait_name).copied().unwrap_or(0.0);
            (100.0 - (respondent - required).abs()).max(0.0)
        })
        .sum();

    Some(similarity_sum / career.personality_fit.len() as f64)
}
