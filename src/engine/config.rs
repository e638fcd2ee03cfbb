use serde::{Deserialize, Serialize};

const DEFAULT_INTEREST_WEIGHT: f64 = 0.40;
const DEFAULT_PERSONALITY_WEIGHT: f64 = 0.35;
const DEFAULT_APTITUDE_WEIGHT: f64 = 0.25;
const DEFAULT_TARGET_SECONDS: f64 = 60.0;
const DEFAULT_MAX_BONUS_POINTS: f64 = 10.0;
const DEFAULT_STRENGTH_FLOOR: f64 = 70.0;
const DEFAULT_DEVELOPMENT_CEILING: f64 = 40.0;
const DEFAULT_RECOMMENDATION_COUNT: usize = 3;

/// Component weights applied when blending the three match factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub interest: f64,
    pub personality: f64,
    pub aptitude: f64,
}

impl MatchWeights {
    /// Replaces non-finite or negative weights with the defaults. A weight
    /// set that sums to zero would make every match undefined, so it is
    /// rejected wholesale.
    pub fn new(interest: f64, personality: f64, aptitude: f64) -> Self {
        let all_valid = [interest, personality, aptitude]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0);

        if !all_valid || interest + personality + aptitude <= 0.0 {
            return Self::default();
        }

        Self {
            interest,
            personality,
            aptitude,
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            interest: DEFAULT_INTEREST_WEIGHT,
            personality: DEFAULT_PERSONALITY_WEIGHT,
            aptitude: DEFAULT_APTITUDE_WEIGHT,
        }
    }
}

/// Response-time bonus policy for aptitude scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBonusPolicy {
    /// Seconds-per-question at or above which no bonus is awarded.
    pub target_seconds: f64,
    /// Bonus awarded as average time approaches zero.
    pub max_points: f64,
}

impl TimeBonusPolicy {
    pub fn new(target_seconds: f64, max_points: f64) -> Self {
        let target_seconds = if target_seconds.is_finite() && target_seconds > 0.0 {
            target_seconds
        } else {
            DEFAULT_TARGET_SECONDS
        };
        let max_points = if max_points.is_finite() && max_points >= 0.0 {
            max_points
        } else {
            DEFAULT_MAX_BONUS_POINTS
        };

        Self {
            target_seconds,
            max_points,
        }
    }

    /// Bonus points for an average response time, linearly interpolated from
    /// `max_points` at zero seconds down to nothing at the target.
    pub fn bonus_for(&self, average_seconds: f64) -> f64 {
        if !average_seconds.is_finite() || average_seconds >= self.target_seconds {
            return 0.0;
        }

        self.max_points * (self.target_seconds - average_seconds) / self.target_seconds
    }
}

impl Default for TimeBonusPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SECONDS, DEFAULT_MAX_BONUS_POINTS)
    }
}

/// One RIASEC dimension: the code letter used by question and career
/// catalogs, and the name used in score documents and narratives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestDimension {
    pub code: String,
    pub name: String,
}

impl InterestDimension {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Score thresholds driving strength and development-area extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NarrativeThresholds {
    pub strength_floor: f64,
    pub development_ceiling: f64,
    pub recommendation_count: usize,
}

impl Default for NarrativeThresholds {
    fn default() -> Self {
        Self {
            strength_floor: DEFAULT_STRENGTH_FLOOR,
            development_ceiling: DEFAULT_DEVELOPMENT_CEILING,
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
        }
    }
}

/// Engine tuning knobs. The canonical dimension sets are data, not code:
/// adding a sub-domain, trait, or interest dimension is a configuration
/// change and the scorers pick it up without modification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub weights: MatchWeights,
    pub time_bonus: TimeBonusPolicy,
    pub aptitude_domains: Vec<String>,
    pub personality_traits: Vec<String>,
    pub interest_dimensions: Vec<InterestDimension>,
    pub narrative: NarrativeThresholds,
}

impl EngineConfig {
    /// Resolves a RIASEC code letter to its configured dimension name.
    /// Unconfigured codes score under the code string itself.
    pub fn interest_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.interest_dimensions
            .iter()
            .find(|dimension| dimension.code == code)
            .map(|dimension| dimension.name.as_str())
            .unwrap_or(code)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            time_bonus: TimeBonusPolicy::default(),
            aptitude_domains: ["logical", "numerical", "verbal", "spatial"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            personality_traits: [
                "openness",
                "conscientiousness",
                "extraversion",
                "agreeableness",
                "neuroticism",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            interest_dimensions: vec![
                InterestDimension::new("R", "realistic"),
                InterestDimension::new("I", "investigative"),
                InterestDimension::new("A", "artistic"),
                InterestDimension::new("S", "social"),
                InterestDimension::new("E", "enterprising"),
                InterestDimension::new("C", "conventional"),
            ],
            narrative: NarrativeThresholds::default(),
        }
    }
}
