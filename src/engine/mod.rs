//! Assessment scoring and career matching engine.
//!
//! The engine is a pure function of its inputs: a validated question catalog,
//! a respondent's raw answers, and a career catalog go in; a typed score
//! document, a ranked match list, and a narrative bundle come out. No state
//! survives an invocation, so concurrent assessments need no coordination.

pub mod config;
pub mod domain;

mod aptitude;
mod index;
mod interest;
mod matcher;
mod narrative;
mod personality;
mod reliability;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use config::{
    EngineConfig, InterestDimension, MatchWeights, NarrativeThresholds, TimeBonusPolicy,
};
pub use domain::{
    Answer, AnswerIssue, AptitudeSubScore, CareerId, CareerProfile, CatalogError, ProfileVector,
    Question, QuestionCatalog, QuestionId, QuestionKind, RespondentId, ScoreDocument, Section,
    LIKERT_MAX,
};
pub use matcher::{CareerMatch, MatchFactors};
pub use narrative::{NarrativeBundle, Recommendation};

use index::AnswerIndex;

/// Stateless engine applying the configured scoring and matching policy.
pub struct AssessmentEngine {
    config: EngineConfig,
}

impl AssessmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a respondent's answers against the question catalog.
    ///
    /// Catalog validity is established at [`QuestionCatalog::new`], so scoring
    /// itself cannot fail; per-answer integrity problems surface as recorded
    /// issues on the outcome instead of corrupting averages.
    pub fn score(&self, catalog: &QuestionCatalog, answers: &[Answer]) -> ScoringOutcome {
        let index = AnswerIndex::build(catalog, answers);

        let (aptitude, aptitude_overall) =
            aptitude::score_aptitude(catalog, &index, &self.config);
        let personality = personality::score_personality(catalog, &index, &self.config);
        let interest = interest::score_interest(catalog, &index, &self.config);
        let reliability = reliability::estimate_reliability(&index);

        let document = ScoreDocument {
            aptitude,
            aptitude_overall,
            personality,
            interest,
            reliability,
        };

        ScoringOutcome {
            document,
            issues: index.into_issues(),
        }
    }

    /// Rank the career catalog against a scored profile.
    pub fn rank(&self, profile: &ProfileVector, careers: &[CareerProfile]) -> Vec<CareerMatch> {
        matcher::rank_careers(profile, careers, &self.config)
    }

    /// Full pipeline: score, match, and narrate in one call.
    pub fn assess(
        &self,
        catalog: &QuestionCatalog,
        answers: &[Answer],
        careers: &[CareerProfile],
    ) -> AssessmentReport {
        let ScoringOutcome { document, issues } = self.score(catalog, answers);
        let matches = self.rank(&document.profile_vector(), careers);
        let narrative = narrative::generate_narrative(&document, &matches, &self.config);

        AssessmentReport {
            scores: document,
            matches,
            narrative,
            issues,
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Score document plus the per-answer issues recorded while building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub document: ScoreDocument,
    pub issues: Vec<AnswerIssue>,
}

/// Complete engine output consumed by the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub scores: ScoreDocument,
    pub matches: Vec<CareerMatch>,
    pub narrative: NarrativeBundle,
    pub issues: Vec<AnswerIssue>,
}
