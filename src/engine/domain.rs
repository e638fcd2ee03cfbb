use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

/// Identifier wrapper for respondents, assigned by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RespondentId(pub String);

/// Identifier wrapper for career catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CareerId(pub String);

/// Questionnaire sections, each with its own scoring discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Aptitude,
    Personality,
    Interest,
}

impl Section {
    pub const fn label(self) -> &'static str {
        match self {
            Section::Aptitude => "aptitude",
            Section::Personality => "personality",
            Section::Interest => "interest",
        }
    }

    pub fn ordered() -> [Section; 3] {
        [Section::Aptitude, Section::Personality, Section::Interest]
    }
}

/// Likert answers are stored zero-based, 0..=4.
pub const LIKERT_MAX: u32 = 4;

/// Section-specific question payload. Each variant carries exactly the
/// sub-dimension and scoring metadata its section interprets, so a question
/// cannot declare fields that are meaningless for its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Aptitude {
        sub_domain: String,
        /// Zero-based index of the correct choice.
        correct_option: u32,
        /// Number of presented choices, when the export declared them.
        option_count: Option<u32>,
    },
    Personality {
        trait_name: String,
        reversed: bool,
    },
    Interest {
        riasec_code: String,
    },
}

/// A single catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
}

impl Question {
    pub fn section(&self) -> Section {
        match self.kind {
            QuestionKind::Aptitude { .. } => Section::Aptitude,
            QuestionKind::Personality { .. } => Section::Personality,
            QuestionKind::Interest { .. } => Section::Interest,
        }
    }

    /// Sub-domain, trait, or RIASEC code depending on the section.
    pub fn sub_dimension(&self) -> &str {
        match &self.kind {
            QuestionKind::Aptitude { sub_domain, .. } => sub_domain,
            QuestionKind::Personality { trait_name, .. } => trait_name,
            QuestionKind::Interest { riasec_code } => riasec_code,
        }
    }
}

/// A respondent's raw answer as supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub respondent_id: Option<RespondentId>,
    /// Chosen option index (aptitude) or zero-based Likert value.
    pub value: u32,
    pub time_spent_seconds: Option<u32>,
}

/// Validated question catalog keyed by question id.
///
/// Construction is the terminal validation point: an empty catalog, a
/// duplicate id, or an aptitude key outside its own choice list means the
/// invocation cannot produce meaningful scores and must fail outright.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: BTreeMap<QuestionId, Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = BTreeMap::new();
        for question in questions {
            if let QuestionKind::Aptitude {
                correct_option,
                option_count: Some(count),
                ..
            } = question.kind
            {
                if correct_option >= count {
                    return Err(CatalogError::CorrectOptionOutOfRange {
                        id: question.id,
                        correct_option,
                        option_count: count,
                    });
                }
            }

            if by_id.contains_key(&question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id));
            }
            by_id.insert(question.id.clone(), question);
        }

        Ok(Self { questions: by_id })
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Terminal catalog validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,
    #[error("duplicate question id {0:?}")]
    DuplicateQuestion(QuestionId),
    #[error("question {id:?} declares correct option {correct_option} but only {option_count} choices")]
    CorrectOptionOutOfRange {
        id: QuestionId,
        correct_option: u32,
        option_count: u32,
    },
}

/// Diagnostic recorded when an answer is excluded from scoring.
///
/// Exclusions are per-answer and recoverable; scoring continues without the
/// offending answer rather than treating it as incorrect or zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum AnswerIssue {
    #[error("answer references unknown question {question_id:?}")]
    UnknownQuestion { question_id: QuestionId },
    #[error("answer to {question_id:?} has value {value} outside 0..={max_allowed}")]
    ValueOutOfRange {
        question_id: QuestionId,
        value: u32,
        max_allowed: u32,
    },
}

/// Per-sub-domain aptitude result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeSubScore {
    /// Percentage of catalog questions answered correctly, 0..=100.
    pub raw: f64,
    /// Raw plus the response-time bonus, capped at 100.
    pub adjusted: f64,
    pub correct: u32,
    /// Catalog question count for the sub-domain, answered or not.
    pub total: u32,
    pub time_spent_seconds: u32,
}

/// The single typed score structure consumed by the matcher, the narrative
/// generator, and the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDocument {
    pub aptitude: BTreeMap<String, AptitudeSubScore>,
    pub aptitude_overall: f64,
    pub personality: BTreeMap<String, f64>,
    pub interest: BTreeMap<String, f64>,
    /// Internal-consistency coefficient per section label, 0..=1.
    pub reliability: BTreeMap<String, f64>,
}

impl ScoreDocument {
    pub fn profile_vector(&self) -> ProfileVector {
        ProfileVector {
            aptitude_overall: self.aptitude_overall,
            personality: self.personality.clone(),
            interest: self.interest.clone(),
        }
    }
}

/// Combined numeric representation of a respondent used for career matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileVector {
    pub aptitude_overall: f64,
    pub personality: BTreeMap<String, f64>,
    /// Keyed by interest dimension name (e.g. "investigative").
    pub interest: BTreeMap<String, f64>,
}

/// Career catalog entry with the ideal respondent profile for the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub id: CareerId,
    pub title: String,
    pub description: String,
    /// Required interest level per RIASEC code letter, 0..=100.
    pub riasec_profile: BTreeMap<String, f64>,
    /// Ideal trait level per personality trait name, 0..=100.
    pub personality_fit: BTreeMap<String, f64>,
}
