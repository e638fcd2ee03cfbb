use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use tracing::warn;

use super::ImportError;
use crate::engine::domain::{
    CareerId, CareerProfile, Question, QuestionCatalog, QuestionId, QuestionKind,
};

/// Loosely-shaped question record as the hosting application exports it.
/// Section-specific requirements are enforced during conversion, not by the
/// deserializer, so one malformed record cannot sink the whole catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    id: String,
    section: String,
    #[serde(default)]
    sub_domain: Option<String>,
    #[serde(default, rename = "trait")]
    trait_name: Option<String>,
    #[serde(default)]
    riasec_code: Option<String>,
    #[serde(default)]
    options: QuestionOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionOptions {
    #[serde(default)]
    correct_answer: Option<u32>,
    #[serde(default)]
    is_reversed: Option<bool>,
    #[serde(default)]
    choices: Option<Vec<String>>,
}

/// Data-integrity problems in individual catalog records. The offending
/// record is excluded; answers referencing it will surface as unknown-
/// question issues during scoring instead of scoring as wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("question {id} is missing required field '{field}' for its section")]
    MissingField { id: String, field: &'static str },
    #[error("question {id} declares unknown section '{section}'")]
    UnknownSection { id: String, section: String },
}

/// Loads and validates the question catalog export.
pub fn question_catalog_from_reader<R: Read>(
    reader: R,
) -> Result<(QuestionCatalog, Vec<CatalogIssue>), ImportError> {
    let records: Vec<QuestionRecord> = serde_json::from_reader(reader)?;

    let mut questions = Vec::new();
    let mut issues = Vec::new();
    for record in records {
        match convert_question(record) {
            Ok(question) => questions.push(question),
            Err(issue) => {
                warn!(%issue, "excluding catalog record");
                issues.push(issue);
            }
        }
    }

    let catalog = QuestionCatalog::new(questions)?;
    Ok((catalog, issues))
}

fn convert_question(record: QuestionRecord) -> Result<Question, CatalogIssue> {
    let kind = match record.section.trim().to_ascii_lowercase().as_str() {
        "aptitude" => {
            let sub_domain = record.sub_domain.ok_or(CatalogIssue::MissingField {
                id: record.id.clone(),
                field: "subDomain",
            })?;
            let correct_option =
                record
                    .options
                    .correct_answer
                    .ok_or(CatalogIssue::MissingField {
                        id: record.id.clone(),
                        field: "options.correctAnswer",
                    })?;
            QuestionKind::Aptitude {
                sub_domain,
                correct_option,
                option_count: record
                    .options
                    .choices
                    .as_ref()
                    .map(|choices| choices.len() as u32),
            }
        }
        "personality" => QuestionKind::Personality {
            trait_name: record.trait_name.ok_or(CatalogIssue::MissingField {
                id: record.id.clone(),
                field: "trait",
            })?,
            reversed: record.options.is_reversed.unwrap_or(false),
        },
        "interest" => QuestionKind::Interest {
            riasec_code: record.riasec_code.ok_or(CatalogIssue::MissingField {
                id: record.id.clone(),
                field: "riasecCode",
            })?,
        },
        other => {
            return Err(CatalogIssue::UnknownSection {
                id: record.id,
                section: other.to_string(),
            })
        }
    };

    Ok(Question {
        id: QuestionId(record.id),
        kind,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CareerRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    riasec_profile: BTreeMap<String, f64>,
    #[serde(default)]
    personality_fit: BTreeMap<String, f64>,
}

fn default_active() -> bool {
    true
}

/// Loads the career catalog export, keeping only active entries.
pub fn career_catalog_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<CareerProfile>, ImportError> {
    let records: Vec<CareerRecord> = serde_json::from_reader(reader)?;

    Ok(records
        .into_iter()
        .filter(|record| record.active)
        .map(|record| CareerProfile {
            id: CareerId(record.id),
            title: record.title,
            description: record.description,
            riasec_profile: record.riasec_profile,
            personality_fit: record.personality_fit,
        })
        .collect())
}
