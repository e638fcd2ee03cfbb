//! File intake for the scoring engine.
//!
//! The hosting application exports raw answers as CSV and the question and
//! career catalogs as JSON. This module materializes the engine's in-memory
//! inputs from those files, applying the data-integrity policy at the
//! boundary: malformed records are excluded with a recorded note or issue,
//! never silently scored as zero.

mod catalog;
mod mapping;
mod parser;

pub use catalog::{career_catalog_from_reader, question_catalog_from_reader, CatalogIssue};

use std::io::Read;
use std::path::Path;

use crate::engine::domain::{Answer, CareerProfile, CatalogError, QuestionCatalog};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Catalog(CatalogError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read export file: {}", err),
            ImportError::Csv(err) => write!(f, "invalid answer export data: {}", err),
            ImportError::Json(err) => write!(f, "invalid catalog export data: {}", err),
            ImportError::Catalog(err) => write!(f, "question catalog failed validation: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Json(err) => Some(err),
            ImportError::Catalog(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<CatalogError> for ImportError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// Recoverable per-row problems recorded while importing answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportNote {
    #[error("row {row}: no selected option for question {question_id}")]
    MissingSelection { row: usize, question_id: String },
    #[error("row {row}: unparsable selected option '{value}' for question {question_id}")]
    InvalidSelection {
        row: usize,
        question_id: String,
        value: String,
    },
    #[error("row {row}: unparsable seconds value '{value}' for question {question_id}")]
    InvalidSeconds {
        row: usize,
        question_id: String,
        value: String,
    },
}

/// Answers materialized from one export file.
#[derive(Debug)]
pub struct ImportedAnswers {
    pub answers: Vec<Answer>,
    pub notes: Vec<ImportNote>,
}

pub struct AnswerImporter;

impl AnswerImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        respondent: Option<&str>,
    ) -> Result<ImportedAnswers, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, respondent)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        respondent: Option<&str>,
    ) -> Result<ImportedAnswers, ImportError> {
        let rows = parser::parse_rows(reader)?;
        let (answers, notes) = mapping::answers_from_rows(rows, respondent);
        Ok(ImportedAnswers { answers, notes })
    }
}

pub fn question_catalog_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<(QuestionCatalog, Vec<CatalogIssue>), ImportError> {
    let file = std::fs::File::open(path)?;
    question_catalog_from_reader(file)
}

pub fn career_catalog_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CareerProfile>, ImportError> {
    let file = std::fs::File::open(path)?;
    career_catalog_from_reader(file)
}
