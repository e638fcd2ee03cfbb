use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::parser::ResponseRow;
use super::ImportNote;
use crate::engine::domain::{Answer, QuestionId, RespondentId};

/// Converts parsed export rows into engine answers.
///
/// Re-submissions happen when a respondent revisits a question, so rows are
/// deduplicated per (respondent, question) keeping the latest `Submitted At`;
/// rows without a timestamp sort earliest. Rows that cannot yield a value are
/// recorded as notes, never coerced to zero.
pub(crate) fn answers_from_rows(
    rows: Vec<ResponseRow>,
    respondent_filter: Option<&str>,
) -> (Vec<Answer>, Vec<ImportNote>) {
    let mut answers: Vec<(Option<NaiveDateTime>, Answer)> = Vec::new();
    let mut positions: HashMap<(Option<String>, String), usize> = HashMap::new();
    let mut notes = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        // Header is row 1 in the export.
        let row_number = index + 2;

        if let Some(filter) = respondent_filter {
            if row.respondent.as_deref() != Some(filter) {
                continue;
            }
        }

        let value = match row.selected_value() {
            Some(value) => value,
            None => {
                notes.push(match row.selected_raw() {
                    Some(raw) => ImportNote::InvalidSelection {
                        row: row_number,
                        question_id: row.question_id.clone(),
                        value: raw.to_string(),
                    },
                    None => ImportNote::MissingSelection {
                        row: row_number,
                        question_id: row.question_id.clone(),
                    },
                });
                continue;
            }
        };

        let time_spent_seconds = match (row.seconds_raw(), row.seconds_value()) {
            (Some(raw), None) => {
                notes.push(ImportNote::InvalidSeconds {
                    row: row_number,
                    question_id: row.question_id.clone(),
                    value: raw.to_string(),
                });
                None
            }
            (_, seconds) => seconds,
        };

        let submitted = row.submitted();
        let answer = Answer {
            question_id: QuestionId(row.question_id.clone()),
            respondent_id: row.respondent.clone().map(RespondentId),
            value,
            time_spent_seconds,
        };

        let key = (row.respondent, row.question_id);
        match positions.get(&key) {
            Some(&position) => {
                // Later rows win ties so a re-export with identical
                // timestamps keeps the freshest data.
                if submitted >= answers[position].0 {
                    answers[position] = (submitted, answer);
                }
            }
            None => {
                positions.insert(key, answers.len());
                answers.push((submitted, answer));
            }
        }
    }

    (
        answers.into_iter().map(|(_, answer)| answer).collect(),
        notes,
    )
}
