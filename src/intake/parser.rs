use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of the hosting application's answer export, loosely typed the way
/// the exporter writes it. Typed accessors do the cleanup.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseRow {
    #[serde(rename = "Respondent", default, deserialize_with = "empty_string_as_none")]
    pub(crate) respondent: Option<String>,
    #[serde(rename = "Question ID")]
    pub(crate) question_id: String,
    #[serde(
        rename = "Selected Option",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    selected_option: Option<String>,
    #[serde(
        rename = "Seconds Spent",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    seconds_spent: Option<String>,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

impl ResponseRow {
    /// Raw selected-option cell, present but possibly unparsable.
    pub(crate) fn selected_raw(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub(crate) fn selected_value(&self) -> Option<u32> {
        self.selected_option
            .as_deref()
            .and_then(|value| value.trim().parse::<u32>().ok())
    }

    pub(crate) fn seconds_raw(&self) -> Option<&str> {
        self.seconds_spent.as_deref()
    }

    pub(crate) fn seconds_value(&self) -> Option<u32> {
        self.seconds_spent
            .as_deref()
            .and_then(|value| value.trim().parse::<u32>().ok())
    }

    pub(crate) fn submitted(&self) -> Option<NaiveDateTime> {
        self.submitted_at.as_deref().and_then(parse_datetime)
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ResponseRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<ResponseRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
