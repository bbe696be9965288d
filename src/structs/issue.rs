use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::enums::severity::Severity;

pub const UNKNOWN_ISSUE_TITLE: &str = "Unknown Issue";

/// A single issue after ingestion. Every field is populated; defaults are
/// applied once in [`Issue::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub title: String,
    pub message: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
}

impl Issue {
    pub fn from_record(record: &Map<String, Value>, category: &str) -> Self {
        let issue_type = text_field(record, "type").unwrap_or_default();
        let message = text_field(record, "message").unwrap_or_default();

        let title = text_field(record, "title")
            .or_else(|| non_empty(&message))
            .or_else(|| non_empty(&issue_type))
            .unwrap_or_else(|| UNKNOWN_ISSUE_TITLE.to_string());

        // an explicit "" is kept; it is part of the sort key
        let description = record
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| message.clone());

        Self {
            issue_type,
            title,
            message,
            description,
            severity: Severity::from_value(record.get("severity")),
            category: category.to_string(),
        }
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}
