use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl AnalyzerIssue {
    pub fn new(issue_type: &str, title: &str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            issue_type: issue_type.to_string(),
            title: title.to_string(),
            message: message.into(),
            severity,
        }
    }
}

/// The uniform record every analyzer produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerReport {
    pub score: f64,
    pub grade: String,
    pub metrics: Map<String, Value>,
    pub issues: Vec<AnalyzerIssue>,
    pub recommendations: Vec<String>,
}

impl AnalyzerReport {
    pub fn fetch_error() -> Self {
        Self {
            score: 0.0,
            grade: "F".to_string(),
            metrics: Map::new(),
            issues: vec![AnalyzerIssue::new(
                "fetch_error",
                "Could not fetch website",
                "Could not fetch website",
                Severity::Critical,
            )],
            recommendations: vec!["Check if the URL is correct and accessible".to_string()],
        }
    }

    pub fn has_issue(&self, issue_type: &str) -> bool {
        self.issues.iter().any(|issue| issue.issue_type == issue_type)
    }
}
