use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::enums::tutorial_status::TutorialStatus;
use crate::structs::issue::Issue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub issue_title: String,
    pub issue_severity: Severity,
    pub issue_description: String,
    #[serde(rename = "tutorial", default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub status: TutorialStatus,
}

impl Tutorial {
    pub fn success(issue: &Issue, content: String) -> Self {
        Self {
            issue_title: issue.title.clone(),
            issue_severity: issue.severity.clone(),
            issue_description: issue.description.clone(),
            content: Some(content),
            error: None,
            generated_at: Utc::now(),
            status: TutorialStatus::Success,
        }
    }

    pub fn failure(issue: &Issue, error: String) -> Self {
        Self {
            issue_title: issue.title.clone(),
            issue_severity: issue.severity.clone(),
            issue_description: issue.description.clone(),
            content: None,
            error: Some(error),
            generated_at: Utc::now(),
            status: TutorialStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TutorialStatus::Success
    }
}
