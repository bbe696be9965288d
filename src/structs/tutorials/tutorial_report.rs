use serde::{Deserialize, Serialize};
use crate::enums::report_status::ReportStatus;
use crate::structs::tutorials::local_solution::LocalSolution;
use crate::structs::tutorials::tutorial::Tutorial;

pub fn not_configured_message(api_key_env: &str) -> String {
    format!("AI support not configured. Set {} environment variable.", api_key_env)
}

pub fn client_unavailable_message(reason: &str) -> String {
    format!("AI client could not be created ({}). Showing local solutions instead.", reason)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTutorials {
    pub status: ReportStatus,
    pub total_issues: usize,
    pub tutorials_generated: usize,
    pub tutorials_failed: usize,
    pub tutorials: Vec<Tutorial>,
}

/// Returned when no text-generation credential is configured. The
/// knowledge-base answers ride along in `local_solutions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnconfiguredTutorials {
    pub status: ReportStatus,
    pub message: String,
    pub tutorials: Vec<Tutorial>,
    pub local_solutions: Vec<LocalSolution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TutorialReport {
    Generated(GeneratedTutorials),
    Unconfigured(UnconfiguredTutorials),
}

impl TutorialReport {
    pub fn status(&self) -> ReportStatus {
        match self {
            TutorialReport::Generated(report) => report.status,
            TutorialReport::Unconfigured(report) => report.status,
        }
    }
}
