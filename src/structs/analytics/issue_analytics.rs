use serde::{Deserialize, Serialize};
use crate::enums::report_status::ReportStatus;
use crate::structs::analytics::fix_time_estimate::FixTimeEstimate;
use crate::structs::analytics::quick_win::QuickWin;
use crate::structs::issue::Issue;

pub const NO_ISSUES_MESSAGE: &str = "No issues found! Your website is in great shape.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedReport {
    pub status: ReportStatus,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub high_priority_issues: usize,
    pub prioritized_issues: Vec<Issue>,
    pub quick_wins: Vec<QuickWin>,
    pub estimated_fix_time: FixTimeEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanReport {
    pub status: ReportStatus,
    pub total_issues: usize,
    pub message: String,
    pub recommendations: Vec<String>,
}

impl Default for CleanReport {
    fn default() -> Self {
        Self {
            status: ReportStatus::Success,
            total_issues: 0,
            message: NO_ISSUES_MESSAGE.to_string(),
            recommendations: Vec::new(),
        }
    }
}

/// Output of the issue analytics: a full plan, or the empty-state record
/// when no analyzer reported anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueAnalytics {
    Prioritized(PrioritizedReport),
    Clean(CleanReport),
}

impl IssueAnalytics {
    pub fn total_issues(&self) -> usize {
        match self {
            IssueAnalytics::Prioritized(report) => report.total_issues,
            IssueAnalytics::Clean(report) => report.total_issues,
        }
    }
}
