use crate::enums::report_status::ReportStatus;
use crate::enums::severity::Severity;
use crate::services::analytics::fix_time_estimator::estimate_fix_time;
use crate::services::analytics::issue_aggregator::IssueAggregator;
use crate::services::analytics::issue_prioritizer::prioritize_issues;
use crate::services::analytics::quick_win_detector::identify_quick_wins;
use crate::structs::analysis_result_set::AnalysisResultSet;
use crate::structs::analytics::issue_analytics::{CleanReport, IssueAnalytics, PrioritizedReport};
use crate::structs::issue::Issue;

/// Builds the prioritized action plan for one analysis run. Recomputed on
/// every call.
#[derive(Debug, Clone, Default)]
pub struct IssueAnalyticsService {
    aggregator: IssueAggregator,
}

impl IssueAnalyticsService {
    pub fn new(aggregator: IssueAggregator) -> Self {
        Self { aggregator }
    }

    pub fn extract_issues(&self, results: &AnalysisResultSet) -> Vec<Issue> {
        self.aggregator.extract_all_issues(results)
    }

    pub fn get_issue_analytics(&self, results: &AnalysisResultSet) -> IssueAnalytics {
        let issues = self.extract_issues(results);

        if issues.is_empty() {
            return IssueAnalytics::Clean(CleanReport::default());
        }

        let report = PrioritizedReport {
            status: ReportStatus::Success,
            total_issues: issues.len(),
            critical_issues: count_severity(&issues, &Severity::Critical),
            high_priority_issues: count_severity(&issues, &Severity::High),
            prioritized_issues: prioritize_issues(&issues),
            quick_wins: identify_quick_wins(&issues),
            estimated_fix_time: estimate_fix_time(&issues),
        };

        log::info!(
            "📊 {} issues ({} critical, {} high), ~{}h to fix",
            report.total_issues,
            report.critical_issues,
            report.high_priority_issues,
            report.estimated_fix_time.estimated_hours
        );

        IssueAnalytics::Prioritized(report)
    }
}

fn count_severity(issues: &[Issue], severity: &Severity) -> usize {
    issues.iter().filter(|issue| &issue.severity == severity).count()
}
