use std::cmp::Reverse;
use crate::config::constants::MAX_PRIORITIZED_ISSUES;
use crate::structs::issue::Issue;

/// Most severe first; within a severity, longer descriptions first. The sort
/// is stable, so identical keys keep their encounter order.
pub fn prioritize_issues(issues: &[Issue]) -> Vec<Issue> {
    let mut sorted = issues.to_vec();
    sorted.sort_by_key(|issue| (issue.severity.rank(), Reverse(issue.description_len())));
    sorted.truncate(MAX_PRIORITIZED_ISSUES);
    sorted
}
