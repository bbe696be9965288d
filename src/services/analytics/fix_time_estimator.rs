use crate::structs::analytics::fix_time_estimate::FixTimeEstimate;
use crate::structs::issue::Issue;

/// Effort over every issue, independent of the display cap.
pub fn estimate_fix_time(issues: &[Issue]) -> FixTimeEstimate {
    let total_minutes: u32 = issues.iter().map(|issue| issue.severity.fix_minutes()).sum();
    let priority_focus_minutes: u32 = issues
        .iter()
        .filter(|issue| issue.severity.is_priority())
        .map(|issue| issue.severity.fix_minutes())
        .sum();

    FixTimeEstimate {
        total_minutes,
        estimated_hours: round_one_decimal(f64::from(total_minutes) / 60.0),
        priority_focus_minutes,
    }
}

/// Half-to-even, so 0.25 h reads as 0.2.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
