pub mod quick_win;
pub mod fix_time_estimate;
pub mod issue_analytics;
