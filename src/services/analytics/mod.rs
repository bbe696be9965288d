pub mod issue_aggregator;
pub mod issue_prioritizer;
pub mod quick_win_detector;
pub mod fix_time_estimator;
pub mod issue_analytics;
