pub mod cli;
pub mod issue;
pub mod analysis_result_set;
pub mod analyzer_report;
pub mod fetched_page;
pub mod analyze_request;
pub mod analytics;
pub mod tutorials;
pub mod ai;
pub mod config;
