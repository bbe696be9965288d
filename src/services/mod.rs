pub mod ai_providers;
pub mod analytics;
pub mod analyzers;
pub mod analysis_runner;
pub mod page_fetcher;
pub mod tutorials;
