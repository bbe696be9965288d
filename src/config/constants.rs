use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".sitelyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const MAX_PRIORITIZED_ISSUES: usize = 20;
pub const MAX_QUICK_WINS: usize = 5;
pub const QUICK_WIN_MINUTES: u32 = 5;
pub const QUICK_WIN_KEYWORDS: &[&str] = &["meta", "title", "alt text", "heading", "compression", "cache"];

pub const HEALTH_MESSAGE: &str = "Website Analyzer API is running";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
