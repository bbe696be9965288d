use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AnalyticsConfig {
    /// Analyzer keys to aggregate in addition to the built-in categories.
    #[serde(default)]
    pub extra_categories: Vec<String>,
}
