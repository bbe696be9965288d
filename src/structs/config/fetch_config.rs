use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "ConfigHelper::default_fetch_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound for one analyzer, fetch included.
    #[serde(default = "ConfigHelper::default_analyzer_timeout_secs")]
    pub analyzer_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_fetch_timeout_secs(),
            analyzer_timeout_secs: ConfigHelper::default_analyzer_timeout_secs(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
