use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f64,

    #[serde(default = "ConfigHelper::default_top_k")]
    pub top_k: u32,

    #[serde(default = "ConfigHelper::default_top_p")]
    pub top_p: f64,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_ai_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_max_tutorials")]
    pub max_tutorials: usize,

    #[serde(default = "ConfigHelper::default_concurrency")]
    pub concurrency: usize,
}

impl AiConfig {
    /// Reads the credential from the configured environment variable. An
    /// empty value counts as missing.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            temperature: ConfigHelper::default_temperature(),
            top_k: ConfigHelper::default_top_k(),
            top_p: ConfigHelper::default_top_p(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            timeout_secs: ConfigHelper::default_ai_timeout_secs(),
            max_tutorials: ConfigHelper::default_max_tutorials(),
            concurrency: ConfigHelper::default_concurrency(),
        }
    }
}
