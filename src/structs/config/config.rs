use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::analytics_config::AnalyticsConfig;
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub server: ServerConfig,
}
