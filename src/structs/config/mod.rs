pub mod config;
pub mod ai_config;
pub mod fetch_config;
pub mod analytics_config;
pub mod server_config;
