use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::errors::{SitelyzerError, SitelyzerResult};
use crate::helpers::url_validator::is_valid_origin;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> SitelyzerResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> SitelyzerResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| SitelyzerError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> SitelyzerResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> SitelyzerResult<()> {
        let sample_config = r#"# Sitelyzer Configuration

# Text-generation service used for remediation tutorials.
# Tutorials fall back to the built-in knowledge base when the
# environment variable named by api_key_env is unset or empty.
[ai]
provider = "gemini"
model = "gemini-1.5-flash"
api_key_env = "GOOGLE_API_KEY"
base_url = "https://generativelanguage.googleapis.com/v1beta"
temperature = 0.7
top_k = 40
top_p = 0.95
max_output_tokens = 1024
timeout_secs = 30
max_tutorials = 10
concurrency = 3

[fetch]
timeout_secs = 10
analyzer_timeout_secs = 20
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"

[analytics]
# Additional analyzer keys to include in issue analytics
extra_categories = []

[server]
host = "127.0.0.1"
port = 5000
cors_origins = ["http://localhost:3000"]
"#;
        if path.exists() {
            return Err(SitelyzerError::config_file_error(
                &path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != "gemini" {
            errors.push(format!("Unsupported AI provider: {}", config.ai.provider));
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be within 0.0..=2.0, got {}", config.ai.temperature));
        }

        if !(0.0..=1.0).contains(&config.ai.top_p) {
            errors.push(format!("ai.top_p must be within 0.0..=1.0, got {}", config.ai.top_p));
        }

        if config.ai.concurrency == 0 {
            errors.push("ai.concurrency must be at least 1".to_string());
        }

        if config.ai.timeout_secs == 0 || config.fetch.timeout_secs == 0 || config.fetch.analyzer_timeout_secs == 0 {
            errors.push("timeouts must be greater than zero".to_string());
        }

        for origin in &config.server.cors_origins {
            if !is_valid_origin(origin) {
                errors.push(format!("server.cors_origins entry '{}' is not a scheme://host[:port] origin", origin));
            }
        }

        let mut names = HashSet::new();
        for category in &config.analytics.extra_categories {
            if AnalyzerCategory::from_key(category).is_some() {
                errors.push(format!("Category '{}' is already built in", category));
            }
            if !names.insert(category) {
                errors.push(format!("Duplicate extra category: {}", category));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
