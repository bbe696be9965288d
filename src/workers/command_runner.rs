use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::form_factor::FormFactor;
use crate::errors::{SitelyzerError, SitelyzerResult};
use crate::helpers::url_validator::{normalize_url, validate_url};
use crate::server::api_server::{ApiServer, AppState};
use crate::services::analysis_runner::AnalysisRunner;
use crate::services::analytics::issue_aggregator::IssueAggregator;
use crate::services::analytics::issue_analytics::IssueAnalyticsService;
use crate::services::analytics::issue_prioritizer::prioritize_issues;
use crate::services::tutorials::tutorial_generator::TutorialGenerator;
use crate::structs::analysis_result_set::AnalysisResultSet;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SitelyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { url, form_factor, output } => self.analyze_command(&url, form_factor, output).await,
            Commands::Issues { input } => self.issues_command(&input),
            Commands::Tutorials { input } => self.tutorials_command(&input).await,
            Commands::Serve { port } => self.serve_command(port).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SitelyzerResult<()> {
        log::info!("🚀 Initializing sitelyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Export GOOGLE_API_KEY to enable AI tutorials.");
                log::info!("🔧 Run 'sitelyzer validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> SitelyzerResult<()> {
        log::info!("🔍 Validating sitelyzer configuration...");

        let config = self.load_config()?;

        if let Err(problems) = ConfigManager::validate_config(&config) {
            log::error!("❌ Issues found:");
            for problem in &problems {
                log::error!("   - {}", problem);
            }
            return Err(SitelyzerError::config_error(
                &format!("{} configuration problem(s)", problems.len()),
                None,
                Some("Fix the entries above in config.toml"),
            ));
        }

        log::info!("✅ Configuration is valid");
        if config.ai.api_key().is_none() {
            log::warn!("⚠️ {} is not set, tutorials will come from the local knowledge base", config.ai.api_key_env);
        }
        Ok(())
    }

    async fn analyze_command(&self, url: &str, form_factor: FormFactor, output: Option<PathBuf>) -> SitelyzerResult<()> {
        if !validate_url(url) {
            return Err(SitelyzerError::validation_error(
                "url",
                url,
                "must be an http(s) URL with a domain name",
                Some("Try something like example.com"),
            ));
        }

        let config = self.load_config()?;
        let runner = AnalysisRunner::new(&config.fetch)?;
        let results = runner.analyze(&normalize_url(url), form_factor).await;

        let rendered = serde_json::to_string_pretty(&results)?;
        match output {
            Some(path) => {
                fs::write(&path, &rendered)?;
                log::info!("💾 Saved analysis to {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }

    fn issues_command(&self, input: &Path) -> SitelyzerResult<()> {
        let config = self.load_config()?;
        let results = Self::read_results(input)?;

        let report = Self::analytics_service(&config).get_issue_analytics(&results);
        Self::print_json(&report)
    }

    async fn tutorials_command(&self, input: &Path) -> SitelyzerResult<()> {
        let config = self.load_config()?;
        let results = Self::read_results(input)?;

        let issues = prioritize_issues(&Self::analytics_service(&config).extract_issues(&results));
        log::info!("📚 Generating tutorials for {} prioritized issues", issues.len());

        let report = TutorialGenerator::from_config(&config.ai).get_issue_tutorials(&issues).await;
        Self::print_json(&report)
    }

    async fn serve_command(&self, port: Option<u16>) -> SitelyzerResult<()> {
        let config = self.load_config()?;
        log::info!("⏹️ Press Ctrl+C to stop the server");

        let server = ApiServer::new(AppState::from_config(&config)?, config.server.clone());
        server.run(port).await
    }

    fn load_config(&self) -> SitelyzerResult<Config> {
        ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'sitelyzer init' to create a configuration file.");
            e
        })
    }

    fn analytics_service(config: &Config) -> IssueAnalyticsService {
        IssueAnalyticsService::new(IssueAggregator::new().with_extra_categories(&config.analytics.extra_categories))
    }

    fn read_results(path: &Path) -> SitelyzerResult<AnalysisResultSet> {
        let content = fs::read_to_string(path)
            .map_err(|e| SitelyzerError::system_error(&format!("read {}", path.display()), &e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn print_json<T: Serialize>(value: &T) -> SitelyzerResult<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
