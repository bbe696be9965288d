use std::sync::Arc;
use std::time::Duration;
use futures::future::join_all;
use serde_json::Value;
use tokio::time::timeout;
use crate::config::constants::timeout_duration_secs;
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::form_factor::FormFactor;
use crate::errors::{SitelyzerError, SitelyzerResult};
use crate::services::analyzers::default_analyzers;
use crate::services::page_fetcher::PageFetcher;
use crate::structs::analysis_result_set::AnalysisResultSet;
use crate::structs::analyzer_report::AnalyzerReport;
use crate::structs::config::fetch_config::FetchConfig;
use crate::traits::analyzer::Analyzer;

/// Runs every analyzer concurrently, each with its own fetch, and joins the
/// reports into one result set.
#[derive(Clone)]
pub struct AnalysisRunner {
    fetcher: PageFetcher,
    analyzers: Vec<Arc<dyn Analyzer>>,
    analyzer_timeout: Duration,
}

impl AnalysisRunner {
    pub fn new(config: &FetchConfig) -> SitelyzerResult<Self> {
        Ok(Self::with_analyzers(PageFetcher::new(config)?, default_analyzers(), config))
    }

    pub fn with_analyzers(fetcher: PageFetcher, analyzers: Vec<Arc<dyn Analyzer>>, config: &FetchConfig) -> Self {
        Self {
            fetcher,
            analyzers,
            analyzer_timeout: timeout_duration_secs(config.analyzer_timeout_secs),
        }
    }

    pub async fn analyze(&self, url: &str, form_factor: FormFactor) -> AnalysisResultSet {
        log::info!("🔍 Analyzing {} ({}) with {} analyzers", url, form_factor, self.analyzers.len());

        let runs = self.analyzers.iter().map(|analyzer| self.run_one(Arc::clone(analyzer), url));
        let reports = join_all(runs).await;

        let mut results = AnalysisResultSet::new();
        results.insert("url".to_string(), Value::String(url.to_string()));
        results.insert("form_factor".to_string(), Value::String(form_factor.to_string()));

        for (category, report) in reports {
            match serde_json::to_value(&report) {
                Ok(value) => {
                    results.insert(category.as_str().to_string(), value);
                }
                Err(e) => log::error!("❌ Could not encode {} report: {}", category, e),
            }
        }

        results
    }

    /// One analyzer by category. Fetch failures and timeouts degrade to the
    /// fetch-error report; a category with no analyzer is an error.
    pub async fn analyze_category(&self, url: &str, category: AnalyzerCategory) -> SitelyzerResult<AnalyzerReport> {
        match self.try_analyze_category(url, category).await {
            Err(e @ SitelyzerError::ValidationError { .. }) => Err(e),
            Err(e) => {
                log::warn!("⚠️ {}", e);
                Ok(AnalyzerReport::fetch_error())
            }
            Ok(report) => Ok(report),
        }
    }

    pub async fn try_analyze_category(&self, url: &str, category: AnalyzerCategory) -> SitelyzerResult<AnalyzerReport> {
        let analyzer = self
            .analyzers
            .iter()
            .find(|analyzer| analyzer.category() == category)
            .ok_or_else(|| {
                SitelyzerError::validation_error(
                    "category",
                    category.as_str(),
                    "no analyzer registered for this category",
                    None,
                )
            })?;

        self.fetch_and_analyze(analyzer.as_ref(), url).await
    }

    async fn fetch_and_analyze(&self, analyzer: &dyn Analyzer, url: &str) -> SitelyzerResult<AnalyzerReport> {
        let page = timeout(self.analyzer_timeout, self.fetcher.fetch(url))
            .await
            .map_err(|_| {
                SitelyzerError::analysis_error(
                    url,
                    analyzer.category().as_str(),
                    &format!("timed out after {:?}", self.analyzer_timeout),
                    true,
                )
            })??;

        Ok(analyzer.analyze(&page))
    }

    async fn run_one(&self, analyzer: Arc<dyn Analyzer>, url: &str) -> (AnalyzerCategory, AnalyzerReport) {
        let category = analyzer.category();

        let report = match self.fetch_and_analyze(analyzer.as_ref(), url).await {
            Ok(report) => report,
            Err(e) => {
                log::warn!("⚠️ {} analyzer gave up on {}: {}", category, url, e);
                AnalyzerReport::fetch_error()
            }
        };

        (category, report)
    }
}
