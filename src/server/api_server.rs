use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::HEALTH_MESSAGE;
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::form_factor::FormFactor;
use crate::errors::{SitelyzerError, SitelyzerResult};
use crate::helpers::url_validator::{is_valid_origin, normalize_url, validate_url};
use crate::services::analysis_runner::AnalysisRunner;
use crate::services::analytics::issue_aggregator::IssueAggregator;
use crate::services::analytics::issue_analytics::IssueAnalyticsService;
use crate::services::analytics::issue_prioritizer::prioritize_issues;
use crate::services::tutorials::tutorial_generator::TutorialGenerator;
use crate::structs::analysis_result_set::AnalysisResultSet;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;
use crate::structs::config::server_config::ServerConfig;

/// Everything the handlers share. Built once per server.
pub struct AppState {
    pub runner: AnalysisRunner,
    pub analytics: IssueAnalyticsService,
    pub tutorials: TutorialGenerator,
}

impl AppState {
    pub fn from_config(config: &Config) -> SitelyzerResult<Self> {
        Ok(Self {
            runner: AnalysisRunner::new(&config.fetch)?,
            analytics: IssueAnalyticsService::new(
                IssueAggregator::new().with_extra_categories(&config.analytics.extra_categories),
            ),
            tutorials: TutorialGenerator::from_config(&config.ai),
        })
    }
}

pub struct ApiServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(state),
            config,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);
        let state_filter = warp::any().map(move || Arc::clone(&state));

        let health = warp::path!("api" / "health")
            .and(warp::get())
            .and_then(health_handler);

        let analyze = warp::path!("api" / "analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and_then(analyze_handler);

        let analyze_category = warp::path!("api" / "analyze" / String)
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and_then(analyze_category_handler);

        let analytics = warp::path!("api" / "issues" / "analytics")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and_then(analytics_handler);

        let tutorials = warp::path!("api" / "issues" / "tutorials")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and_then(tutorials_handler);

        health
            .or(analyze)
            .or(analyze_category)
            .or(analytics)
            .or(tutorials)
            .recover(handle_rejection)
            .with(self.cors())
    }

    fn cors(&self) -> warp::cors::Builder {
        let origins: Vec<&str> = self
            .config
            .cors_origins
            .iter()
            .map(String::as_str)
            .filter(|origin| {
                let valid = is_valid_origin(origin);
                if !valid {
                    log::warn!("⚠️ Ignoring invalid CORS origin: {}", origin);
                }
                valid
            })
            .collect();

        warp::cors()
            .allow_origins(origins)
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST"])
    }

    /// Serves until Ctrl-C.
    pub async fn run(&self, port: Option<u16>) -> SitelyzerResult<()> {
        let port = port.unwrap_or(self.config.port);
        let addr: SocketAddr = format!("{}:{}", self.config.host, port).parse().map_err(|_| {
            SitelyzerError::validation_error(
                "server.host",
                &self.config.host,
                "must be an IP address",
                Some("Use 127.0.0.1 or 0.0.0.0"),
            )
        })?;

        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
            })
            .map_err(|e| SitelyzerError::system_error("bind API server", &e.to_string()))?;

        log::info!("🌐 API server listening on http://{}", bound);
        server.await;
        log::info!("🛑 API server stopped");
        Ok(())
    }
}

async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "healthy",
        "message": HEALTH_MESSAGE
    })))
}

async fn analyze_handler(request: AnalyzeRequest, state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return Ok(error_reply("URL is required", StatusCode::BAD_REQUEST)),
    };

    if !validate_url(url) {
        return Ok(error_reply("Invalid URL format", StatusCode::BAD_REQUEST));
    }

    let form_factor = request
        .form_factor
        .as_deref()
        .map(FormFactor::from_name)
        .unwrap_or_default();

    let results = state.runner.analyze(&normalize_url(url), form_factor).await;
    Ok(warp::reply::with_status(warp::reply::json(&results), StatusCode::OK))
}

async fn analyze_category_handler(
    slug: String,
    request: AnalyzeRequest,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, Infallible> {
    let Some(category) = AnalyzerCategory::from_slug(&slug) else {
        return Ok(error_reply(&format!("Unknown analyzer: {}", slug), StatusCode::NOT_FOUND));
    };

    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if validate_url(url) => url,
        _ => return Ok(error_reply("Invalid URL", StatusCode::BAD_REQUEST)),
    };

    match state.runner.analyze_category(&normalize_url(url), category).await {
        Ok(report) => Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)),
        Err(e) => {
            log::debug!("No analyzer for {}: {}", slug, e);
            Ok(error_reply(&format!("Unknown analyzer: {}", slug), StatusCode::NOT_FOUND))
        }
    }
}

async fn analytics_handler(results: AnalysisResultSet, state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&state.analytics.get_issue_analytics(&results)))
}

async fn tutorials_handler(results: AnalysisResultSet, state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    let issues = prioritize_issues(&state.analytics.extract_issues(&results));
    Ok(warp::reply::json(&state.tutorials.get_issue_tutorials(&issues).await))
}

/// Malformed JSON bodies get the same `{"error": ...}` shape as handler errors.
async fn handle_rejection(rejection: warp::Rejection) -> Result<impl warp::Reply, warp::Rejection> {
    if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(&format!("Invalid JSON body: {}", e), StatusCode::BAD_REQUEST));
    }
    Err(rejection)
}

fn error_reply(message: &str, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}
