use serde_json::json;
use warp::http::StatusCode;
use sitelyzer::server::api_server::{ApiServer, AppState};
use sitelyzer::structs::config::config::Config;
use sitelyzer::structs::config::server_config::ServerConfig;

fn server(cors_origins: Vec<&str>) -> ApiServer {
    let mut config = Config::default();
    config.ai.api_key_env = "SITELYZER_TEST_UNSET_KEY".to_string();

    let server_config = ServerConfig {
        cors_origins: cors_origins.into_iter().map(String::from).collect(),
        ..ServerConfig::default()
    };
    ApiServer::new(AppState::from_config(&config).unwrap(), server_config)
}

#[tokio::test]
async fn preflight_honours_configured_origins() {
    let routes = server(vec!["http://localhost:3000", "not an origin"]).routes();

    let allowed = warp::test::request()
        .method("OPTIONS")
        .path("/api/issues/analytics")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .reply(&routes)
        .await;
    assert_eq!(allowed.status(), StatusCode::OK);

    let denied = warp::test::request()
        .method("OPTIONS")
        .path("/api/issues/analytics")
        .header("origin", "http://evil.example")
        .header("access-control-request-method", "POST")
        .reply(&routes)
        .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn analytics_endpoint_prioritizes_posted_results() {
    let response = warp::test::request()
        .method("POST")
        .path("/api/issues/analytics")
        .json(&json!({
            "seo": {"issues": [
                {"type": "missing_keywords", "message": "Meta keywords not found", "severity": "low"},
                {"type": "missing_h1", "title": "Missing H1 heading", "severity": "high"}
            ]}
        }))
        .reply(&server(vec![]).routes())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let report: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(report["total_issues"], 2);
    assert_eq!(report["prioritized_issues"][0]["title"], "Missing H1 heading");
    assert_eq!(report["quick_wins"][0]["title"], "Meta keywords not found");
    assert_eq!(report["estimated_fix_time"]["total_minutes"], 35);
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response = warp::test::request()
        .method("GET")
        .path("/api/unknown")
        .reply(&server(vec![]).routes())
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
