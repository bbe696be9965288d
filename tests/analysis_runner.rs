use std::convert::Infallible;
use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;
use flate2::write::GzEncoder;
use flate2::Compression;
use warp::Filter;
use sitelyzer::enums::analyzer_category::AnalyzerCategory;
use sitelyzer::enums::form_factor::FormFactor;
use sitelyzer::errors::SitelyzerError;
use sitelyzer::services::analysis_runner::AnalysisRunner;
use sitelyzer::services::analytics::issue_analytics::IssueAnalyticsService;
use sitelyzer::structs::analytics::issue_analytics::IssueAnalytics;
use sitelyzer::structs::config::fetch_config::FetchConfig;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Widgets</title><meta name="generator" content="WordPress 6.4"></head>
<body>
  <img src="/hero.png">
  <form><input type="text" id="q"></form>
  <a href="/about">About</a>
</body>
</html>"#;

async fn spawn_site() -> SocketAddr {
    let index = warp::path::end().map(|| warp::reply::html(PAGE));
    let slow = warp::path("slow").and_then(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Ok::<_, Infallible>(warp::reply::html(PAGE))
    });

    let compressed = warp::path("gzipped").map(|| {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        let padded = format!("{}<!-- {} -->", PAGE, "padding ".repeat(200));
        encoder.write_all(padded.as_bytes()).unwrap();
        let reply = warp::reply::with_header(encoder.finish().unwrap(), "content-encoding", "gzip");
        let reply = warp::reply::with_header(reply, "cache-control", "max-age=600");
        warp::reply::with_header(reply, "content-type", "text/html")
    });

    let (addr, server) = warp::serve(index.or(slow).or(compressed)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn every_analyzer_reports_on_a_plain_http_page() {
    let addr = spawn_site().await;
    let runner = AnalysisRunner::new(&FetchConfig::default()).unwrap();

    let results = runner.analyze(&format!("http://{}/", addr), FormFactor::Mobile).await;

    assert_eq!(results["form_factor"], "mobile");
    for category in ["performance", "security", "seo", "mobile_optimization", "accessibility"] {
        assert!(results[category]["issues"].as_array().is_some(), "{} missing", category);
    }

    let security_types: Vec<&str> = results["security"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|issue| issue["type"].as_str())
        .collect();
    assert!(security_types.contains(&"no_ssl"));
    assert!(security_types.contains(&"exposed_framework"));

    let IssueAnalytics::Prioritized(report) = IssueAnalyticsService::default().get_issue_analytics(&results) else {
        panic!("expected issues");
    };
    assert_eq!(report.prioritized_issues[0].severity.as_str(), "critical");
    assert!(report.quick_wins.iter().any(|win| win.category == "seo"));
    assert!(report.quick_wins.iter().any(|win| win.title == "Missing cache headers"));
    assert!(report.quick_wins.iter().any(|win| win.title == "Enable text compression"));
}

#[tokio::test]
async fn gzipped_pages_are_decoded_before_analysis() {
    let addr = spawn_site().await;
    let runner = AnalysisRunner::new(&FetchConfig::default()).unwrap();
    let url = format!("http://{}/gzipped", addr);

    let performance = runner.analyze_category(&url, AnalyzerCategory::Performance).await.unwrap();
    assert!(!performance.has_issue("missing_compression"));
    assert!(!performance.has_issue("missing_cache_headers"));
    assert!(performance.metrics["transfer_bytes"].as_u64().unwrap() < performance.metrics["document_bytes"].as_u64().unwrap());

    let security = runner.analyze_category(&url, AnalyzerCategory::Security).await.unwrap();
    assert!(security.has_issue("exposed_framework"));
}

#[tokio::test]
async fn single_category_errors_are_typed() {
    let addr = spawn_site().await;
    let config = FetchConfig {
        analyzer_timeout_secs: 1,
        ..FetchConfig::default()
    };
    let runner = AnalysisRunner::new(&config).unwrap();

    let err = runner
        .try_analyze_category(&format!("http://{}/slow", addr), AnalyzerCategory::Seo)
        .await
        .unwrap_err();
    assert!(matches!(err, SitelyzerError::AnalysisError { recoverable: true, ref stage, .. } if stage == "seo"));

    let unreachable = runner.try_analyze_category("http://127.0.0.1:1/", AnalyzerCategory::Seo).await.unwrap_err();
    assert!(matches!(unreachable, SitelyzerError::NetworkError { .. }));

    let degraded = runner.analyze_category("http://127.0.0.1:1/", AnalyzerCategory::Seo).await.unwrap();
    assert!(degraded.has_issue("fetch_error"));

    let missing = runner
        .analyze_category(&format!("http://{}/", addr), AnalyzerCategory::CoreWebVitals)
        .await
        .unwrap_err();
    assert!(matches!(missing, SitelyzerError::ValidationError { .. }));
}

#[tokio::test]
async fn unreachable_and_slow_sites_yield_fetch_error_reports() {
    let addr = spawn_site().await;
    let config = FetchConfig {
        analyzer_timeout_secs: 1,
        ..FetchConfig::default()
    };
    let runner = AnalysisRunner::new(&config).unwrap();

    let slow = runner.analyze(&format!("http://{}/slow", addr), FormFactor::Desktop).await;
    assert_eq!(slow["seo"]["score"], 0.0);
    assert_eq!(slow["seo"]["grade"], "F");
    assert_eq!(slow["seo"]["issues"][0]["type"], "fetch_error");

    let unreachable = runner.analyze("http://127.0.0.1:1/", FormFactor::Desktop).await;
    assert_eq!(unreachable["security"]["issues"][0]["severity"], "critical");
    assert_eq!(unreachable["security"]["recommendations"][0], "Check if the URL is correct and accessible");
}
