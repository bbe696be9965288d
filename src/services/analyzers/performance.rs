use scraper::Html;
use serde_json::{json, Map};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::severity::Severity;
use crate::services::analyzers::{attr, build_report, recommendations_for, select};
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::structs::fetched_page::FetchedPage;
use crate::traits::analyzer::Analyzer;

const MAX_ISSUES: usize = 50;
const MAX_STYLESHEETS: usize = 3;
const MAX_BLOCKING_SCRIPTS: usize = 2;
const MAX_INLINE_CSS_LINES: usize = 3;
const MAX_DOCUMENT_BYTES: usize = 500 * 1024;
const UNOPTIMIZED_IMAGE_EXTENSIONS: &[&str] = &[".bmp", ".tiff", ".tif"];

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("render_blocking_js", "Defer non-critical JavaScript or use async loading"),
    ("render_blocking_css", "Consider critical CSS inlining or splitting CSS files"),
    ("missing_cache_headers", "Implement proper Cache-Control headers on your server"),
    ("missing_compression", "Enable gzip or brotli compression for HTML, CSS and JavaScript"),
    ("unoptimized_images", "Convert images to WebP format for better compression"),
    ("large_document", "Reduce HTML size by removing inline data and unused markup"),
];

/// Static checks only: headers and markup of the fetched document. No
/// timing is measured.
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    fn check_compression(page: &FetchedPage) -> Option<AnalyzerIssue> {
        let compressed = page
            .header("content-encoding")
            .is_some_and(|encoding| !encoding.trim().eq_ignore_ascii_case("identity"));
        if compressed {
            return None;
        }
        Some(AnalyzerIssue::new(
            "missing_compression",
            "Enable text compression",
            "Response is served without Content-Encoding",
            Severity::Medium,
        ))
    }

    fn check_caching(page: &FetchedPage) -> Option<AnalyzerIssue> {
        match page.header("cache-control") {
            Some(value) if !value.trim().is_empty() => None,
            _ => Some(AnalyzerIssue::new(
                "missing_cache_headers",
                "Missing cache headers",
                "Cache-Control headers not found",
                Severity::High,
            )),
        }
    }

    fn check_document_size(page: &FetchedPage) -> Option<AnalyzerIssue> {
        let size = page.body.len();
        if size <= MAX_DOCUMENT_BYTES {
            return None;
        }
        Some(AnalyzerIssue::new(
            "large_document",
            "Large HTML document",
            format!("HTML document is {} KB, keep it under {} KB", size / 1024, MAX_DOCUMENT_BYTES / 1024),
            Severity::Medium,
        ))
    }

    fn check_render_blocking(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();

        let stylesheets = select(document, "link[rel=stylesheet]").len();
        if stylesheets > MAX_STYLESHEETS {
            issues.push(AnalyzerIssue::new(
                "render_blocking_css",
                "Render-blocking CSS",
                format!("Found {} CSS files which may block rendering", stylesheets),
                Severity::Medium,
            ));
        }

        let blocking_scripts = select(document, "script")
            .iter()
            .filter(|script| attr(script, "async").is_none() && attr(script, "defer").is_none())
            .count();
        if blocking_scripts > MAX_BLOCKING_SCRIPTS {
            issues.push(AnalyzerIssue::new(
                "render_blocking_js",
                "Render-blocking JavaScript",
                format!("Found {} render-blocking JavaScript files", blocking_scripts),
                Severity::High,
            ));
        }

        issues
    }

    fn check_images(document: &Html) -> Option<AnalyzerIssue> {
        let unoptimized = select(document, "img[src]")
            .iter()
            .filter_map(|img| attr(img, "src"))
            .filter(|src| {
                let src = src.to_ascii_lowercase();
                UNOPTIMIZED_IMAGE_EXTENSIONS.iter().any(|ext| src.ends_with(ext))
            })
            .count();

        if unoptimized == 0 {
            return None;
        }
        Some(AnalyzerIssue::new(
            "unoptimized_images",
            "Unoptimized image formats",
            format!("{} images use unoptimized formats", unoptimized),
            Severity::High,
        ))
    }

    fn check_minification(document: &Html) -> Option<AnalyzerIssue> {
        let unminified = select(document, "style")
            .iter()
            .any(|style| style.text().collect::<String>().trim().lines().count() > MAX_INLINE_CSS_LINES);
        if !unminified {
            return None;
        }
        Some(AnalyzerIssue::new(
            "non_minified_css",
            "Inline CSS not minified",
            "Inline CSS should be minified",
            Severity::Low,
        ))
    }
}

impl Analyzer for PerformanceAnalyzer {
    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Performance
    }

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport {
        let document = Html::parse_document(&page.body);
        let mut issues = Vec::new();

        issues.extend(Self::check_images(&document));
        issues.extend(Self::check_render_blocking(&document));
        issues.extend(Self::check_minification(&document));
        issues.extend(Self::check_caching(page));
        issues.extend(Self::check_compression(page));
        issues.extend(Self::check_document_size(page));

        let images = select(&document, "img");
        let lazy_loaded = images.iter().filter(|img| attr(img, "loading") == Some("lazy")).count();

        let mut metrics = Map::new();
        metrics.insert("lazy_loading".to_string(), json!({"total_images": images.len(), "lazy_loaded": lazy_loaded}));
        metrics.insert("document_bytes".to_string(), json!(page.body.len()));
        metrics.insert("transfer_bytes".to_string(), json!(page.transfer_size));

        let recommendations = recommendations_for(&issues, RECOMMENDATIONS);
        build_report(issues, metrics, MAX_ISSUES, recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyzers::test_support::page;

    #[test]
    fn compressed_cached_lean_page_is_clean() {
        let body = r#"<html><head><link rel="stylesheet" href="a.css"><script src="a.js" defer></script></head>
            <body><img src="a.webp" loading="lazy"></body></html>"#;
        let headers = [("Content-Encoding", "gzip"), ("Cache-Control", "max-age=3600")];

        let report = PerformanceAnalyzer.analyze(&page("https://example.com", &headers, body));

        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.score, 100.0);
        assert_eq!(report.metrics["lazy_loading"]["lazy_loaded"], 1);
    }

    #[test]
    fn header_gaps_produce_cache_and_compression_quick_win_titles() {
        let report = PerformanceAnalyzer.analyze(&page("https://example.com", &[], "<html><body>hi</body></html>"));

        assert!(report.has_issue("missing_cache_headers"));
        assert!(report.has_issue("missing_compression"));
        let titles: Vec<String> = report.issues.iter().map(|i| i.title.to_lowercase()).collect();
        assert!(titles.iter().any(|t| t.contains("cache")));
        assert!(titles.iter().any(|t| t.contains("compression")));
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn markup_checks() {
        let body = r#"<html><head>
            <link rel="stylesheet" href="1.css"><link rel="stylesheet" href="2.css">
            <link rel="stylesheet" href="3.css"><link rel="stylesheet" href="4.css">
            <script src="a.js"></script><script src="b.js"></script><script>var x = 1;</script>
            <script src="c.js" async></script>
            <style>
              body { margin: 0; }
              h1 { color: red; }
              p { color: blue; }
              a { color: green; }
            </style>
            </head><body><img src="/photo.BMP"><img src="scan.tiff"></body></html>"#;
        let headers = [("Content-Encoding", "br"), ("Cache-Control", "no-cache")];

        let report = PerformanceAnalyzer.analyze(&page("https://example.com", &headers, body));

        let types: Vec<&str> = report.issues.iter().map(|i| i.issue_type.as_str()).collect();
        assert_eq!(types, vec!["unoptimized_images", "render_blocking_css", "render_blocking_js", "non_minified_css"]);
        assert!(report.issues[0].message.starts_with("2 images"));
    }

    #[test]
    fn oversized_document_is_flagged() {
        let body = format!("<html><body>{}</body></html>", "x".repeat(MAX_DOCUMENT_BYTES + 1));
        let headers = [("Content-Encoding", "gzip"), ("Cache-Control", "max-age=60")];

        let report = PerformanceAnalyzer.analyze(&page("https://example.com", &headers, &body));

        assert_eq!(report.issues.len(), 1);
        assert!(report.has_issue("large_document"));
    }
}
