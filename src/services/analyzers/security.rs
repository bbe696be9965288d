use scraper::Html;
use serde_json::{json, Map};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::severity::Severity;
use crate::services::analyzers::{attr, build_report, recommendations_for, select};
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::structs::fetched_page::FetchedPage;
use crate::traits::analyzer::Analyzer;

const MAX_ISSUES: usize = 40;

/// (header, short name)
const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("Strict-Transport-Security", "HSTS"),
    ("X-Content-Type-Options", "X-Content-Type-Options"),
    ("X-Frame-Options", "X-Frame-Options"),
    ("Content-Security-Policy", "CSP"),
    ("X-XSS-Protection", "X-XSS-Protection"),
];

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("no_ssl", "Enable HTTPS with a valid SSL certificate"),
    ("missing_csp", "Implement Content Security Policy (CSP) headers"),
    ("missing_hsts", "Add HSTS header to force HTTPS"),
    ("exposed_framework", "Hide server/framework information from headers"),
];

pub struct SecurityAnalyzer;

impl SecurityAnalyzer {
    fn check_https(page: &FetchedPage) -> Vec<AnalyzerIssue> {
        if page.is_https() {
            return Vec::new();
        }
        vec![AnalyzerIssue::new("no_ssl", "Missing HTTPS", "Website does not use HTTPS", Severity::Critical)]
    }

    fn check_security_headers(page: &FetchedPage) -> Vec<AnalyzerIssue> {
        SECURITY_HEADERS
            .iter()
            .filter(|(header, _)| page.header(header).is_none())
            .map(|(_, name)| {
                let severity = if *name == "CSP" { Severity::High } else { Severity::Medium };
                AnalyzerIssue::new(
                    &format!("missing_{}", name.to_lowercase()),
                    "Missing Security Headers",
                    format!("Missing security header: {}", name),
                    severity,
                )
            })
            .collect()
    }

    fn has_mixed_content(page: &FetchedPage) -> bool {
        page.is_https() && (page.body.contains("src=\"http://") || page.body.contains("href=\"http://"))
    }

    fn check_exposed_framework(document: &Html) -> Vec<AnalyzerIssue> {
        select(document, "meta[name=generator]")
            .iter()
            .filter_map(|tag| attr(tag, "content"))
            .filter(|content| content.contains("WordPress") || content.contains("Joomla"))
            .map(|content| {
                AnalyzerIssue::new(
                    "exposed_framework",
                    "Framework version exposed",
                    format!("Framework version exposed: {}", content),
                    Severity::Medium,
                )
            })
            .collect()
    }
}

impl Analyzer for SecurityAnalyzer {
    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Security
    }

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport {
        let document = Html::parse_document(&page.body);
        let mut issues = Vec::new();
        let mut metrics = Map::new();

        issues.extend(Self::check_https(page));
        metrics.insert("ssl".to_string(), json!({"has_ssl": page.is_https()}));

        issues.extend(Self::check_security_headers(page));

        if Self::has_mixed_content(page) {
            issues.push(AnalyzerIssue::new(
                "mixed_content",
                "Mixed content",
                "Mixed content detected (HTTP resources on HTTPS page)",
                Severity::High,
            ));
        }

        issues.extend(Self::check_exposed_framework(&document));

        let recommendations = recommendations_for(&issues, RECOMMENDATIONS);
        build_report(issues, metrics, MAX_ISSUES, recommendations)
    }
}
