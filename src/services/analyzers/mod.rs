//! HTML-heuristic analyzers. Each one inspects a fetched page for one
//! quality dimension and reports through [`AnalyzerReport`].

pub mod accessibility;
pub mod mobile_optimization;
pub mod performance;
pub mod security;
pub mod seo;

use std::sync::Arc;
use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};
use crate::helpers::scoring;
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::traits::analyzer::Analyzer;

pub fn default_analyzers() -> Vec<Arc<dyn Analyzer>> {
    vec![
        Arc::new(performance::PerformanceAnalyzer),
        Arc::new(security::SecurityAnalyzer),
        Arc::new(seo::SeoAnalyzer),
        Arc::new(mobile_optimization::MobileOptimizationAnalyzer),
        Arc::new(accessibility::AccessibilityAnalyzer),
    ]
}

/// Elements matching `css`. A selector that fails to parse matches nothing.
pub(crate) fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(e) => {
            log::warn!("Skipping check, bad selector '{}': {:?}", css, e);
            Vec::new()
        }
    }
}

pub(crate) fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

pub(crate) fn build_report(
    issues: Vec<AnalyzerIssue>,
    metrics: Map<String, Value>,
    max_issues: usize,
    recommendations: Vec<String>,
) -> AnalyzerReport {
    let score = scoring::score(issues.len(), max_issues);
    AnalyzerReport {
        score,
        grade: scoring::grade(score).to_string(),
        metrics,
        issues,
        recommendations,
    }
}

/// Recommendation text for each issue type present, in table order.
pub(crate) fn recommendations_for(issues: &[AnalyzerIssue], table: &[(&str, &str)]) -> Vec<String> {
    table
        .iter()
        .filter(|(issue_type, _)| issues.iter().any(|issue| issue.issue_type == *issue_type))
        .map(|(_, text)| text.to_string())
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use crate::structs::fetched_page::FetchedPage;

    pub fn page(url: &str, headers: &[(&str, &str)], body: &str) -> FetchedPage {
        FetchedPage {
            url: url.to_string(),
            status: 200,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            body: body.to_string(),
            transfer_size: body.len(),
        }
    }
}
