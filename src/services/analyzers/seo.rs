use scraper::Html;
use serde_json::{json, Map};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::severity::Severity;
use crate::services::analyzers::{attr, build_report, recommendations_for, select};
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::structs::fetched_page::FetchedPage;
use crate::traits::analyzer::Analyzer;

const MAX_ISSUES: usize = 50;
const META_DESCRIPTION_RANGE: std::ops::RangeInclusive<usize> = 50..=160;

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("missing_meta_description", "Add a compelling meta description (50-160 characters)"),
    ("missing_h1", "Add an H1 tag with your primary keyword"),
    ("missing_alt_tags", "Add descriptive alt text to all images"),
    ("missing_viewport", "Add viewport meta tag for mobile optimization"),
];

pub struct SeoAnalyzer;

impl SeoAnalyzer {
    fn check_meta_tags(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();

        match select(document, "meta[name=description]").first() {
            None => issues.push(AnalyzerIssue::new(
                "missing_meta_description",
                "Missing Meta Tags: description",
                "Meta description not found",
                Severity::High,
            )),
            Some(tag) => {
                let length = attr(tag, "content").unwrap_or_default().chars().count();
                if !META_DESCRIPTION_RANGE.contains(&length) {
                    issues.push(AnalyzerIssue::new(
                        "meta_description_length",
                        "Meta description length",
                        format!("Meta description length is {}, should be 50-160 characters", length),
                        Severity::Medium,
                    ));
                }
            }
        }

        if select(document, "meta[name=keywords]").is_empty() {
            issues.push(AnalyzerIssue::new(
                "missing_keywords",
                "Missing Meta Tags: keywords",
                "Meta keywords not found",
                Severity::Low,
            ));
        }

        if select(document, "meta[name=viewport]").is_empty() {
            issues.push(AnalyzerIssue::new(
                "missing_viewport",
                "Missing viewport meta tag",
                "Viewport meta tag not found (mobile not optimized)",
                Severity::High,
            ));
        }

        issues
    }

    fn check_headings(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();
        let h1_count = select(document, "h1").len();

        if h1_count == 0 {
            issues.push(AnalyzerIssue::new("missing_h1", "Missing H1 heading", "No H1 tag found on page", Severity::High));
        } else if h1_count > 1 {
            issues.push(AnalyzerIssue::new(
                "multiple_h1",
                "Multiple H1 headings",
                format!("Multiple H1 tags found ({}), should have only one", h1_count),
                Severity::Medium,
            ));
        }

        if select(document, "h1, h2, h3, h4, h5, h6").len() < 3 {
            issues.push(AnalyzerIssue::new(
                "poor_heading_structure",
                "Poor Heading Structure",
                "Poor heading hierarchy, consider adding more structured headings",
                Severity::Low,
            ));
        }

        issues
    }

    fn check_alt_tags(document: &Html) -> (usize, usize, Vec<AnalyzerIssue>) {
        let images = select(document, "img");
        let missing_alt = images
            .iter()
            .filter(|img| attr(img, "alt").map_or(true, |alt| alt.trim().is_empty()))
            .count();

        let mut issues = Vec::new();
        if missing_alt > 0 {
            issues.push(AnalyzerIssue::new(
                "missing_alt_tags",
                "Images missing alt text",
                format!("{} images missing alt text (out of {})", missing_alt, images.len()),
                Severity::Medium,
            ));
        }
        (images.len(), missing_alt, issues)
    }

    fn check_url_structure(document: &Html) -> Vec<AnalyzerIssue> {
        let links = select(document, "a");
        let unfriendly = links
            .iter()
            .filter_map(|link| attr(link, "href"))
            .filter(|href| !href.is_empty() && (href.contains('=') || href.contains('?') || href.contains('#')))
            .count();

        if (unfriendly as f64) > links.len() as f64 * 0.3 {
            vec![AnalyzerIssue::new(
                "unfriendly_urls",
                "Unfriendly URLs",
                "Many URLs are not SEO-friendly (contain parameters/fragments)",
                Severity::Medium,
            )]
        } else {
            Vec::new()
        }
    }
}

impl Analyzer for SeoAnalyzer {
    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Seo
    }

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport {
        let document = Html::parse_document(&page.body);
        let mut issues = Vec::new();
        let mut metrics = Map::new();

        issues.extend(Self::check_meta_tags(&document));
        issues.extend(Self::check_headings(&document));

        let (image_count, missing_alt, alt_issues) = Self::check_alt_tags(&document);
        issues.extend(alt_issues);
        metrics.insert("images".to_string(), json!({"total": image_count, "missing_alt": missing_alt}));

        issues.extend(Self::check_url_structure(&document));

        let recommendations = recommendations_for(&issues, RECOMMENDATIONS);
        build_report(issues, metrics, MAX_ISSUES, recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyzers::test_support::page;

    #[test]
    fn well_formed_page_has_no_issues() {
        let body = r#"<html><head>
            <meta name="description" content="A page about widgets, how they are built and why they matter to you.">
            <meta name="keywords" content="widgets">
            <meta name="viewport" content="width=device-width">
            </head><body><h1>Widgets</h1><h2>Build</h2><h3>Use</h3>
            <img src="a.png" alt="A blue widget"><a href="/about">About</a></body></html>"#;

        let report = SeoAnalyzer.analyze(&page("https://example.com", &[], body));

        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.metrics["images"]["total"], 1);
    }

    #[test]
    fn bare_page_reports_meta_and_heading_gaps() {
        let body = r#"<html><body><img src="a.png"><img src="b.png" alt=" "><a href="?a=1">x</a></body></html>"#;

        let report = SeoAnalyzer.analyze(&page("https://example.com", &[], body));

        for expected in ["missing_meta_description", "missing_keywords", "missing_viewport",
                         "missing_h1", "poor_heading_structure", "missing_alt_tags", "unfriendly_urls"] {
            assert!(report.has_issue(expected), "missing {}", expected);
        }
        assert_eq!(report.metrics["images"]["missing_alt"], 2);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn short_description_and_duplicate_h1() {
        let body = r#"<html><head><meta name="description" content="Too short"></head>
            <body><h1>One</h1><h1>Two</h1><h2>Three</h2></body></html>"#;

        let report = SeoAnalyzer.analyze(&page("https://example.com", &[], body));

        assert!(report.has_issue("meta_description_length"));
        assert!(report.has_issue("multiple_h1"));
        assert!(!report.has_issue("poor_heading_structure"));
    }
}
