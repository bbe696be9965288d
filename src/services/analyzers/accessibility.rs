use std::collections::HashSet;
use scraper::Html;
use serde_json::{json, Map};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::severity::Severity;
use crate::services::analyzers::{attr, build_report, recommendations_for, select};
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::structs::fetched_page::FetchedPage;
use crate::traits::analyzer::Analyzer;

const MAX_ISSUES: usize = 50;
const GENERIC_ALT_VALUES: &[&str] = &["image", "picture", "photo", "img"];
const UNLABELED_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button"];
const SKIP_LINK_TARGETS: &[&str] = &["#main", "#content", "#skip"];

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("missing_alt_text", "Add descriptive alt text to all images describing their content"),
    ("unlabeled_form_inputs", "Associate all form inputs with label elements or aria-label"),
    ("no_skip_link", "Add a skip to main content link at the beginning of the page"),
    ("missing_aria_labels", "Add aria-label attributes to buttons without text content"),
    ("no_focusable_elements", "Ensure interactive elements are keyboard accessible"),
];

pub struct AccessibilityAnalyzer;

impl AccessibilityAnalyzer {
    fn check_alt_text(document: &Html) -> Vec<AnalyzerIssue> {
        let mut missing = 0;
        let mut empty = 0;
        let mut generic = 0;

        for img in select(document, "img") {
            match attr(&img, "alt") {
                None => missing += 1,
                Some(alt) if alt.trim().is_empty() => empty += 1,
                Some(alt) if GENERIC_ALT_VALUES.contains(&alt.to_lowercase().as_str()) => generic += 1,
                Some(_) => {}
            }
        }

        let mut issues = Vec::new();
        if missing > 0 {
            issues.push(AnalyzerIssue::new(
                "missing_alt_text",
                "Missing alt text",
                format!("{} image(s) missing alt text", missing),
                Severity::Critical,
            ));
        }
        if empty > 0 {
            issues.push(AnalyzerIssue::new(
                "empty_alt_text",
                "Empty alt text",
                format!("{} image(s) have empty alt text", empty),
                Severity::High,
            ));
        }
        if generic > 0 {
            issues.push(AnalyzerIssue::new(
                "poor_alt_text",
                "Generic alt text",
                format!("{} image(s) have generic or non-descriptive alt text", generic),
                Severity::Medium,
            ));
        }
        issues
    }

    fn check_aria_labels(document: &Html) -> Vec<AnalyzerIssue> {
        let unnamed = select(document, "button")
            .iter()
            .filter(|button| {
                let has_text = button.text().any(|t| !t.trim().is_empty());
                let has_label = attr(button, "aria-label").is_some_and(|l| !l.trim().is_empty())
                    || attr(button, "aria-labelledby").is_some();
                !has_text && !has_label
            })
            .count();

        if unnamed == 0 {
            return Vec::new();
        }
        vec![AnalyzerIssue::new(
            "missing_aria_labels",
            "Buttons without accessible name",
            format!("{} button(s) have no text or aria-label", unnamed),
            Severity::High,
        )]
    }

    fn check_form_labels(document: &Html) -> Vec<AnalyzerIssue> {
        let labelled_ids: HashSet<&str> = select(document, "label[for]")
            .iter()
            .filter_map(|label| attr(label, "for"))
            .collect();

        let unlabeled = select(document, "input, textarea, select")
            .iter()
            .filter(|input| !UNLABELED_INPUT_TYPES.contains(&attr(input, "type").unwrap_or("text")))
            .filter(|input| {
                let by_for = attr(input, "id").is_some_and(|id| labelled_ids.contains(id));
                let by_aria = attr(input, "aria-label").is_some_and(|l| !l.is_empty());
                let by_placeholder = attr(input, "placeholder").is_some_and(|p| !p.is_empty());
                !(by_for || by_aria || by_placeholder)
            })
            .count();

        if unlabeled == 0 {
            return Vec::new();
        }
        vec![AnalyzerIssue::new(
            "unlabeled_form_inputs",
            "Unlabeled form inputs",
            format!("{} form input(s) missing associated label", unlabeled),
            Severity::High,
        )]
    }

    fn check_keyboard_accessibility(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();

        let has_skip_link = select(document, "a[href]")
            .iter()
            .filter_map(|link| attr(link, "href"))
            .any(|href| SKIP_LINK_TARGETS.contains(&href));
        if !has_skip_link {
            issues.push(AnalyzerIssue::new(
                "no_skip_link",
                "Missing skip link",
                "Missing skip to main content link",
                Severity::Medium,
            ));
        }

        if select(document, "a, button, input, select, textarea").is_empty() {
            issues.push(AnalyzerIssue::new(
                "no_focusable_elements",
                "No focusable elements",
                "No keyboard focusable elements found",
                Severity::High,
            ));
        }

        let positive_tabindex = select(document, "[tabindex]")
            .iter()
            .filter_map(|element| attr(element, "tabindex"))
            .filter_map(|value| value.trim().parse::<i64>().ok())
            .any(|value| value > 0);
        if positive_tabindex {
            issues.push(AnalyzerIssue::new(
                "positive_tabindex",
                "Positive tabindex",
                "Found positive tabindex values (should use 0 or -1 only)",
                Severity::Low,
            ));
        }

        issues
    }
}

impl Analyzer for AccessibilityAnalyzer {
    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Accessibility
    }

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport {
        let document = Html::parse_document(&page.body);
        let mut issues = Vec::new();

        issues.extend(Self::check_aria_labels(&document));
        issues.extend(Self::check_alt_text(&document));
        issues.extend(Self::check_form_labels(&document));
        issues.extend(Self::check_keyboard_accessibility(&document));

        let critical = issues.iter().filter(|i| i.severity == Severity::Critical).count();
        let mut metrics = Map::new();
        metrics.insert(
            "wcag_level".to_string(),
            json!(if critical > 0 { "Non-compliant" } else if issues.len() > 5 { "A" } else { "AA" }),
        );

        let recommendations = recommendations_for(&issues, RECOMMENDATIONS);
        build_report(issues, metrics, MAX_ISSUES, recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyzers::test_support::page;

    #[test]
    fn classifies_alt_text_problems() {
        let body = r##"<html><body><a href="#main">Skip</a>
            <img src="a.png"><img src="b.png" alt=""><img src="c.png" alt="Photo"><img src="d.png" alt="Team at work">
            </body></html>"##;

        let report = AccessibilityAnalyzer.analyze(&page("https://example.com", &[], body));

        let types: Vec<&str> = report.issues.iter().map(|i| i.issue_type.as_str()).collect();
        assert_eq!(types, vec!["missing_alt_text", "empty_alt_text", "poor_alt_text"]);
        assert_eq!(report.metrics["wcag_level"], "Non-compliant");
    }

    #[test]
    fn labels_by_for_aria_or_placeholder_count() {
        let body = r##"<html><body><a href="#content">Skip</a>
            <label for="email">Email</label><input id="email">
            <input aria-label="Search"><input placeholder="Name"><input type="hidden">
            <textarea></textarea>
            <button></button><button>Send</button>
            </body></html>"##;

        let report = AccessibilityAnalyzer.analyze(&page("https://example.com", &[], body));

        let unlabeled = report.issues.iter().find(|i| i.issue_type == "unlabeled_form_inputs").unwrap();
        assert_eq!(unlabeled.message, "1 form input(s) missing associated label");
        assert!(report.has_issue("missing_aria_labels"));
        assert!(!report.has_issue("no_skip_link"));
    }

    #[test]
    fn empty_page_lacks_keyboard_support() {
        let body = r#"<html><body><div tabindex="3">x</div></body></html>"#;

        let report = AccessibilityAnalyzer.analyze(&page("https://example.com", &[], body));

        assert!(report.has_issue("no_skip_link"));
        assert!(report.has_issue("no_focusable_elements"));
        assert!(report.has_issue("positive_tabindex"));
        assert_eq!(report.score, 94.0);
    }
}
