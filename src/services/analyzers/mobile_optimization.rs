use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use serde_json::{json, Map};
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::enums::severity::Severity;
use crate::services::analyzers::{attr, build_report, recommendations_for, select};
use crate::structs::analyzer_report::{AnalyzerIssue, AnalyzerReport};
use crate::structs::fetched_page::FetchedPage;
use crate::traits::analyzer::Analyzer;

const MAX_ISSUES: usize = 40;
const MIN_FONT_PX: f64 = 12.0;
const MAX_IFRAMES: usize = 5;
/// Share of buttons and links allowed to look undersized.
const SMALL_TARGET_RATIO: f64 = 0.2;

static FONT_SIZE_PX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)font-size\s*:\s*(\d+(?:\.\d+)?)px").expect("static regex")
});

const RECOMMENDATIONS: &[(&str, &str)] = &[
    ("missing_viewport", "Add viewport meta tag: <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"),
    ("too_small_text", "Increase font sizes to at least 12px for better mobile readability"),
    ("small_touch_targets", "Ensure touch targets are at least 48x48 pixels"),
    ("flash_content", "Replace Flash content with HTML5 video or remove blocking content"),
    ("not_app_capable", "Add apple-mobile-web-app-capable meta tag for better iOS experience"),
];

pub struct MobileOptimizationAnalyzer;

impl MobileOptimizationAnalyzer {
    fn check_viewport(document: &Html) -> Vec<AnalyzerIssue> {
        let Some(viewport) = select(document, "meta[name=viewport]").into_iter().next() else {
            return vec![AnalyzerIssue::new(
                "missing_viewport",
                "Missing viewport meta tag",
                "Viewport meta tag not found",
                Severity::Critical,
            )];
        };

        let content = attr(&viewport, "content").unwrap_or_default();
        let mut issues = Vec::new();
        if !content.contains("width=device-width") {
            issues.push(AnalyzerIssue::new(
                "invalid_viewport",
                "Invalid viewport",
                format!("Viewport should include width=device-width. Current: {}", content),
                Severity::High,
            ));
        }
        if !content.contains("initial-scale=1") {
            issues.push(AnalyzerIssue::new(
                "missing_initial_scale",
                "Viewport missing initial scale",
                "Viewport missing initial-scale=1",
                Severity::Medium,
            ));
        }
        issues
    }

    /// Inline `<style>` blocks and `style` attributes.
    fn stylesheet_text(document: &Html) -> String {
        let blocks = select(document, "style").into_iter().map(|style| style.text().collect::<String>());
        let inline = select(document, "[style]").into_iter().filter_map(|el| attr(&el, "style").map(str::to_string));
        blocks.chain(inline).collect::<Vec<_>>().join("\n")
    }

    fn check_text_sizing(css: &str) -> Option<AnalyzerIssue> {
        let smallest = FONT_SIZE_PX
            .captures_iter(css)
            .filter_map(|caps| caps[1].parse::<f64>().ok())
            .fold(f64::INFINITY, f64::min);

        if smallest >= MIN_FONT_PX {
            return None;
        }
        Some(AnalyzerIssue::new(
            "too_small_text",
            "Text too small on mobile",
            format!("Found font sizes below {}px (smallest {}px)", MIN_FONT_PX, smallest),
            Severity::High,
        ))
    }

    fn has_span(element: &ElementRef) -> bool {
        element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|child| child.value().name() == "span")
    }

    fn check_touch_targets(document: &Html) -> Option<AnalyzerIssue> {
        let targets = select(document, "button, a");
        if targets.is_empty() {
            return None;
        }

        let small = targets
            .iter()
            .filter(|el| {
                let padded = attr(el, "style").is_some_and(|style| style.to_lowercase().contains("padding"));
                !padded && !Self::has_span(el)
            })
            .count();

        if (small as f64) <= targets.len() as f64 * SMALL_TARGET_RATIO {
            return None;
        }
        Some(AnalyzerIssue::new(
            "small_touch_targets",
            "Small touch targets",
            format!("{} interactive elements may have inadequate touch targets", small),
            Severity::Medium,
        ))
    }

    fn check_mobile_meta(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();
        if select(document, "meta[name=theme-color]").is_empty() {
            issues.push(AnalyzerIssue::new(
                "no_theme_color",
                "Missing theme color",
                "Missing theme-color meta tag (improves mobile appearance)",
                Severity::Low,
            ));
        }
        if select(document, "meta[name=apple-mobile-web-app-capable]").is_empty() {
            issues.push(AnalyzerIssue::new(
                "not_app_capable",
                "Missing web app meta tag",
                "Missing apple-mobile-web-app-capable meta tag",
                Severity::Low,
            ));
        }
        issues
    }

    fn check_blocking_content(document: &Html) -> Vec<AnalyzerIssue> {
        let mut issues = Vec::new();
        if !select(document, "embed, object").is_empty() {
            issues.push(AnalyzerIssue::new(
                "flash_content",
                "Embedded plugin content",
                "Page contains embedded Flash content (not mobile-friendly)",
                Severity::High,
            ));
        }
        let iframes = select(document, "iframe").len();
        if iframes > MAX_IFRAMES {
            issues.push(AnalyzerIssue::new(
                "many_iframes",
                "Too many iframes",
                format!("Found {} iframes which may not be responsive", iframes),
                Severity::Medium,
            ));
        }
        issues
    }

    fn mobile_score(document: &Html) -> f64 {
        let mut score = 50.0;
        if !select(document, "meta[name=viewport]").is_empty() {
            score += 10.0;
        }
        let images = select(document, "img");
        if !images.is_empty() {
            let responsive = images
                .iter()
                .filter(|img| attr(img, "srcset").is_some() || attr(img, "sizes").is_some())
                .count();
            score += responsive as f64 / images.len() as f64 * 15.0;
        }
        if !select(document, "style").is_empty() {
            score += 10.0;
        }
        if !select(document, "button").is_empty() {
            score += 10.0;
        }
        if !select(document, "meta[name=theme-color]").is_empty() {
            score += 5.0;
        }
        f64::min(score, 100.0)
    }
}

impl Analyzer for MobileOptimizationAnalyzer {
    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::MobileOptimization
    }

    fn analyze(&self, page: &FetchedPage) -> AnalyzerReport {
        let document = Html::parse_document(&page.body);
        let css = Self::stylesheet_text(&document);
        let mut issues = Vec::new();

        issues.extend(Self::check_viewport(&document));
        issues.extend(Self::check_text_sizing(&css));
        issues.extend(Self::check_touch_targets(&document));
        issues.extend(Self::check_mobile_meta(&document));
        issues.extend(Self::check_blocking_content(&document));

        let css_lower = css.to_lowercase();
        let mut metrics = Map::new();
        metrics.insert("mobile_score".to_string(), json!(Self::mobile_score(&document)));
        metrics.insert(
            "responsive_design".to_string(),
            json!({
                "has_viewport": !select(&document, "meta[name=viewport]").is_empty(),
                "has_media_queries": css_lower.contains("@media"),
                "has_responsive_images": !select(&document, "img[srcset]").is_empty(),
                "has_flexible_layout": css_lower.contains("display: flex") || css_lower.contains("display: grid"),
            }),
        );

        let recommendations = recommendations_for(&issues, RECOMMENDATIONS);
        build_report(issues, metrics, MAX_ISSUES, recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyzers::test_support::page;

    const HEAD: &str = r##"<meta name="viewport" content="width=device-width, initial-scale=1">
        <meta name="theme-color" content="#0af">
        <meta name="apple-mobile-web-app-capable" content="yes">"##;

    fn analyze(body: &str) -> AnalyzerReport {
        MobileOptimizationAnalyzer.analyze(&page("https://example.com", &[], body))
    }

    #[test]
    fn responsive_page_is_clean() {
        let body = format!(
            r#"<html><head>{}<style>@media (max-width: 600px) {{ main {{ display: flex; font-size: 16px; }} }}</style></head>
            <body><button style="padding: 12px">Go</button><img src="a.png" srcset="a@2x.png 2x"></body></html>"#,
            HEAD
        );

        let report = analyze(&body);

        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.metrics["mobile_score"], 100.0);
        assert_eq!(report.metrics["responsive_design"]["has_media_queries"], true);
        assert_eq!(report.metrics["responsive_design"]["has_flexible_layout"], true);
    }

    #[test]
    fn missing_viewport_is_critical_and_alone() {
        let report = analyze("<html><head></head><body></body></html>");

        let viewport = report.issues.iter().find(|i| i.issue_type == "missing_viewport").unwrap();
        assert_eq!(viewport.severity, Severity::Critical);
        assert!(!report.has_issue("invalid_viewport"));
        assert!(report.has_issue("no_theme_color"));
        assert!(report.has_issue("not_app_capable"));
        assert_eq!(report.metrics["mobile_score"], 50.0);
    }

    #[test]
    fn partial_viewport_content() {
        let body = r#"<html><head><meta name="viewport" content="initial-scale=1"></head></html>"#;
        let report = analyze(body);
        assert!(report.has_issue("invalid_viewport"));
        assert!(!report.has_issue("missing_initial_scale"));
    }

    #[test]
    fn small_fonts_from_blocks_and_attributes() {
        let from_block = format!("<html><head>{}<style>small {{ font-size:9px }}</style></head></html>", HEAD);
        assert!(analyze(&from_block).has_issue("too_small_text"));

        let from_attribute = format!(r#"<html><head>{}</head><body><p style="font-size: 10.5px">x</p></body></html>"#, HEAD);
        assert!(analyze(&from_attribute).has_issue("too_small_text"));

        let readable = format!("<html><head>{}<style>p {{ font-size: 12px }}</style></head></html>", HEAD);
        assert!(!analyze(&readable).has_issue("too_small_text"));
    }

    #[test]
    fn touch_targets_need_padding_or_inner_span() {
        let roomy = format!(
            r#"<html><head>{}</head><body><a href="/a"><span>A</span></a><a href="/b"><span>B</span></a>
            <a href="/c"><span>C</span></a><a href="/d"><span>D</span></a><a href="/e">E</a></body></html>"#,
            HEAD
        );
        assert!(!analyze(&roomy).has_issue("small_touch_targets"));

        let cramped = format!(
            r#"<html><head>{}</head><body><a href="/a">A</a><a href="/b">B</a><button style="padding:8px">C</button></body></html>"#,
            HEAD
        );
        let report = analyze(&cramped);
        let issue = report.issues.iter().find(|i| i.issue_type == "small_touch_targets").unwrap();
        assert!(issue.message.starts_with("2 interactive"));
    }

    #[test]
    fn plugins_and_iframes_block_mobile() {
        let frames = "<iframe></iframe>".repeat(6);
        let body = format!(r#"<html><head>{}</head><body><object data="a.swf"></object>{}</body></html>"#, HEAD, frames);

        let report = analyze(&body);

        assert!(report.has_issue("flash_content"));
        assert!(report.has_issue("many_iframes"));
        assert_eq!(report.recommendations, vec!["Replace Flash content with HTML5 video or remove blocking content"]);
    }
}
