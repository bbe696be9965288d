use std::fmt;
use serde::{Deserialize, Serialize};

/// Analyzer categories whose issues feed the issue analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerCategory {
    Performance,
    Security,
    Seo,
    CodingStandards,
    UserFriendliness,
    MobileOptimization,
    Accessibility,
    AdvancedMetrics,
    CoreWebVitals,
}

impl AnalyzerCategory {
    /// Aggregation order.
    pub const ALL: [AnalyzerCategory; 9] = [
        AnalyzerCategory::Performance,
        AnalyzerCategory::Security,
        AnalyzerCategory::Seo,
        AnalyzerCategory::CodingStandards,
        AnalyzerCategory::UserFriendliness,
        AnalyzerCategory::MobileOptimization,
        AnalyzerCategory::Accessibility,
        AnalyzerCategory::AdvancedMetrics,
        AnalyzerCategory::CoreWebVitals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerCategory::Performance => "performance",
            AnalyzerCategory::Security => "security",
            AnalyzerCategory::Seo => "seo",
            AnalyzerCategory::CodingStandards => "coding_standards",
            AnalyzerCategory::UserFriendliness => "user_friendliness",
            AnalyzerCategory::MobileOptimization => "mobile_optimization",
            AnalyzerCategory::Accessibility => "accessibility",
            AnalyzerCategory::AdvancedMetrics => "advanced_metrics",
            AnalyzerCategory::CoreWebVitals => "core_web_vitals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.as_str() == key)
    }

    /// URL path form, `mobile-optimization` for `mobile_optimization`.
    pub fn slug(&self) -> String {
        self.as_str().replace('_', "-")
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.slug() == slug)
    }
}

impl fmt::Display for AnalyzerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_use_hyphens() {
        assert_eq!(AnalyzerCategory::CoreWebVitals.slug(), "core-web-vitals");
        assert_eq!(AnalyzerCategory::from_slug("mobile-optimization"), Some(AnalyzerCategory::MobileOptimization));
        assert_eq!(AnalyzerCategory::from_slug("mobile_optimization"), None);
        assert_eq!(AnalyzerCategory::from_key("seo"), Some(AnalyzerCategory::Seo));
    }
}
