use serde_json::Value;
use crate::enums::analyzer_category::AnalyzerCategory;
use crate::structs::analysis_result_set::AnalysisResultSet;
use crate::structs::issue::Issue;

/// Flattens every whitelisted analyzer record into one issue list.
#[derive(Debug, Clone)]
pub struct IssueAggregator {
    categories: Vec<String>,
}

impl IssueAggregator {
    pub fn new() -> Self {
        Self {
            categories: AnalyzerCategory::ALL
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
        }
    }

    /// Whitelists additional analyzer keys after the built-in ones.
    pub fn with_extra_categories(mut self, extra: &[String]) -> Self {
        for category in extra {
            if !self.categories.contains(category) {
                self.categories.push(category.clone());
            }
        }
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn extract_all_issues(&self, results: &AnalysisResultSet) -> Vec<Issue> {
        let mut issues = Vec::new();

        for category in &self.categories {
            let Some(record) = results.get(category) else {
                continue;
            };

            let Some(entries) = Self::issue_entries(record) else {
                log::debug!("Skipping '{}': record has no issue list", category);
                continue;
            };

            for entry in entries {
                match entry.as_object() {
                    Some(fields) => issues.push(Issue::from_record(fields, category)),
                    None => log::debug!("Skipping malformed issue in '{}': {}", category, entry),
                }
            }
        }

        issues
    }

    fn issue_entries(record: &Value) -> Option<&Vec<Value>> {
        record.as_object()?.get("issues")?.as_array()
    }
}

impl Default for IssueAggregator {
    fn default() -> Self {
        Self::new()
    }
}
