use std::sync::Arc;
use futures::stream::{self, StreamExt};
use crate::enums::report_status::ReportStatus;
use crate::prompts::tutorial_prompt::build_tutorial_prompt;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::tutorials::knowledge_base;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::issue::Issue;
use crate::structs::tutorials::local_solution::LocalSolution;
use crate::structs::tutorials::tutorial::Tutorial;
use crate::structs::tutorials::tutorial_report::{
    client_unavailable_message, not_configured_message, GeneratedTutorials, TutorialReport, UnconfiguredTutorials,
};
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct RemoteTutorials {
    provider: Arc<dyn AiProvider>,
    max_tutorials: usize,
    concurrency: usize,
}

/// Remediation tutorials, from a text-generation service when a credential
/// is configured and from the built-in knowledge base otherwise. The variant
/// is fixed at construction.
#[derive(Clone)]
pub enum TutorialGenerator {
    Remote(RemoteTutorials),
    Local { max_tutorials: usize, message: String },
}

impl TutorialGenerator {
    pub fn from_config(config: &AiConfig) -> Self {
        let Some(api_key) = config.api_key() else {
            log::warn!("⚠️ {} is not set, tutorials will use the local knowledge base", config.api_key_env);
            return Self::local(config.max_tutorials, not_configured_message(&config.api_key_env));
        };

        match GeminiProvider::new(api_key, config) {
            Ok(provider) => {
                log::info!("🤖 Tutorials via {} ({})", config.provider, config.model);
                Self::remote(Arc::new(provider), config.max_tutorials, config.concurrency)
            }
            Err(e) => {
                log::error!("❌ Failed to build AI client, falling back to local knowledge base: {}", e);
                Self::local(config.max_tutorials, client_unavailable_message(&e.to_string()))
            }
        }
    }

    pub fn remote(provider: Arc<dyn AiProvider>, max_tutorials: usize, concurrency: usize) -> Self {
        Self::Remote(RemoteTutorials {
            provider,
            max_tutorials,
            concurrency: concurrency.max(1),
        })
    }

    pub fn local(max_tutorials: usize, message: String) -> Self {
        Self::Local { max_tutorials, message }
    }

    /// Local variant with the message for an unset default credential.
    pub fn unconfigured(max_tutorials: usize) -> Self {
        Self::local(max_tutorials, not_configured_message(&ConfigHelper::default_api_key_env()))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    pub async fn get_issue_tutorials(&self, issues: &[Issue]) -> TutorialReport {
        match self {
            Self::Remote(remote) => TutorialReport::Generated(remote.generate_all(issues).await),
            Self::Local { max_tutorials, message } => TutorialReport::Unconfigured(UnconfiguredTutorials {
                status: ReportStatus::Warning,
                message: message.clone(),
                tutorials: Vec::new(),
                local_solutions: issues
                    .iter()
                    .take(*max_tutorials)
                    .map(|issue| LocalSolution {
                        issue_title: issue.title.clone(),
                        category: issue.category.clone(),
                        solution: knowledge_base::get_solution(&issue.title, &issue.category).to_string(),
                    })
                    .collect(),
            }),
        }
    }
}

impl RemoteTutorials {
    async fn generate_all(&self, issues: &[Issue]) -> GeneratedTutorials {
        let selected = issues[..issues.len().min(self.max_tutorials)].to_vec();
        let provider = Arc::clone(&self.provider);

        // buffered() keeps input order
        let tutorials: Vec<Tutorial> = stream::iter(selected)
            .map(move |issue| generate_tutorial(Arc::clone(&provider), issue))
            .buffered(self.concurrency)
            .collect()
            .await;

        let tutorials_generated = tutorials.iter().filter(|t| t.is_success()).count();

        GeneratedTutorials {
            status: ReportStatus::Success,
            total_issues: issues.len(),
            tutorials_generated,
            tutorials_failed: tutorials.len() - tutorials_generated,
            tutorials,
        }
    }
}

async fn generate_tutorial(provider: Arc<dyn AiProvider>, issue: Issue) -> Tutorial {
    let prompt = build_tutorial_prompt(&issue);

    match provider.chat(prompt).await {
        Ok(content) => Tutorial::success(&issue, content),
        Err(e) => {
            log::warn!("Error generating tutorial for '{}': {}", issue.title, e);
            Tutorial::failure(&issue, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::enums::tutorial_status::TutorialStatus;
    use crate::traits::ai_provider::MockAiProvider;

    fn issues(titles: &[&str]) -> Vec<Issue> {
        titles
            .iter()
            .map(|title| {
                Issue::from_record(json!({"title": title, "severity": "high", "description": "d"}).as_object().unwrap(), "security")
            })
            .collect()
    }

    #[tokio::test]
    async fn failures_are_reported_per_issue_without_stopping_the_batch() {
        let mut provider = MockAiProvider::new();
        provider.expect_chat().times(3).returning(|prompt| {
            if prompt.contains("Title: broken") {
                Err(AiProviderError::ApiError { status: 500, message: "boom".to_string() })
            } else {
                Ok("tutorial text".to_string())
            }
        });

        let generator = TutorialGenerator::remote(Arc::new(provider), 10, 2);
        let report = generator.get_issue_tutorials(&issues(&["first", "broken", "third"])).await;

        let TutorialReport::Generated(report) = report else {
            panic!("expected generated tutorials");
        };
        assert_eq!(report.total_issues, 3);
        assert_eq!(report.tutorials_generated, 2);
        assert_eq!(report.tutorials_failed, 1);
        let statuses: Vec<TutorialStatus> = report.tutorials.iter().map(|t| t.status).collect();
        assert_eq!(statuses, vec![TutorialStatus::Success, TutorialStatus::Error, TutorialStatus::Success]);
        assert_eq!(report.tutorials[1].issue_title, "broken");
        assert!(report.tutorials[1].error.as_deref().unwrap_or_default().contains("500"));
        assert_eq!(report.tutorials[2].content.as_deref(), Some("tutorial text"));
    }

    #[tokio::test]
    async fn caps_requests_at_max_tutorials() {
        let mut provider = MockAiProvider::new();
        provider.expect_chat().times(10).returning(|_| Ok(String::new()));

        let titles: Vec<String> = (0..14).map(|i| format!("issue {}", i)).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();

        let generator = TutorialGenerator::remote(Arc::new(provider), 10, 3);
        let TutorialReport::Generated(report) = generator.get_issue_tutorials(&issues(&title_refs)).await else {
            panic!("expected generated tutorials");
        };

        assert_eq!(report.total_issues, 14);
        assert_eq!(report.tutorials.len(), 10);
        assert_eq!(report.tutorials[9].issue_title, "issue 9");
    }

    #[tokio::test]
    async fn local_variant_returns_warning_with_knowledge_base_answers() {
        let generator = TutorialGenerator::unconfigured(10);
        assert!(!generator.is_remote());

        let report = generator.get_issue_tutorials(&issues(&["Missing HTTPS", "Odd thing"])).await;

        let encoded = serde_json::to_value(&report).unwrap();
        assert_eq!(encoded["status"], "warning");
        assert_eq!(encoded["message"], "AI support not configured. Set GOOGLE_API_KEY environment variable.");
        assert_eq!(encoded["tutorials"], json!([]));
        assert!(encoded["local_solutions"][0]["solution"].as_str().unwrap().contains("Let's Encrypt"));
        assert_eq!(encoded["local_solutions"][1]["solution"], knowledge_base::DEFAULT_SOLUTION);
    }

    #[tokio::test]
    async fn missing_credential_names_the_configured_variable() {
        let config = AiConfig {
            api_key_env: "SITELYZER_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..AiConfig::default()
        };
        let generator = TutorialGenerator::from_config(&config);
        assert!(!generator.is_remote());

        let report = generator.get_issue_tutorials(&issues(&["Missing HTTPS"])).await;
        let encoded = serde_json::to_value(&report).unwrap();
        assert_eq!(
            encoded["message"],
            "AI support not configured. Set SITELYZER_TEST_KEY_THAT_IS_NEVER_SET environment variable."
        );
    }

    #[test]
    fn client_failure_message_is_distinct() {
        let message = client_unavailable_message("bad TLS backend");
        assert!(message.contains("bad TLS backend"));
        assert!(!message.contains("not configured"));
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn tutorial_futures_can_cross_threads() {
        let generator = TutorialGenerator::remote(Arc::new(MockAiProvider::new()), 10, 3);
        let issues = issues(&["first"]);
        let future = generator.get_issue_tutorials(&issues);
        assert_send(&future);
    }
}
