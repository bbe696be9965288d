use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A text-generation backend. One prompt in, generated text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn chat(&self, prompt: String) -> Result<String, AiProviderError>;
}
