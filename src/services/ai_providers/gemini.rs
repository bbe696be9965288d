use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    generation_config: GeminiGenerationConfig,
    timeout_secs: u64,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            generation_config: GeminiGenerationConfig {
                temperature: Some(config.temperature),
                top_p: Some(config.top_p),
                top_k: Some(config.top_k),
                max_output_tokens: Some(config.max_output_tokens),
            },
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: Some(self.generation_config.clone()),
        }
    }

    fn map_transport_error(&self, error: reqwest::Error) -> AiProviderError {
        if error.is_timeout() {
            AiProviderError::Timeout(self.timeout_secs)
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }

    pub async fn get_non_streaming_response(&self, prompt: String) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = self.get_request(prompt);

        log::debug!("📦 Request model: {}", self.model);

        let response = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                401 | 403 => AiProviderError::AuthenticationError(error_text),
                code => AiProviderError::ApiError { status: code, message: error_text },
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiProviderError::Timeout(self.timeout_secs)
                } else {
                    AiProviderError::SerializationError(e.to_string())
                }
            })?;

        Ok(body.first_text())
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn chat(&self, prompt: String) -> Result<String, AiProviderError> {
        self.get_non_streaming_response(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_generation_config() {
        let provider = GeminiProvider::new("key".to_string(), &AiConfig::default()).unwrap();
        let encoded = serde_json::to_value(provider.get_request("hello".to_string())).unwrap();

        assert_eq!(encoded["contents"][0]["parts"][0]["text"], "hello");
        assert!(encoded["contents"][0].get("role").is_none());
        assert_eq!(encoded["generationConfig"]["temperature"], 0.7);
        assert_eq!(encoded["generationConfig"]["topK"], 40);
        assert_eq!(encoded["generationConfig"]["topP"], 0.95);
        assert_eq!(encoded["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn base_url_is_normalized() {
        let provider = GeminiProvider::new("key".to_string(), &AiConfig::default())
            .unwrap()
            .with_base_url("http://127.0.0.1:9999/v1beta/");
        assert_eq!(provider.base_url, "http://127.0.0.1:9999/v1beta");
    }
}
