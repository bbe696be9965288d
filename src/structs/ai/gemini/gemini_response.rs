use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_content::GeminiContent;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate, empty when absent.
    pub fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_text() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Step 1"},{"text":"ignored"}]},"finishReason":"STOP"}]}"#,
        ).unwrap();
        assert_eq!(response.first_text(), "Step 1");
    }

    #[test]
    fn missing_path_yields_empty_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[{}]}"#).unwrap();
        assert_eq!(response.first_text(), "");
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), "");
    }
}
