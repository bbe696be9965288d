use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_part::GeminiPart;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}
