use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub form_factor: Option<String>,
}
