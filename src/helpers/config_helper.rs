pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        "gemini-1.5-flash".to_string()
    }

    pub fn default_api_key_env() -> String {
        "GOOGLE_API_KEY".to_string()
    }

    pub fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }

    pub fn default_temperature() -> f64 {
        0.7
    }

    pub fn default_top_k() -> u32 {
        40
    }

    pub fn default_top_p() -> f64 {
        0.95
    }

    pub fn default_max_output_tokens() -> u32 {
        1024
    }

    pub fn default_ai_timeout_secs() -> u64 {
        30
    }

    pub fn default_max_tutorials() -> usize {
        10
    }

    pub fn default_concurrency() -> usize {
        3
    }

    pub fn default_fetch_timeout_secs() -> u64 {
        10
    }

    pub fn default_analyzer_timeout_secs() -> u64 {
        20
    }

    pub fn default_user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
    }

    pub fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    pub fn default_port() -> u16 {
        5000
    }

    pub fn default_cors_origins() -> Vec<String> {
        vec!["http://localhost:3000".to_string()]
    }
}
