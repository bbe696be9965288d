use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("API Error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}
