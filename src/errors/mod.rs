use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SitelyzerError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Analysis errors
    AnalysisError {
        target: String,
        stage: String,
        reason: String,
        recoverable: bool,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SitelyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn analysis_error(target: &str, stage: &str, reason: &str, recoverable: bool) -> Self {
        Self::AnalysisError {
            target: target.to_string(),
            stage: stage.to_string(),
            reason: reason.to_string(),
            recoverable,
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AnalysisError { recoverable, .. } => *recoverable,
            Self::NetworkError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => false,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::AnalysisError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::AnalysisError { target, stage, reason, recoverable } => {
                let mut msg = format!("Analysis error for '{}' during {}: {}", target, stage, reason);
                if *recoverable {
                    msg.push_str("\n💡 This error is recoverable - you can retry the operation");
                } else {
                    msg.push_str("\n⚠️ This error requires manual intervention");
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for SitelyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SitelyzerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for sitelyzer operations
pub type SitelyzerResult<T> = Result<T, SitelyzerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &SitelyzerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("❌ {}", error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for SitelyzerError {
    fn from(error: std::io::Error) -> Self {
        SitelyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SitelyzerError {
    fn from(error: serde_json::Error) -> Self {
        SitelyzerError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SitelyzerError {
    fn from(error: toml::de::Error) -> Self {
        SitelyzerError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for SitelyzerError {
    fn from(error: reqwest::Error) -> Self {
        SitelyzerError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_recoverable_and_medium() {
        let error = SitelyzerError::NetworkError {
            operation: "fetch".to_string(),
            url: Some("https://example.com".to_string()),
            status_code: Some(503),
            reason: "unavailable".to_string(),
        };

        assert!(error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Medium);
        let message = error.user_message();
        assert!(message.contains("https://example.com"));
        assert!(message.contains("503"));
    }

    #[test]
    fn toml_errors_become_parse_errors() {
        let parsed: Result<toml::Value, toml::de::Error> = toml::from_str("[ai\nmodel = ");
        let error: SitelyzerError = parsed.unwrap_err().into();
        assert!(matches!(error, SitelyzerError::ParseError { ref content_type, .. } if content_type == "TOML"));
        assert!(!error.is_recoverable());
    }
}
