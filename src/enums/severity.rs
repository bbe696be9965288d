use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Issue severity as reported by an analyzer.
///
/// Values outside the four known levels are kept verbatim in `Other` so they
/// still serialize back to what the analyzer sent; they rank after `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Severity {
    pub const UNKNOWN_RANK: u8 = 99;

    /// Reads a severity out of a loosely shaped issue field. Missing and
    /// falsy values become `Medium`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Severity::Medium,
            Some(Value::String(s)) if s.is_empty() => Severity::Medium,
            Some(Value::String(s)) => Severity::from(s.clone()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Severity::Medium,
            Some(Value::Array(items)) if items.is_empty() => Severity::Medium,
            Some(Value::Object(map)) if map.is_empty() => Severity::Medium,
            Some(other) => Severity::Other(other.to_string()),
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Other(_) => Self::UNKNOWN_RANK,
        }
    }

    /// Fixed remediation cost in minutes.
    pub fn fix_minutes(&self) -> u32 {
        match self {
            Severity::Critical => 60,
            Severity::High => 30,
            Severity::Medium => 15,
            Severity::Low => 5,
            Severity::Other(_) => 15,
        }
    }

    pub fn is_priority(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "" => Severity::Medium,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
