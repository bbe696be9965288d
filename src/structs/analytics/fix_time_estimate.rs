use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixTimeEstimate {
    pub total_minutes: u32,
    pub estimated_hours: f64,
    /// Minutes needed for critical and high issues only.
    pub priority_focus_minutes: u32,
}
