use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub title: String,
    pub category: String,
    pub description: String,
    pub estimated_time_minutes: u32,
}
