use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSolution {
    pub issue_title: String,
    pub category: String,
    pub solution: String,
}
