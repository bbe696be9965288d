use serde_json::{Map, Value};

/// Analyzer outputs keyed by category name, plus whatever request metadata the
/// producer chose to include (`url`, `form_factor`). Kept as loose JSON since
/// analyzers are free to evolve their records.
pub type AnalysisResultSet = Map<String, Value>;
