pub mod ai_provider;
pub mod analyzer;
