pub mod severity;
pub mod analyzer_category;
pub mod ai_provider_error;
pub mod tutorial_status;
pub mod report_status;
pub mod form_factor;
pub mod commands;
