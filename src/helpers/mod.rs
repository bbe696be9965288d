pub mod config_helper;
pub mod url_validator;
pub mod scoring;
