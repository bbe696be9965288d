use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Desktop,
    Mobile,
}

impl FormFactor {
    /// Anything other than `mobile` analyzes as desktop.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("mobile") {
            FormFactor::Mobile
        } else {
            FormFactor::Desktop
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFactor::Desktop => write!(f, "desktop"),
            FormFactor::Mobile => write!(f, "mobile"),
        }
    }
}
