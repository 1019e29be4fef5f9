use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckWmiError {
    #[error("Connect by wmi and run wql error: {message}")]
    Protocol { wql: String, message: String },

    #[error("Malformed WMI data: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory tree under {root} is deeper than {max_depth} levels (stopped at {path})")]
    Traversal {
        root: String,
        path: String,
        max_depth: usize,
    },

    #[error("Output template error: {0}")]
    Render(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl CheckWmiError {
    /// Short category name, used in debug logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Protocol { .. } => "Protocol",
            Self::Decode(_) => "Decode",
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::Traversal { .. } => "Traversal",
            Self::Render(_) => "Render",
        }
    }

    pub(crate) fn protocol(wql: &str, message: impl Into<String>) -> Self {
        Self::Protocol {
            wql: wql.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckWmiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
