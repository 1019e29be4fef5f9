use std::fmt;

use crate::checker::Severity;
use crate::{EXIT_CRITICAL, EXIT_OK, EXIT_UNKNOWN, EXIT_WARNING};

/// Final verdict of a plugin run, as understood by the monitoring server.
///
/// The keyword printed before the message and the process exit code are the
/// wire contract: `OK` 0, `WARNING` 1, `CRITICAL` 2, `UNKNOWN` 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok(String),
    Warning(String),
    Critical(String),
    Unknown(String),
}

impl Status {
    /// Build the status matching a classification result.
    #[must_use]
    pub fn from_severity(severity: Severity, message: String) -> Self {
        match severity {
            Severity::Ok => Self::Ok(message),
            Severity::Warning => Self::Warning(message),
            Severity::Critical => Self::Critical(message),
        }
    }

    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Ok(_) => "OK",
            Self::Warning(_) => "WARNING",
            Self::Critical(_) => "CRITICAL",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ok(_) => EXIT_OK,
            Self::Warning(_) => EXIT_WARNING,
            Self::Critical(_) => EXIT_CRITICAL,
            Self::Unknown(_) => EXIT_UNKNOWN,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Ok(msg) | Self::Warning(msg) | Self::Critical(msg) | Self::Unknown(msg) => msg,
        }
    }

    /// The text printed on stdout, e.g. `OK - Found 3 files in \\.`.
    #[must_use]
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.keyword(), self.message())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
