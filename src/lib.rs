//! WMI monitoring plugin engine.
//!
//! Walks remote Windows directory trees through WMI metadata queries, classifies
//! file counts, file ages and SQL Server lock counters against warning/critical
//! thresholds, and renders the result in the Nagios plugin output format.

pub mod checker;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod status;
pub mod walker;

pub use error::{CheckWmiError, Result};
pub use status::Status;

pub const EXIT_OK: i32 = 0;
pub const EXIT_WARNING: i32 = 1;
pub const EXIT_CRITICAL: i32 = 2;
pub const EXIT_UNKNOWN: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
