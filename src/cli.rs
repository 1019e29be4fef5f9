use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::walker::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "check_wmi")]
#[command(author, version, about = "Check Windows hosts over WMI - file counts, file ages and SQL Server locks")]
#[command(long_about = "Monitoring plugin that queries a remote Windows host over WMI.\n\n\
    Exit codes:\n  \
    0 - OK\n  \
    1 - WARNING\n  \
    2 - CRITICAL\n  \
    3 - UNKNOWN (connection, query or argument error)")]
pub struct Cli {
    /// Show debug information on stderr
    #[arg(short = 'D', long, global = true)]
    pub debug: bool,

    /// Remote host, use the IP address rather than a DNS name
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// User name
    #[arg(short = 'u', long, global = true)]
    pub user: Option<String>,

    /// User password
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// WMI server domain
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// WMI namespace [default: root\cimv2]
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Column delimiter requested from wmic [default: |]
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// wmic client binary [default: wmic]
    #[arg(long, global = true)]
    pub wmic: Option<PathBuf>,

    /// Show at most this many long output lines
    #[arg(long, global = true)]
    pub long_output_limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count file number
    Filenumber(FileNumberArgs),

    /// Get file age
    Fileage(FileAgeArgs),

    /// Check SQL Server lock counters
    Sqlserverlocks(SqlserverLocksArgs),
}

/// Which remote files to look at.
#[derive(Args, Debug, Clone)]
pub struct FileTargetArgs {
    /// The windows drive, like C:
    #[arg(short = 'd', long)]
    pub drive: String,

    /// The folder, with doubled backslashes
    #[arg(short = 'p', long, default_value = "\\\\")]
    pub path: String,

    /// The file name, a WQL LIKE pattern
    #[arg(short = 'f', long, default_value = "%")]
    pub filename: String,

    /// The file extension, a WQL LIKE pattern
    #[arg(short = 'e', long, default_value = "%")]
    pub extension: String,

    /// Recurse into sub-directories
    #[arg(short = 'R', long)]
    pub recursion: bool,

    /// Maximum directory depth when recursing
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

#[derive(Args, Debug)]
pub struct FileNumberArgs {
    #[command(flatten)]
    pub target: FileTargetArgs,

    /// Warning number of files
    #[arg(short = 'w', long, default_value_t = 0)]
    pub warning: u64,

    /// Critical number of files
    #[arg(short = 'c', long, default_value_t = 0)]
    pub critical: u64,
}

#[derive(Args, Debug)]
pub struct FileAgeArgs {
    #[command(flatten)]
    pub target: FileTargetArgs,

    /// Warning age of a file, in minutes
    #[arg(short = 'w', long, default_value_t = 30)]
    pub warning: u64,

    /// Critical age of a file, in minutes
    #[arg(short = 'c', long, default_value_t = 60)]
    pub critical: u64,

    /// Read the remote clock again for every file
    #[arg(long)]
    pub clock_per_file: bool,
}

#[derive(Args, Debug)]
pub struct SqlserverLocksArgs {
    /// One of LockTimeoutsPersec, LockWaitsPersec, NumberofDeadlocksPersec
    #[arg(short = 'm', long)]
    pub mode: String,

    /// Warning value
    #[arg(short = 'w', long, default_value_t = 0)]
    pub warning: u64,

    /// Critical value
    #[arg(short = 'c', long, default_value_t = 0)]
    pub critical: u64,
}

/// One-line description of a parse error: clap's first paragraph without its
/// `error: ` prefix, with usage and hints dropped.
#[must_use]
pub fn parse_error_summary(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let summary = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    summary
        .strip_prefix("error: ")
        .unwrap_or(&summary)
        .to_string()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
