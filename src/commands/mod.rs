mod context;
mod fileage;
mod filenumber;
mod sqlserverlocks;

pub use context::Settings;
pub use fileage::FileAgeCheck;
pub use filenumber::FileCountCheck;
pub use sqlserverlocks::CounterCheck;

use crate::checker::{Severity, Thresholds};
use crate::cli::{Cli, Commands, FileTargetArgs};
use crate::clock::ClockPolicy;
use crate::config::FileConfigLoader;
use crate::error::Result;
use crate::output::Report;
use crate::query::QueryChannel;
use crate::status::Status;
use crate::walker::FileSelector;

/// Classification result plus the report describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub severity: Severity,
    pub report: Report,
}

/// Remote directory a file check looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub selector: FileSelector,
    /// Escaped WQL path of the root directory, e.g. `\\logs\\`.
    pub path: String,
    pub recursive: bool,
    pub max_depth: usize,
}

impl From<&FileTargetArgs> for FileTarget {
    fn from(args: &FileTargetArgs) -> Self {
        Self {
            selector: FileSelector {
                drive: args.drive.clone(),
                filename: args.filename.clone(),
                extension: args.extension.clone(),
            },
            path: args.path.clone(),
            recursive: args.recursion,
            max_depth: args.max_depth,
        }
    }
}

/// The check selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    FileCount(FileCountCheck),
    FileAge(FileAgeCheck),
    Counter(CounterCheck),
}

impl Check {
    /// Build the check for a subcommand.
    ///
    /// # Errors
    /// Returns a configuration error for an unknown counter mode.
    pub fn from_command(command: &Commands) -> Result<Self> {
        Ok(match command {
            Commands::Filenumber(args) => Self::FileCount(FileCountCheck {
                target: FileTarget::from(&args.target),
                thresholds: Thresholds::new(args.warning, args.critical),
            }),
            Commands::Fileage(args) => Self::FileAge(FileAgeCheck {
                target: FileTarget::from(&args.target),
                thresholds: Thresholds::new(args.warning, args.critical),
                clock_policy: if args.clock_per_file {
                    ClockPolicy::PerFile
                } else {
                    ClockPolicy::Once
                },
            }),
            Commands::Sqlserverlocks(args) => Self::Counter(CounterCheck {
                counter: args.mode.parse()?,
                thresholds: Thresholds::new(args.warning, args.critical),
            }),
        })
    }

    /// Run the check against a channel.
    ///
    /// # Errors
    /// Returns the first channel, decode or traversal error.
    pub fn evaluate<C: QueryChannel>(&self, channel: &C) -> Result<Outcome> {
        match self {
            Self::FileCount(check) => check.evaluate(channel),
            Self::FileAge(check) => check.evaluate(channel),
            Self::Counter(check) => check.evaluate(channel),
        }
    }
}

/// Evaluate and render, turning any error into `UNKNOWN`.
#[must_use]
pub fn run_check<C: QueryChannel>(
    check: &Check,
    channel: &C,
    long_output_limit: Option<usize>,
) -> Status {
    match evaluate_and_render(check, channel, long_output_limit) {
        Ok(status) => status,
        Err(e) => unknown(&e),
    }
}

fn evaluate_and_render<C: QueryChannel>(
    check: &Check,
    channel: &C,
    long_output_limit: Option<usize>,
) -> Result<Status> {
    let outcome = check.evaluate(channel)?;
    let text = outcome.report.render(long_output_limit)?;
    log::debug!("Return status and output.");
    Ok(Status::from_severity(outcome.severity, text))
}

/// Entry point used by `main`: load the config, build the check and the
/// `wmic` channel, run, and report.
#[must_use]
pub fn run(cli: &Cli) -> Status {
    log::debug!("===== BEGIN DEBUG =====");
    let status = match prepare(cli) {
        Ok((check, settings)) => {
            run_check(&check, &settings.channel(), settings.long_output_limit)
        }
        Err(e) => unknown(&e),
    };
    log::debug!("status: {}", status.keyword());
    log::debug!("===== END DEBUG =====");
    status
}

fn prepare(cli: &Cli) -> Result<(Check, Settings)> {
    let config = FileConfigLoader::new().load(cli.config.as_deref())?;
    let check = Check::from_command(&cli.command)?;
    let settings = Settings::resolve(cli, &config)?;
    Ok((check, settings))
}

fn unknown(error: &crate::CheckWmiError) -> Status {
    log::debug!("{} error: {error:?}", error.error_type());
    Status::Unknown(error.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
