use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{Config, DEFAULT_DELIMITER, DEFAULT_NAMESPACE, DEFAULT_WMIC};
use crate::error::{CheckWmiError, Result};
use crate::query::{Credentials, WmicChannel};

/// Connection and output settings after merging the command line over the
/// config file over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub credentials: Credentials,
    pub namespace: String,
    pub delimiter: String,
    pub wmic: PathBuf,
    pub long_output_limit: Option<usize>,
}

impl Settings {
    /// Merge `cli` over `config`.
    ///
    /// # Errors
    /// Returns a configuration error when the host, user or password is
    /// missing, or when the long output limit is zero.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let connection = &config.connection;

        let host = required(cli.host.as_ref(), connection.host.as_ref(), "host", "-H/--host")?;
        let user = required(cli.user.as_ref(), connection.user.as_ref(), "user", "-u/--user")?;
        let password = required(
            cli.password.as_ref(),
            connection.password.as_ref(),
            "password",
            "--password",
        )?;

        let long_output_limit = cli.long_output_limit.or(config.output.long_output_limit);
        if long_output_limit == Some(0) {
            return Err(CheckWmiError::Config(
                "long output limit must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host,
            credentials: Credentials {
                domain: cli.domain.clone().or_else(|| connection.domain.clone()),
                user,
                password,
            },
            namespace: cli
                .namespace
                .clone()
                .or_else(|| connection.namespace.clone())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            delimiter: cli
                .delimiter
                .clone()
                .or_else(|| connection.delimiter.clone())
                .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            wmic: cli
                .wmic
                .clone()
                .or_else(|| connection.wmic.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WMIC)),
            long_output_limit,
        })
    }

    /// Channel that runs every query through the configured `wmic` client.
    #[must_use]
    pub fn channel(&self) -> WmicChannel {
        WmicChannel::new(&self.wmic, &self.host, self.credentials.clone())
            .with_namespace(&self.namespace)
            .with_delimiter(&self.delimiter)
    }
}

fn required(
    cli: Option<&String>,
    config: Option<&String>,
    name: &str,
    flag: &str,
) -> Result<String> {
    cli.or(config).cloned().ok_or_else(|| {
        CheckWmiError::Config(format!(
            "missing {name}, pass {flag} or set it under [connection]"
        ))
    })
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
