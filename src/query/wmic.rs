use std::path::PathBuf;
use std::process::Command;

use crate::error::{CheckWmiError, Result};

use super::{QueryChannel, Row, decode_rows};

/// Account used to authenticate against the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub domain: Option<String>,
    pub user: String,
    pub password: String,
}

impl Credentials {
    /// Value of the `-U` option: `DOMAIN\user%password`.
    #[must_use]
    pub fn to_user_arg(&self) -> String {
        match &self.domain {
            Some(domain) => format!("{domain}\\{}%{}", self.user, self.password),
            None => format!("{}%{}", self.user, self.password),
        }
    }
}

/// Query channel backed by the external `wmic` client.
#[derive(Debug, Clone)]
pub struct WmicChannel {
    binary: PathBuf,
    host: String,
    credentials: Credentials,
    namespace: String,
    delimiter: String,
}

impl WmicChannel {
    #[must_use]
    pub fn new(
        binary: impl Into<PathBuf>,
        host: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            binary: binary.into(),
            host: host.into(),
            credentials,
            namespace: "root\\cimv2".to_string(),
            delimiter: "|".to_string(),
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Arguments passed to the client, credentials included.
    #[must_use]
    pub fn args(&self, wql: &str) -> Vec<String> {
        vec![
            "-U".to_string(),
            self.credentials.to_user_arg(),
            format!("//{}", self.host),
            "--namespace".to_string(),
            self.namespace.clone(),
            "--delimiter".to_string(),
            self.delimiter.clone(),
            wql.to_string(),
        ]
    }
}

impl QueryChannel for WmicChannel {
    fn query(&self, wql: &str) -> Result<Vec<Row>> {
        log::debug!(
            "wql: {wql} (host: //{}, namespace: {})",
            self.host,
            self.namespace
        );

        let output = Command::new(&self.binary)
            .args(self.args(wql))
            .output()
            .map_err(|e| {
                CheckWmiError::protocol(
                    wql,
                    format!("failed to run {}: {e}", self.binary.display()),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = single_line(&stderr);
            let message = if detail.is_empty() {
                format!("{} returned {}", self.binary.display(), output.status)
            } else {
                format!("{} returned {}: {detail}", self.binary.display(), output.status)
            };
            return Err(CheckWmiError::protocol(wql, message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        log::debug!("output: {stdout:?}");
        log::debug!("wmi connect succeed.");

        let rows = decode_rows(&stdout, &self.delimiter);
        log::debug!("rows: {rows:?}");
        Ok(rows)
    }
}

/// Non-blank lines of `text`, trimmed and joined with `; `.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "wmic_tests.rs"]
mod tests;
