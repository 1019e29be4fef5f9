use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default WMI namespace.
pub const DEFAULT_NAMESPACE: &str = "root\\cimv2";

/// Default column delimiter requested from `wmic`.
pub const DEFAULT_DELIMITER: &str = "|";

/// Default client binary, looked up on `PATH`.
pub const DEFAULT_WMIC: &str = "wmic";

/// Contents of `check-wmi.toml`. Every field is optional; command-line
/// options take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[connection]`: how to reach the remote host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub domain: Option<String>,
    pub namespace: Option<String>,
    pub delimiter: Option<String>,
    /// Path of the `wmic` client.
    pub wmic: Option<PathBuf>,
}

/// `[output]`: rendering options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Maximum number of long output lines before the "showing only" footer.
    pub long_output_limit: Option<usize>,
}
