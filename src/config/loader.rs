use std::path::{Path, PathBuf};

use crate::error::{CheckWmiError, Result};

use super::Config;

const CONFIG_FILE_NAME: &str = "check-wmi.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Platform configuration directory for check-wmi:
    /// - Windows: `%APPDATA%\check-wmi`
    /// - macOS: `~/Library/Application Support/check-wmi`
    /// - Linux: `~/.config/check-wmi` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "check-wmi")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads `check-wmi.toml`.
///
/// Search order:
/// 1. The path given with `--config` (must exist)
/// 2. `check-wmi.toml` in the platform config directory
/// 3. `Config::default()` if neither is found
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load the explicit file, or the user file, or the defaults.
    ///
    /// # Errors
    /// Returns an error if a file that should be read cannot be read or
    /// parsed.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return self.load_from_path(path);
        }

        match self.user_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(&self, path: &Path) -> Result<Config> {
        log::debug!("loading config from {}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CheckWmiError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&content)?)
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs
            .config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
