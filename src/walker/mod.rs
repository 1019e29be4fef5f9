mod path;

pub use path::{child_path, escape_wql_path};

use path::visit_key;

use std::collections::HashSet;

use crate::error::{CheckWmiError, Result};
use crate::query::{QueryChannel, Row, wql};

/// Default bound on how many directory levels a recursive walk descends.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Literal left behind when a header line is parsed as data.
pub const HEADER_TOKEN: &str = "Name";

/// Column requested from `CIM_DataFile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    /// Only the key column; used for counting.
    Name,
    /// Last write time; used for ageing.
    LastModified,
}

impl FileField {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::LastModified => "LastModified",
        }
    }
}

/// Server-side filters applied to every file query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelector {
    /// Drive letter with colon, e.g. `C:`.
    pub drive: String,
    /// `LIKE` pattern on the file name without extension.
    pub filename: String,
    /// `LIKE` pattern on the extension without the dot.
    pub extension: String,
}

/// A file reported by the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub last_modified: Option<String>,
}

impl FileRecord {
    /// Build a record from a `CIM_DataFile` row. Rows without a usable name and
    /// stray header rows yield `None`.
    #[must_use]
    pub fn from_row(row: &Row) -> Option<Self> {
        let name = row.get("Name")?;
        if is_header_or_blank(name) {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            last_modified: row.get("LastModified").map(String::from),
        })
    }
}

/// True for names that must never reach classification.
#[must_use]
pub fn is_header_or_blank(name: &str) -> bool {
    name.is_empty() || name == HEADER_TOKEN
}

/// Files collected by a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkResult {
    pub files: Vec<FileRecord>,
    /// Number of directories whose files were listed, root included.
    pub directories: usize,
}

impl WalkResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Enumerates a remote directory tree using only WQL metadata queries.
pub struct TreeWalker<C: QueryChannel> {
    channel: C,
    selector: FileSelector,
    field: FileField,
    max_depth: usize,
}

impl<C: QueryChannel> TreeWalker<C> {
    #[must_use]
    pub const fn new(channel: C, selector: FileSelector, field: FileField) -> Self {
        Self {
            channel,
            selector,
            field,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Files directly inside `path`, filtered server-side by the selector.
    ///
    /// # Errors
    /// Returns the channel error unchanged.
    pub fn list_files(&self, path: &str) -> Result<Vec<FileRecord>> {
        let query = wql::data_files(
            self.field.column(),
            &self.selector.drive,
            path,
            &self.selector.filename,
            &self.selector.extension,
        );
        let rows = self.channel.query(&query)?;
        let files: Vec<FileRecord> = rows.iter().filter_map(FileRecord::from_row).collect();
        log::debug!("file_data ({path}): {} of {} rows", files.len(), rows.len());
        Ok(files)
    }

    /// Child directory paths of `path`, in the order the host returned them.
    ///
    /// # Errors
    /// Returns the channel error, or a decode error for a malformed `Name`.
    pub fn list_directories(&self, path: &str) -> Result<Vec<String>> {
        let rows = self
            .channel
            .query(&wql::directories(&self.selector.drive, path))?;
        log::debug!("folder_data ({path}): {} rows", rows.len());
        rows.iter()
            .filter_map(|row| row.get("Name"))
            .filter(|name| !is_header_or_blank(name))
            .map(child_path)
            .collect()
    }

    /// Collect files under `root`; with `recursive`, descend depth-first into
    /// every sub-directory. Any query failure aborts the whole walk.
    ///
    /// # Errors
    /// Returns the first channel or decode error, or a traversal error when
    /// the tree is deeper than the configured maximum.
    pub fn walk(&self, root: &str, recursive: bool) -> Result<WalkResult> {
        if !recursive {
            return Ok(WalkResult {
                files: self.list_files(root)?,
                directories: 1,
            });
        }

        let mut result = WalkResult::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut pending: Vec<(String, usize)> = vec![(root.to_string(), 0)];

        while let Some((path, depth)) = pending.pop() {
            if !visited.insert(visit_key(&path)) {
                log::debug!("skipping already visited path {path}");
                continue;
            }
            if depth > self.max_depth {
                return Err(CheckWmiError::Traversal {
                    root: root.to_string(),
                    path,
                    max_depth: self.max_depth,
                });
            }

            result.files.extend(self.list_files(&path)?);
            result.directories += 1;

            let children = self.list_directories(&path)?;
            pending.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }

        log::debug!(
            "walked {} directories under {root}, {} files",
            result.directories,
            result.files.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
