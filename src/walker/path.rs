use crate::error::{CheckWmiError, Result};

/// Double every backslash so the path can sit inside a WQL string literal.
#[must_use]
pub fn escape_wql_path(raw: &str) -> String {
    raw.replace('\\', "\\\\")
}

/// Derive the WQL `Path` of a sub-directory from its `Name` column.
///
/// `d:\test\test1` becomes `\\test\\test1\\`: the drive letter is dropped, a
/// trailing separator is added and every backslash is doubled.
///
/// # Errors
/// Returns a decode error if the name has no drive-letter colon.
pub fn child_path(directory_name: &str) -> Result<String> {
    let (_, rest) = directory_name.split_once(':').ok_or_else(|| {
        CheckWmiError::Decode(format!(
            "directory name '{directory_name}' has no drive letter"
        ))
    })?;
    let relative = rest.split(':').next().unwrap_or_default();
    Ok(escape_wql_path(&format!("{relative}\\")))
}

/// Key used to detect a directory reached twice. Windows paths compare
/// case-insensitively.
pub(super) fn visit_key(path: &str) -> String {
    path.to_lowercase()
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
