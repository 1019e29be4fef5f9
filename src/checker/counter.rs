use std::fmt;
use std::str::FromStr;

use crate::error::{CheckWmiError, Result};
use crate::query::Row;
use crate::walker::HEADER_TOKEN;

use super::{Buckets, Thresholds, classify};

/// SQL Server lock counters exposed by
/// `Win32_PerfFormattedData_MSSQLSERVER_SQLServerLocks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCounter {
    LockTimeoutsPersec,
    LockWaitsPersec,
    NumberofDeadlocksPersec,
}

impl LockCounter {
    pub const ALL: [Self; 3] = [
        Self::LockTimeoutsPersec,
        Self::LockWaitsPersec,
        Self::NumberofDeadlocksPersec,
    ];

    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::LockTimeoutsPersec => "LockTimeoutsPersec",
            Self::LockWaitsPersec => "LockWaitsPersec",
            Self::NumberofDeadlocksPersec => "NumberofDeadlocksPersec",
        }
    }
}

impl fmt::Display for LockCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for LockCounter {
    type Err = CheckWmiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|counter| counter.column() == s)
            .ok_or_else(|| {
                CheckWmiError::Config(format!(
                    "Unknown SqlServerLocks options '{s}', expected one of {}",
                    Self::ALL.map(Self::column).join(", ")
                ))
            })
    }
}

/// Bucket every row by the integer in `column`. Entries read `<Name> : <value>`.
///
/// # Errors
/// Returns a decode error when a row lacks the column or it is not an integer.
pub fn classify_counters(rows: &[Row], column: &str, thresholds: Thresholds) -> Result<Buckets> {
    let mut buckets = Buckets::new();

    for row in rows {
        let name = row.get("Name").unwrap_or_default();
        if name == HEADER_TOKEN {
            continue;
        }
        let raw = row
            .get(column)
            .ok_or_else(|| CheckWmiError::Decode(format!("row '{name}' has no {column} value")))?;
        let value: i64 = raw.trim().parse().map_err(|e| {
            CheckWmiError::Decode(format!("{column} of '{name}' is not an integer ({raw}): {e}"))
        })?;

        buckets.push(
            classify(i128::from(value), thresholds),
            format!("{name} : {value}"),
        );
    }

    Ok(buckets)
}
