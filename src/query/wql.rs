//! WQL statements issued by the checks.

/// Current local date-time of the remote operating system.
pub const LOCAL_DATETIME: &str = "SELECT LocalDateTime FROM Win32_OperatingSystem";

/// Class holding the SQL Server lock performance counters.
pub const SQLSERVER_LOCKS_CLASS: &str = "Win32_PerfFormattedData_MSSQLSERVER_SQLServerLocks";

/// Files directly inside `path` whose name and extension match the LIKE patterns.
#[must_use]
pub fn data_files(column: &str, drive: &str, path: &str, filename: &str, extension: &str) -> String {
    format!(
        "SELECT {column} FROM CIM_DataFile WHERE Drive='{drive}' AND Path='{path}' \
         AND FileName LIKE '{filename}' AND Extension LIKE '{extension}'"
    )
}

/// Directories directly inside `path`.
#[must_use]
pub fn directories(drive: &str, path: &str) -> String {
    format!("SELECT FileName FROM CIM_Directory WHERE Drive='{drive}' AND Path='{path}'")
}

#[must_use]
pub fn sqlserver_locks(counter: &str) -> String {
    format!("select {counter} from {SQLSERVER_LOCKS_CLASS}")
}

#[cfg(test)]
#[path = "wql_tests.rs"]
mod tests;
