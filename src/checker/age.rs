use crate::clock::{RemoteClock, parse_cim_datetime};
use crate::error::{CheckWmiError, Result};
use crate::query::QueryChannel;
use crate::walker::{FileRecord, is_header_or_blank};

use super::{Buckets, Thresholds, classify_age};

/// Bucket files by how long ago they were last modified, measured against the
/// remote host's clock. Thresholds are in minutes.
///
/// The clock is only consulted when there is at least one file to age.
///
/// # Errors
/// Returns a decode error for a file without a readable `LastModified`, or
/// the clock's error.
pub fn classify_file_ages<C: QueryChannel>(
    files: &[FileRecord],
    clock: &mut RemoteClock<C>,
    thresholds: Thresholds,
) -> Result<Buckets> {
    let mut buckets = Buckets::new();

    for file in files.iter().filter(|f| !is_header_or_blank(&f.name)) {
        log::debug!("===== start to compare {} =====", file.name);

        let modified = file.last_modified.as_deref().ok_or_else(|| {
            CheckWmiError::Decode(format!("{} has no LastModified", file.name))
        })?;
        let file_time = parse_cim_datetime(modified)?;
        let now = clock.now()?;
        let age = now - file_time;
        log::debug!("file_datetime: {file_time}, delta: {age}");

        buckets.push(classify_age(age, thresholds), file.name.clone());
    }

    Ok(buckets)
}
