use crate::checker::{Thresholds, classify_file_ages};
use crate::clock::{ClockPolicy, RemoteClock};
use crate::error::Result;
use crate::output::{FILE_AGE_HEADERS, Report, perf_metric};
use crate::query::QueryChannel;
use crate::walker::{FileField, TreeWalker};

use super::{FileTarget, Outcome};

/// Ages every matching file against the remote clock. Thresholds are minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAgeCheck {
    pub target: FileTarget,
    pub thresholds: Thresholds,
    pub clock_policy: ClockPolicy,
}

impl FileAgeCheck {
    /// # Errors
    /// Returns the walker's error, a decode error for an unreadable
    /// timestamp, or the clock query's error.
    pub fn evaluate<C: QueryChannel>(&self, channel: &C) -> Result<Outcome> {
        let walk = TreeWalker::new(channel, self.target.selector.clone(), FileField::LastModified)
            .with_max_depth(self.target.max_depth)
            .walk(&self.target.path, self.target.recursive)?;

        let mut clock = RemoteClock::new(channel, self.clock_policy);
        let buckets = classify_file_ages(&walk.files, &mut clock, self.thresholds)?;
        let severity = buckets.severity();
        let critical = buckets.critical.len();
        log::debug!(
            "file age: {critical} critical, {} warning, {} ok",
            buckets.warning.len(),
            buckets.ok.len()
        );

        let mut report = Report::new(format!("Found {critical} files out of date."));
        report.push_sections(&buckets, &FILE_AGE_HEADERS);
        let label = format!("{}{}", self.target.selector.drive, self.target.path);
        report.push_perf(perf_metric(&label, critical, self.thresholds));

        Ok(Outcome { severity, report })
    }
}
