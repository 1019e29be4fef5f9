use crate::checker::{Thresholds, classify_count};
use crate::error::Result;
use crate::output::{Report, perf_metric};
use crate::query::QueryChannel;
use crate::walker::{FileField, TreeWalker, is_header_or_blank};

use super::{FileTarget, Outcome};

/// Counts the files matching the target and compares the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCountCheck {
    pub target: FileTarget,
    pub thresholds: Thresholds,
}

impl FileCountCheck {
    /// # Errors
    /// Returns the walker's error.
    pub fn evaluate<C: QueryChannel>(&self, channel: &C) -> Result<Outcome> {
        let walk = TreeWalker::new(channel, self.target.selector.clone(), FileField::Name)
            .with_max_depth(self.target.max_depth)
            .walk(&self.target.path, self.target.recursive)?;

        let names: Vec<&str> = walk
            .files
            .iter()
            .map(|file| file.name.as_str())
            .filter(|name| !is_header_or_blank(name))
            .collect();
        let count = names.len();
        let severity = classify_count(count, self.thresholds);
        log::debug!("file number: {count}, severity: {severity:?}");

        let mut report = Report::new(format!("Found {count} files in {}.", self.target.path));
        for name in names {
            report.push_line(name);
        }
        report.push_perf(perf_metric(&self.target.path, count, self.thresholds));

        Ok(Outcome { severity, report })
    }
}
