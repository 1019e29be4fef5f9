use crate::checker::{LockCounter, Thresholds, classify_counters};
use crate::error::Result;
use crate::output::{COUNTER_HEADERS, Report, perf_metric};
use crate::query::{QueryChannel, wql};

use super::Outcome;

/// Compares one SQL Server lock counter per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterCheck {
    pub counter: LockCounter,
    pub thresholds: Thresholds,
}

impl CounterCheck {
    /// # Errors
    /// Returns the channel error, or a decode error for a non-integer value.
    pub fn evaluate<C: QueryChannel>(&self, channel: &C) -> Result<Outcome> {
        let column = self.counter.column();
        let rows = channel.query(&wql::sqlserver_locks(column))?;
        let buckets = classify_counters(&rows, column, self.thresholds)?;
        let severity = buckets.severity();
        let critical = buckets.critical.len();
        log::debug!("{column}: {critical} critical of {}", buckets.len());

        let mut report = Report::new(format!("Found {critical} {column} critical."));
        report.push_sections(&buckets, &COUNTER_HEADERS);
        report.push_perf(perf_metric(column, critical, self.thresholds));

        Ok(Outcome { severity, report })
    }
}
