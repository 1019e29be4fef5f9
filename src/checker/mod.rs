mod age;
mod counter;
mod threshold;

pub use age::classify_file_ages;
pub use counter::{LockCounter, classify_counters};
pub use threshold::{Thresholds, classify, classify_age, classify_count};

/// Outcome of comparing measurements against thresholds.
///
/// Ordered from best to worst so `max` picks the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

/// Names classified into the three severities, each list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub critical: Vec<String>,
    pub warning: Vec<String>,
    pub ok: Vec<String>,
}

impl Buckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, name: impl Into<String>) {
        let name = name.into();
        log::debug!("{name} -> {severity:?}");
        match severity {
            Severity::Critical => self.critical.push(name),
            Severity::Warning => self.warning.push(name),
            Severity::Ok => self.ok.push(name),
        }
    }

    /// Worst severity with at least one entry; `Ok` when everything is empty.
    #[must_use]
    pub fn severity(&self) -> Severity {
        if !self.critical.is_empty() {
            Severity::Critical
        } else if !self.warning.is_empty() {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }

    /// Buckets in report order: critical, warning, ok.
    #[must_use]
    pub fn sections(&self) -> [(Severity, &[String]); 3] {
        [
            (Severity::Critical, self.critical.as_slice()),
            (Severity::Warning, self.warning.as_slice()),
            (Severity::Ok, self.ok.as_slice()),
        ]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.ok.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
