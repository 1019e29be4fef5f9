use chrono::TimeDelta;

use super::Severity;

/// Warning and critical limits. A measurement must be strictly greater than a
/// limit to reach it; the critical limit is tested first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thresholds {
    pub warning: u64,
    pub critical: u64,
}

impl Thresholds {
    #[must_use]
    pub const fn new(warning: u64, critical: u64) -> Self {
        Self { warning, critical }
    }
}

/// Classify a signed measurement.
#[must_use]
pub fn classify(value: i128, thresholds: Thresholds) -> Severity {
    if value > i128::from(thresholds.critical) {
        Severity::Critical
    } else if value > i128::from(thresholds.warning) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

#[must_use]
pub fn classify_count(count: usize, thresholds: Thresholds) -> Severity {
    classify(i128::try_from(count).unwrap_or(i128::MAX), thresholds)
}

/// Classify an age against thresholds expressed in minutes.
///
/// Compared at second precision, so an age of 30 minutes and 1 second exceeds
/// a 30 minute limit.
#[must_use]
pub fn classify_age(age: TimeDelta, thresholds_minutes: Thresholds) -> Severity {
    let seconds = i128::from(age.num_seconds());
    let in_seconds = |minutes: u64| i128::from(minutes) * 60;

    if seconds > in_seconds(thresholds_minutes.critical) {
        Severity::Critical
    } else if seconds > in_seconds(thresholds_minutes.warning) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
