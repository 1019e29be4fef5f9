use std::collections::HashMap;
use std::fmt::Write;

use crate::checker::{Buckets, Severity, Thresholds};
use crate::error::Result;

use super::template::substitute;

/// Separator between the summary, the long output and the perf data.
const BLOCK_SEPARATOR: &str = " | \n";

/// Titles printed above each non-empty bucket in the long output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeaders {
    pub critical: &'static str,
    pub warning: &'static str,
    pub ok: &'static str,
}

impl SectionHeaders {
    #[must_use]
    pub const fn for_severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Ok => self.ok,
        }
    }
}

pub const FILE_AGE_HEADERS: SectionHeaders = SectionHeaders {
    critical: "===== Critical File out of date ====",
    warning: "===== Warning File out of date ====",
    ok: "===== OK File out of date ====",
};

pub const COUNTER_HEADERS: SectionHeaders = SectionHeaders {
    critical: "===== Critical ====",
    warning: "===== Warning ====",
    ok: "===== OK ====",
};

/// One perf data metric: `label=value;warn;crit;0;`.
#[must_use]
pub fn perf_metric(label: &str, value: usize, thresholds: Thresholds) -> String {
    format!(
        "{label}={value};{};{};0;",
        thresholds.warning, thresholds.critical
    )
}

/// Plugin output before it is rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub short_output: String,
    pub long_output: Vec<String>,
    pub perf_data: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new(short_output: impl Into<String>) -> Self {
        Self {
            short_output: short_output.into(),
            ..Self::default()
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.long_output.push(line.into());
    }

    pub fn push_perf(&mut self, metric: impl Into<String>) {
        self.perf_data.push(metric.into());
    }

    /// Append every non-empty bucket, critical first, each under its header.
    pub fn push_sections(&mut self, buckets: &Buckets, headers: &SectionHeaders) {
        for (severity, names) in buckets.sections() {
            if names.is_empty() {
                continue;
            }
            self.push_line(headers.for_severity(severity));
            self.long_output.extend(names.iter().cloned());
        }
    }

    /// Render without substitutions.
    ///
    /// # Errors
    /// See [`Report::render_with`].
    pub fn render(&self, long_output_limit: Option<usize>) -> Result<String> {
        self.render_with(long_output_limit, &HashMap::new())
    }

    /// Render the Nagios text: summary, then the long output (at most
    /// `long_output_limit` lines plus a footer), then the perf data, the blocks
    /// joined by `" | \n"`. The result is finally run through the template
    /// substitution.
    ///
    /// # Errors
    /// Returns a render error if the text holds a `{token}` missing from
    /// `substitutions`.
    pub fn render_with(
        &self,
        long_output_limit: Option<usize>,
        substitutions: &HashMap<String, String>,
    ) -> Result<String> {
        let mut text = self.short_output.clone();

        if !self.long_output.is_empty() {
            let total = self.long_output.len();
            let shown = long_output_limit.map_or(total, |limit| limit.min(total));

            strip_trailing_newlines(&mut text);
            text.push_str(BLOCK_SEPARATOR);
            text.push_str(&self.long_output[..shown].join("\n"));

            if let Some(limit) = long_output_limit
                && shown < total
            {
                write!(
                    text,
                    "\n(...showing only first {limit} lines, {} elements remaining...)",
                    total - shown
                )
                .ok();
            }
        }

        if !self.perf_data.is_empty() {
            strip_trailing_newlines(&mut text);
            text.push_str(BLOCK_SEPARATOR);
            text.push_str(&self.perf_data.join(" "));
        }

        substitute(&text, substitutions)
    }
}

fn strip_trailing_newlines(text: &mut String) {
    let kept = text.trim_end_matches('\n').len();
    text.truncate(kept);
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
