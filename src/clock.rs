use chrono::NaiveDateTime;

use crate::error::{CheckWmiError, Result};
use crate::query::{QueryChannel, wql};

/// Layout of a CIM datetime once the fraction and UTC offset are cut off.
const CIM_DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// How often the remote time is fetched while ageing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockPolicy {
    /// Query once, reuse for every file of the run.
    #[default]
    Once,
    /// Query again before every file comparison.
    PerFile,
}

/// Parse a CIM datetime such as `20160824161431.977000+480`.
///
/// Only the `YYYYMMDDHHMMSS` part before the first `.` is used; the offset is
/// ignored, so the result is in the remote host's local time.
///
/// # Errors
/// Returns a decode error if the text does not match the layout.
pub fn parse_cim_datetime(text: &str) -> Result<NaiveDateTime> {
    let stamp = text.split('.').next().unwrap_or_default().trim();
    NaiveDateTime::parse_from_str(stamp, CIM_DATETIME_FORMAT)
        .map_err(|e| CheckWmiError::Decode(format!("invalid CIM datetime '{text}': {e}")))
}

/// Reads the current local date-time of the remote host.
pub struct RemoteClock<C: QueryChannel> {
    channel: C,
    policy: ClockPolicy,
    cached: Option<NaiveDateTime>,
}

impl<C: QueryChannel> RemoteClock<C> {
    #[must_use]
    pub const fn new(channel: C, policy: ClockPolicy) -> Self {
        Self {
            channel,
            policy,
            cached: None,
        }
    }

    /// Reference time for the next comparison, honouring the clock policy.
    ///
    /// # Errors
    /// Returns a protocol error if the query fails, or a decode error if the
    /// answer has no usable `LocalDateTime`.
    pub fn now(&mut self) -> Result<NaiveDateTime> {
        match (self.policy, self.cached) {
            (ClockPolicy::Once, Some(cached)) => Ok(cached),
            (ClockPolicy::Once, None) => {
                let now = self.query_now()?;
                self.cached = Some(now);
                Ok(now)
            }
            (ClockPolicy::PerFile, _) => self.query_now(),
        }
    }

    /// Always ask the remote host.
    ///
    /// # Errors
    /// See [`RemoteClock::now`].
    pub fn query_now(&self) -> Result<NaiveDateTime> {
        let rows = self.channel.query(wql::LOCAL_DATETIME)?;
        let value = rows
            .first()
            .and_then(|row| row.get("LocalDateTime"))
            .ok_or_else(|| {
                CheckWmiError::Decode(
                    "Win32_OperatingSystem returned no LocalDateTime".to_string(),
                )
            })?;
        let now = parse_cim_datetime(value)?;
        log::debug!("current_datetime: {now}");
        Ok(now)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
