//! Epoch sanity checks.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

/// Default number of years past "now" an epoch may lie and still be valid.
pub const DEFAULT_MAX_FUTURE_YEARS: u32 = 10;

/// The window of Unix seconds considered plausible: after the epoch and no
/// further than `max_future_years` past the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpochWindow {
    pub max_future_years: u32,
}

impl Default for EpochWindow {
    fn default() -> Self {
        Self {
            max_future_years: DEFAULT_MAX_FUTURE_YEARS,
        }
    }
}

impl EpochWindow {
    /// Creates a window reaching `max_future_years` into the future.
    pub fn new(max_future_years: u32) -> Self {
        Self { max_future_years }
    }

    /// Reports whether `secs` lies in the window relative to the wall clock.
    pub fn contains(&self, secs: i64) -> bool {
        self.contains_at(secs, Utc::now())
    }

    /// Reports whether `secs` lies in the window relative to `now`.
    pub fn contains_at(&self, secs: i64, now: DateTime<Utc>) -> bool {
        if secs <= 0 {
            return false;
        }
        let months = Months::new(self.max_future_years.saturating_mul(12));
        let horizon = now
            .checked_add_months(months)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        secs <= horizon.timestamp()
    }
}

/// Reports whether `secs` is a plausible Unix seconds value: strictly
/// positive and at most ten years ahead of the wall clock.
pub fn is_valid_epoch(secs: i64) -> bool {
    EpochWindow::default().contains(secs)
}

/// Like [`is_valid_epoch`], measured against `now` instead of the wall clock.
pub fn is_valid_epoch_at(secs: i64, now: DateTime<Utc>) -> bool {
    EpochWindow::default().contains_at(secs, now)
}
