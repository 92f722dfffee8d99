//! Hour bounds used by the [`HourClassifier`](crate::HourClassifier).
//!
//! The defaults describe a conventional 24-hour clock (`0..=23`) with a
//! daylight window of `7..=17`. Deployments that need to accept the value
//! `24` set `max_hour` explicitly instead of patching a constant:
//!
//! ```rust
//! use classify::HourBounds;
//!
//! let bounds = HourBounds::default().with_max_hour(24);
//! bounds.validate().expect("bounds are consistent");
//! assert_eq!(bounds.max_hour, 24);
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest hour accepted by the default bounds.
pub const MIN_HOUR: i64 = 0;
/// Highest hour accepted by the default bounds (hour 24 is out of range).
pub const MAX_HOUR: i64 = 23;
/// First hour of the daylight window, inclusive.
pub const DAYLIGHT_START: i64 = 7;
/// Last hour of the daylight window, inclusive.
pub const DAYLIGHT_END: i64 = 17;

/// Errors raised when hour bounds are inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_hour ({min}) must not exceed max_hour ({max})")]
    InvertedRange { min: i64, max: i64 },

    #[error("daylight_start ({start}) must not exceed daylight_end ({end})")]
    InvertedDaylight { start: i64, end: i64 },

    #[error("daylight window {start}..={end} lies outside {min}..={max}")]
    DaylightOutOfRange {
        start: i64,
        end: i64,
        min: i64,
        max: i64,
    },
}

/// Inclusive bounds for hour validation and the daylight window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourBounds {
    pub min_hour: i64,
    pub max_hour: i64,
    pub daylight_start: i64,
    pub daylight_end: i64,
}

impl Default for HourBounds {
    fn default() -> Self {
        Self {
            min_hour: MIN_HOUR,
            max_hour: MAX_HOUR,
            daylight_start: DAYLIGHT_START,
            daylight_end: DAYLIGHT_END,
        }
    }
}

impl HourBounds {
    /// Returns a copy with a different upper bound.
    pub fn with_max_hour(mut self, max_hour: i64) -> Self {
        self.max_hour = max_hour;
        self
    }

    /// Returns a copy with a different daylight window.
    pub fn with_daylight(mut self, start: i64, end: i64) -> Self {
        self.daylight_start = start;
        self.daylight_end = end;
        self
    }

    /// Checks that the range and the daylight window are ordered and nested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_hour > self.max_hour {
            return Err(ConfigError::InvertedRange {
                min: self.min_hour,
                max: self.max_hour,
            });
        }
        if self.daylight_start > self.daylight_end {
            return Err(ConfigError::InvertedDaylight {
                start: self.daylight_start,
                end: self.daylight_end,
            });
        }
        if self.daylight_start < self.min_hour || self.daylight_end > self.max_hour {
            return Err(ConfigError::DaylightOutOfRange {
                start: self.daylight_start,
                end: self.daylight_end,
                min: self.min_hour,
                max: self.max_hour,
            });
        }
        Ok(())
    }

    /// True when `hour` lies within `min_hour..=max_hour`.
    pub fn contains(&self, hour: i64) -> bool {
        (self.min_hour..=self.max_hour).contains(&hour)
    }

    /// True when `hour` lies within the daylight window.
    pub fn is_daylight(&self, hour: i64) -> bool {
        (self.daylight_start..=self.daylight_end).contains(&hour)
    }
}
