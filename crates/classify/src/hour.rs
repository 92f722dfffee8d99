//! Hour-of-day classification.
//!
//! Unlike id validation, the hour check is type-strict: a numeric string such
//! as `"7"` is never classified, it yields [`PartOfDay::Undetermined`]. Callers
//! that receive text (an HTTP query string, for instance) must parse it first
//! with [`HourCandidate::from_query`].
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::HourBounds;

/// Label produced for an hour candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfDay {
    Daylight,
    Night,
    Undetermined,
}

impl PartOfDay {
    /// Label as it appears in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfDay::Daylight => "Daylight",
            PartOfDay::Night => "Night",
            PartOfDay::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An hour value of unverified type and range.
#[derive(Debug, Clone, PartialEq)]
pub enum HourCandidate {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, nulls, arrays, objects or a missing value.
    Other,
}

impl HourCandidate {
    /// Parses a query-string value into a numeric candidate.
    ///
    /// Integers and decimals become numeric candidates; anything else stays
    /// [`HourCandidate::Text`] and is therefore undetermined.
    pub fn from_query(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(hour) = trimmed.parse::<i64>() {
            return HourCandidate::Integer(hour);
        }
        match trimmed.parse::<f64>() {
            Ok(hour) if hour.is_finite() => HourCandidate::Float(hour),
            _ => HourCandidate::Text(raw.to_string()),
        }
    }

    /// Returns the integral hour if the candidate is a whole number.
    fn as_whole_hour(&self) -> Option<i64> {
        match *self {
            HourCandidate::Integer(hour) => Some(hour),
            HourCandidate::Float(hour) if hour.is_finite() && hour == hour.floor() => {
                if (i64::MIN as f64..i64::MAX as f64).contains(&hour) {
                    Some(hour as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

macro_rules! integer_hour_candidate {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HourCandidate {
                fn from(value: $ty) -> Self {
                    HourCandidate::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_hour_candidate!(i8, i16, i32, i64, u8, u16, u32);

// Values past the i64 range stay numeric so they classify as out of range.
macro_rules! checked_hour_candidate {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HourCandidate {
                fn from(value: $ty) -> Self {
                    i64::try_from(value)
                        .map(HourCandidate::Integer)
                        .unwrap_or(HourCandidate::Float(value as f64))
                }
            }
        )*
    };
}

checked_hour_candidate!(u64, usize, isize, i128, u128);

impl From<f64> for HourCandidate {
    fn from(value: f64) -> Self {
        HourCandidate::Float(value)
    }
}

impl From<f32> for HourCandidate {
    fn from(value: f32) -> Self {
        HourCandidate::Float(f64::from(value))
    }
}

impl From<&str> for HourCandidate {
    fn from(value: &str) -> Self {
        HourCandidate::Text(value.to_string())
    }
}

impl From<String> for HourCandidate {
    fn from(value: String) -> Self {
        HourCandidate::Text(value)
    }
}

impl From<&Value> for HourCandidate {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => {
                if let Some(hour) = number.as_i64() {
                    HourCandidate::Integer(hour)
                } else if let Some(hour) = number.as_f64() {
                    HourCandidate::Float(hour)
                } else {
                    HourCandidate::Other
                }
            }
            Value::String(text) => HourCandidate::Text(text.clone()),
            _ => HourCandidate::Other,
        }
    }
}

impl<T: Into<HourCandidate>> From<Option<T>> for HourCandidate {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(HourCandidate::Other)
    }
}

/// Classifies hours against a fixed set of [`HourBounds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourClassifier {
    bounds: HourBounds,
}

impl HourClassifier {
    /// Creates a classifier; `bounds` should already be validated.
    pub fn new(bounds: HourBounds) -> Self {
        Self { bounds }
    }

    /// The bounds this classifier checks against.
    pub fn bounds(&self) -> &HourBounds {
        &self.bounds
    }

    /// True when the candidate is numeric, whole and within the bounds.
    pub fn is_valid_hour(&self, candidate: impl Into<HourCandidate>) -> bool {
        self.valid_hour(&candidate.into()).is_some()
    }

    /// Labels the candidate; anything outside the domain is `Undetermined`.
    pub fn classify(&self, candidate: impl Into<HourCandidate>) -> PartOfDay {
        match self.valid_hour(&candidate.into()) {
            Some(hour) if self.bounds.is_daylight(hour) => PartOfDay::Daylight,
            Some(_) => PartOfDay::Night,
            None => PartOfDay::Undetermined,
        }
    }

    fn valid_hour(&self, candidate: &HourCandidate) -> Option<i64> {
        candidate
            .as_whole_hour()
            .filter(|hour| self.bounds.contains(*hour))
    }
}

/// Classifies `candidate` with the default bounds (`0..=23`, daylight `7..=17`).
pub fn what_part_of_day(candidate: impl Into<HourCandidate>) -> PartOfDay {
    HourClassifier::default().classify(candidate)
}
