//! Identifier validation and normalization.
//!
//! A candidate is a usable id when it is numeric and integer-valued. Strings
//! such as `"2.0"` are accepted and normalize to `2`; `"1.5"` and `"abc"` are
//! rejected. Negative values are valid ids; whether a record exists for them
//! is decided by the lookup that follows.
//!
//! String candidates are read as follows:
//!
//! 1. surrounding whitespace is trimmed, and an empty result is invalid;
//! 2. an exact `i64` parse is tried first so large ids keep full precision;
//! 3. otherwise the text is parsed as `f64`, which must be finite, integral
//!    and representable as `i64`.
//!
//! Exponent notation normalizes from the parsed value (`"1e3"` is `1000`).
//! Hex literals and trailing garbage (`"12abc"`) are invalid.

/// A value that may name an integer identifier.
pub trait IdCandidate {
    /// Returns the normalized id, or `None` when the candidate is not a valid id.
    fn normalize(&self) -> Option<i64>;
}

/// Returns true when `candidate` is numeric and integer-valued.
pub fn is_valid_id<C: IdCandidate + ?Sized>(candidate: &C) -> bool {
    candidate.normalize().is_some()
}

/// Normalizes a valid candidate into the id used for lookups.
pub fn parse_id<C: IdCandidate + ?Sized>(candidate: &C) -> Option<i64> {
    candidate.normalize()
}

fn normalize_float(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;

    if !value.is_finite() || value != value.floor() {
        return None;
    }
    if !(LOWER..UPPER).contains(&value) {
        return None;
    }
    Some(value as i64)
}

impl IdCandidate for str {
    fn normalize(&self) -> Option<i64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(id) = trimmed.parse::<i64>() {
            return Some(id);
        }
        trimmed.parse::<f64>().ok().and_then(normalize_float)
    }
}

impl IdCandidate for String {
    fn normalize(&self) -> Option<i64> {
        self.as_str().normalize()
    }
}

impl<T: IdCandidate + ?Sized> IdCandidate for &T {
    fn normalize(&self) -> Option<i64> {
        (**self).normalize()
    }
}

impl IdCandidate for f64 {
    fn normalize(&self) -> Option<i64> {
        normalize_float(*self)
    }
}

impl IdCandidate for f32 {
    fn normalize(&self) -> Option<i64> {
        normalize_float(f64::from(*self))
    }
}

macro_rules! lossless_id_candidate {
    ($($ty:ty),*) => {
        $(
            impl IdCandidate for $ty {
                fn normalize(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! checked_id_candidate {
    ($($ty:ty),*) => {
        $(
            impl IdCandidate for $ty {
                fn normalize(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

lossless_id_candidate!(i8, i16, i32, i64, u8, u16, u32);
checked_id_candidate!(u64, usize, isize, i128, u128);
