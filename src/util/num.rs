/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Why an `f64` could not be used as a count or an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WholeNumberError {
    /// The value is below zero.
    Negative,
    /// The value has a fractional part, or is not finite.
    Fractional,
    /// The value is too large to be exact or to fit in a `usize`.
    TooLarge,
}

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use glang::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a length or count to `f64`.
///
/// Values past `MAX_SAFE_U64_INT` cannot occur for in-memory collections, so
/// they saturate instead of failing.
///
/// ## Example
/// ```
/// use glang::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(3), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    u64::try_from(value).map_or(MAX_SAFE_U64_INT, |v| v.min(MAX_SAFE_U64_INT)) as f64
}

/// Safely converts an `f64` to `usize` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns the reason the value is not a valid whole number.
///
/// ## Example
/// ```
/// use glang::util::num::{WholeNumberError, f64_to_usize_checked};
///
/// assert_eq!(f64_to_usize_checked(7.0), Ok(7));
/// assert_eq!(f64_to_usize_checked(-1.0), Err(WholeNumberError::Negative));
/// assert_eq!(f64_to_usize_checked(1.5), Err(WholeNumberError::Fractional));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked(value: f64) -> Result<usize, WholeNumberError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(WholeNumberError::Fractional);
    }
    if value < 0.0 {
        return Err(WholeNumberError::Negative);
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(WholeNumberError::TooLarge);
    }
    usize::try_from(value as u64).map_err(|_| WholeNumberError::TooLarge)
}
