/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Language numbers are `f64`, so these helpers guard every place where one
/// becomes a list index or a repeat count, and every integer literal.
pub mod num;
