//! Reusable field validators
//!
//! Each validator is a predicate over an optional field value that returns
//! `true` when the value passes. Rules in [`super::rules`] combine them with
//! a field name and a message.

/// Validator: value is present
pub fn present<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Validator: string is present and has at least one character
pub fn not_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Validator: string is present and has at least one non-whitespace character
pub fn not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Validator: number is absent or strictly greater than zero
///
/// Absence is left to [`present`]. NaN is not positive.
pub fn positive(value: Option<f64>) -> bool {
    value.is_none_or(|n| n > 0.0)
}
