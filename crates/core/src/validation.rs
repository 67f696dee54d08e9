//! Validation of user-supplied configuration.
//!
//! Out-of-range time limits are clamped, never rejected. Non-finite numbers
//! fall back to [`DEFAULT_TIME_LIMIT`]; unparsable text falls back to whatever
//! the caller supplies.

use crate::types::{DEFAULT_TIME_LIMIT, MAX_TIME_LIMIT, MIN_TIME_LIMIT};

/// Round half-up and clamp into `[MIN_TIME_LIMIT, MAX_TIME_LIMIT]`.
///
/// # Examples
///
/// ```
/// use number_sequence_core::validation::clamp_time_limit;
///
/// assert_eq!(clamp_time_limit(5.0), 10);
/// assert_eq!(clamp_time_limit(700.0), 600);
/// assert_eq!(clamp_time_limit(100.6), 101);
/// assert_eq!(clamp_time_limit(f64::NAN), 100);
/// ```
pub fn clamp_time_limit(value: f64) -> u16 {
    if !value.is_finite() {
        return DEFAULT_TIME_LIMIT;
    }

    let rounded = (value + 0.5).floor();
    if rounded < MIN_TIME_LIMIT as f64 {
        MIN_TIME_LIMIT
    } else if rounded > MAX_TIME_LIMIT as f64 {
        MAX_TIME_LIMIT
    } else {
        rounded as u16
    }
}

/// Parse a time limit typed by the user.
///
/// Reads the leading integer (optional sign, decimal digits) and ignores
/// anything after it. Text without a leading integer yields `fallback`
/// unchanged; a parsed value is clamped.
pub fn parse_time_limit_input(input: &str, fallback: u16) -> u16 {
    match leading_integer(input) {
        Some(value) => clamp_time_limit(value),
        None => fallback,
    }
}

/// A click is valid only on the next expected number.
pub fn is_valid_number_click(clicked: u8, next_expected: u8) -> bool {
    clicked == next_expected
}

fn leading_integer(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    // f64 accumulation saturates gracefully on absurdly long inputs.
    let mut value = 0f64;
    let mut any = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        any = true;
        value = value * 10.0 + (b - b'0') as f64;
    }

    if !any {
        return None;
    }
    Some(if negative { -value } else { value })
}
