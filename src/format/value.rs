//! Parsing displayed text back into a number.

use super::config::FormatConfig;

/// Parse locale-formatted text, returning `None` when it isn't a number.
///
/// Grouping separators may appear anywhere in the integer part. At most one
/// decimal separator is allowed and at least one digit must be present.
/// A trailing decimal separator (`"12."`) or a missing integer part (`".5"`)
/// is accepted.
pub fn parse_value(text: &str, config: &FormatConfig) -> Option<f64> {
    let (integer, fraction) = match text.split_once(config.decimal_separator()) {
        Some((integer, fraction)) => (integer, fraction),
        None => (text, ""),
    };

    let grouping = config.grouping_separator();
    let mut normalized = String::with_capacity(text.len());
    for ch in integer.chars().filter(|&ch| ch != grouping) {
        if !ch.is_ascii_digit() {
            return None;
        }
        normalized.push(ch);
    }

    if !fraction.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    if normalized.is_empty() && fraction.is_empty() {
        return None;
    }

    if normalized.is_empty() {
        normalized.push('0');
    }
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }
    normalized.parse().ok()
}

/// Numeric value of `text`, or `f64::NAN` when it cannot be parsed.
pub fn extract_value(text: &str, config: &FormatConfig) -> f64 {
    parse_value(text, config).unwrap_or(f64::NAN)
}
