//! Display formatting: digit grouping and decimal reassembly.

use super::config::FormatConfig;

/// Format validated text into its display form.
///
/// Non-digits are dropped from both parts, leading zeros are stripped from the
/// integer part and its digits are regrouped in threes. A decimal separator
/// with no digits on either side becomes `0` plus the separator. An integer
/// part of just `0` with no decimal separator collapses to the empty string.
pub fn format_display(text: &str, config: &FormatConfig) -> String {
    let decimal = config.decimal_separator();

    let (integer, fraction) = match text.split_once(decimal) {
        Some((integer, fraction)) => (integer, Some(digits_only(fraction))),
        None => (text, None),
    };

    let integer_digits = digits_only(integer);
    let mut out = group_digits(strip_leading_zeros(&integer_digits), config.grouping_separator());

    if let Some(fraction) = fraction {
        if out.is_empty() && fraction.is_empty() {
            out.push('0');
        }
        out.push(decimal);
        out.push_str(&fraction);
    }

    if out == "0" {
        return String::new();
    }
    out
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip leading zeros, keeping a single `0` for all-zero input.
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

/// Insert `sep` between every group of three digits, counting from the right.
pub fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * sep.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
