//! printf-style patterns for rendering a field's default value.
//!
//! Supports literal text, `%%`, and a single floating point conversion
//! `%[flags][width][.precision]f` with flags `,` (grouping), `0` (zero pad)
//! and `-` (left justify). Separators come from the field's [`FormatConfig`],
//! so `"%.2f"` renders `0,00` under a German locale.

use super::config::FormatConfig;
use super::group::group_digits;

const DEFAULT_PRECISION: usize = 6;

/// Errors from parsing a default-value pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Conversion other than `f` (e.g. `%d`)
    UnsupportedConversion(char),
    /// Pattern contains no `%f` conversion
    MissingConversion,
    /// Pattern contains more than one `%f` conversion
    TooManyConversions,
    /// `%` at the end of the pattern or in an unparseable spec
    InvalidSpec(String),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::UnsupportedConversion(c) => {
                write!(f, "unsupported conversion '%{}' (only %f is allowed)", c)
            }
            PatternError::MissingConversion => write!(f, "pattern has no %f conversion"),
            PatternError::TooManyConversions => write!(f, "pattern has more than one conversion"),
            PatternError::InvalidSpec(spec) => write!(f, "invalid format spec '{}'", spec),
        }
    }
}

impl std::error::Error for PatternError {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FloatSpec {
    grouping: bool,
    zero_pad: bool,
    left_justify: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Render `value` through `pattern`.
pub fn render_pattern(pattern: &str, value: f64, config: &FormatConfig) -> Result<String, PatternError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut converted = false;
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let mut raw = String::from("%");
        let mut spec = FloatSpec::default();

        while let Some(&flag) = chars.peek() {
            match flag {
                ',' => spec.grouping = true,
                '0' => spec.zero_pad = true,
                '-' => spec.left_justify = true,
                _ => break,
            }
            raw.push(flag);
            chars.next();
        }

        let mut width = String::new();
        while let Some(&d) = chars.peek().filter(|c| c.is_ascii_digit()) {
            width.push(d);
            chars.next();
        }
        raw.push_str(&width);
        if !width.is_empty() {
            spec.width = Some(width.parse().map_err(|_| PatternError::InvalidSpec(raw.clone()))?);
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            raw.push('.');
            let mut precision = String::new();
            while let Some(&d) = chars.peek().filter(|c| c.is_ascii_digit()) {
                precision.push(d);
                chars.next();
            }
            raw.push_str(&precision);
            // A bare '.' means precision zero
            spec.precision = Some(if precision.is_empty() {
                0
            } else {
                precision
                    .parse()
                    .map_err(|_| PatternError::InvalidSpec(raw.clone()))?
            });
        }

        match chars.next() {
            Some('%') if raw == "%" => out.push('%'),
            Some('f') => {
                if converted {
                    return Err(PatternError::TooManyConversions);
                }
                converted = true;
                out.push_str(&render_float(value, spec, config));
            }
            Some(other) => return Err(PatternError::UnsupportedConversion(other)),
            None => return Err(PatternError::InvalidSpec(raw)),
        }
    }

    if !converted {
        return Err(PatternError::MissingConversion);
    }
    Ok(out)
}

fn render_float(value: f64, spec: FloatSpec, config: &FormatConfig) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() { "-" } else { "" };

    let body = if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "Infinity".to_string()
    } else {
        let precision = spec.precision.unwrap_or(DEFAULT_PRECISION);
        let plain = format!("{:.*}", precision, value.abs());
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let mut body = if spec.grouping {
            group_digits(integer, config.grouping_separator())
        } else {
            integer.to_string()
        };
        if !fraction.is_empty() {
            body.push(config.decimal_separator());
            body.push_str(fraction);
        }
        body
    };

    let len = sign.chars().count() + body.chars().count();
    let pad = spec.width.map_or(0, |w| w.saturating_sub(len));

    if spec.left_justify {
        format!("{}{}{}", sign, body, " ".repeat(pad))
    } else if spec.zero_pad && value.is_finite() {
        format!("{}{}{}", sign, "0".repeat(pad), body)
    } else {
        format!("{}{}{}", " ".repeat(pad), sign, body)
    }
}
