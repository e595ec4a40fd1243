//! Per-keystroke reformatting pipeline for numeric input fields.
//!
//! Every edit runs through the same stages:
//!
//! 1. [`reconcile`]: repair backspace-over-separator and normalize a trailing
//!    `,`/`.` to the locale's decimal separator
//! 2. [`validate`]: reject edits that exceed digit limits or misplace separators
//! 3. [`format_display`]: regroup digits and reassemble the decimal part
//! 4. [`map_cursor`]: shift the cursor by the length delta
//!
//! [`process_edit`] chains the stages; the edit-cycle state machine in
//! [`crate::field`] decides what to do with the result.

mod config;
mod cursor;
mod group;
mod pattern;
mod reconcile;
mod validate;
mod value;

pub use config::{FormatConfig, DEFAULT_DIGITS_AFTER_SEPARATOR};
pub use cursor::map_cursor;
pub use group::{format_display, group_digits};
pub use pattern::{render_pattern, PatternError};
pub use reconcile::{normalize_trailing_punctuation, reconcile, repair_separator_deletion};
pub use validate::{validate, Rejection};
pub use value::{extract_value, parse_value};

use crate::util::text::char_len;

/// Text and cursor captured just before the host applies an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSnapshot {
    pub text: String,
    /// Character offset
    pub cursor: usize,
}

impl EditSnapshot {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

/// Display text and cursor produced by a successful edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedResult {
    pub text: String,
    /// Character offset
    pub cursor: usize,
}

/// Run reconcile → validate → format → cursor mapping on a raw edit.
///
/// `cursor` is the host's cursor after the edit; the returned cursor is
/// derived from the snapshot's cursor.
pub fn process_edit(
    raw: &str,
    snapshot: &EditSnapshot,
    cursor: usize,
    config: &FormatConfig,
) -> Result<FormattedResult, Rejection> {
    let reconciled = reconcile(raw, snapshot, cursor, config);
    validate(&reconciled, config)?;

    let text = format_display(&reconciled, config);
    let cursor = map_cursor(snapshot.cursor, char_len(&snapshot.text), char_len(&text));
    Ok(FormattedResult { text, cursor })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_digit_inserts_separator() {
        let config = FormatConfig::default();
        let result = process_edit("1234", &EditSnapshot::new("123", 3), 4, &config).unwrap();
        assert_eq!(result.text, "1,234");
        assert_eq!(result.cursor, 5);
    }

    #[test]
    fn test_backspace_through_separator() {
        let config = FormatConfig::default();
        // "12,|345" backspace
        let result = process_edit("12345", &EditSnapshot::new("12,345", 3), 2, &config).unwrap();
        assert_eq!(result.text, "1,345");
        assert_eq!(result.cursor, 2);
    }

    #[test]
    fn test_rejected_fraction() {
        let config = FormatConfig::default();
        let result = process_edit("1.234", &EditSnapshot::new("1.23", 4), 5, &config);
        assert_eq!(
            result,
            Err(Rejection::TooManyFractionDigits { limit: 2, found: 3 })
        );
    }
}
