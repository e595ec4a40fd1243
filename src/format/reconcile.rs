//! Change reconciliation: normalizations applied to raw post-edit text before validation.

use crate::util::text::{char_at, char_len, count_char, remove_char_at};

use super::config::FormatConfig;
use super::EditSnapshot;

/// Punctuation keys accepted as "decimal point" regardless of locale.
const DECIMAL_KEYS: [char; 2] = [',', '.'];

/// Run both normalizations on `text`, in order.
///
/// `cursor` is the host's cursor offset *after* the edit was applied.
pub fn reconcile(text: &str, snapshot: &EditSnapshot, cursor: usize, config: &FormatConfig) -> String {
    let repaired = repair_separator_deletion(text, snapshot, cursor, config);
    normalize_trailing_punctuation(&repaired, config)
}

/// Turn a backspace over a grouping separator into a backspace over the digit before it.
///
/// Grouping separators are display-only, so deleting one would just have the
/// formatter put it back. Applies when the edit removed exactly one character,
/// that character was a grouping separator, and the cursor now sits where it was.
pub fn repair_separator_deletion(
    text: &str,
    snapshot: &EditSnapshot,
    cursor: usize,
    config: &FormatConfig,
) -> String {
    let sep = config.grouping_separator();
    let new_len = char_len(text);
    let old_len = char_len(&snapshot.text);

    let one_separator_fewer = count_char(text, sep) + 1 == count_char(&snapshot.text, sep);
    let one_char_shorter = new_len + 1 == old_len;
    // Cursor must index both strings; `old_len > cursor` also guards the lookup below
    let cursor_in_bounds = cursor <= new_len && cursor < old_len;

    if one_separator_fewer
        && one_char_shorter
        && cursor_in_bounds
        && cursor > 0
        && char_at(&snapshot.text, cursor) == Some(sep)
    {
        tracing::trace!(
            "Backspace over grouping separator at {}; removing digit before it",
            cursor
        );
        return remove_char_at(text, cursor - 1);
    }

    text.to_string()
}

/// Rewrite a trailing `,` or `.` to the configured decimal separator.
pub fn normalize_trailing_punctuation(text: &str, config: &FormatConfig) -> String {
    let decimal = config.decimal_separator();
    match text.chars().last() {
        Some(last) if !last.is_ascii_digit() && last != decimal && DECIMAL_KEYS.contains(&last) => {
            let mut out: String = text.chars().take(char_len(text) - 1).collect();
            out.push(decimal);
            out
        }
        _ => text.to_string(),
    }
}
