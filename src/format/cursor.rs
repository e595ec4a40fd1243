//! Cursor remapping after reformatting.

/// Shift the pre-edit cursor by the overall change in text length.
///
/// Separators inserted or removed by regrouping move everything after the
/// edit point by the same amount, so for single-character edits this keeps
/// the cursor next to the character just typed. Multi-character replacements
/// (paste, autofill) can land somewhere else; the host clamps to the text.
pub fn map_cursor(previous_cursor: usize, previous_len: usize, new_len: usize) -> usize {
    let shifted = previous_cursor as isize + (new_len as isize - previous_len as isize);
    shifted.max(0) as usize
}
