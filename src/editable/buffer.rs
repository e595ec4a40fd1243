//! Text buffer traits and the single-line `String` implementation.
//!
//! All offsets are character offsets; conversion to byte offsets happens
//! inside the buffer.

use std::ops::Range;

use crate::util::text::char_to_byte;

/// Read-only view into a single-line text buffer.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Borrow the full content
    fn content(&self) -> &str;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        let len = self.len_chars();
        self.replace(0..len, text);
    }
}

/// TextBuffer implementation wrapping String.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn content(&self) -> &str {
        &self.text
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = char_to_byte(&self.text, offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = char_to_byte(&self.text, range.start);
        let end_byte = char_to_byte(&self.text, range.end).max(start_byte);
        self.text.replace_range(start_byte..end_byte, "");
    }

    fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
