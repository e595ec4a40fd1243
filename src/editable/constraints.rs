//! Edit constraints for text inputs.
//!
//! Constraints decide which typed characters an input accepts before any
//! change notification is issued.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what an input accepts.
#[derive(Debug, Clone, Default)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl EditConstraints {
    /// Phone-keypad characters: digits plus `+*#,.;()-/N` and space.
    ///
    /// Numeric fields use this so both `,` and `.` can be typed whatever the
    /// locale; the formatter drops the rest.
    pub fn phone() -> Self {
        Self {
            max_length: None,
            char_filter: Some(|c| c.is_ascii_digit() || "+*#,.;()-/N ".contains(c)),
        }
    }

    /// Limit the input to `max_length` characters (None = unlimited)
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }
}
