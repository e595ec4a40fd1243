//! Character-offset helpers for single-line text
//!
//! Field offsets count `char`s, not bytes: separators such as U+00A0 take
//! more than one byte in UTF-8.

/// Length in characters
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of occurrences of `ch`
pub fn count_char(s: &str, ch: char) -> usize {
    s.chars().filter(|&c| c == ch).count()
}

/// Character at a char offset, None if out of bounds
pub fn char_at(s: &str, offset: usize) -> Option<char> {
    s.chars().nth(offset)
}

/// Convert char offset to byte offset (clamped to the end of the string)
pub fn char_to_byte(s: &str, offset: usize) -> usize {
    s.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Copy of `s` without the character at `offset`
pub fn remove_char_at(s: &str, offset: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|&(i, _)| i != offset)
        .map(|(_, c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_multibyte() {
        assert_eq!(char_len("1\u{a0}234"), 5);
        assert_eq!("1\u{a0}234".len(), 6);
    }

    #[test]
    fn test_count_char() {
        assert_eq!(count_char("1,234,567", ','), 2);
        assert_eq!(count_char("", ','), 0);
    }

    #[test]
    fn test_char_to_byte() {
        let s = "1\u{a0}234";
        assert_eq!(char_to_byte(s, 0), 0);
        assert_eq!(char_to_byte(s, 2), 3);
        assert_eq!(char_to_byte(s, 5), 6);
        assert_eq!(char_to_byte(s, 99), 6);
    }

    #[test]
    fn test_remove_char_at() {
        assert_eq!(remove_char_at("12345", 1), "1345");
        assert_eq!(remove_char_at("12345", 9), "12345");
    }
}
