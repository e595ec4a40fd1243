//! Utility modules

pub mod text;

pub use text::{char_at, char_len, char_to_byte, count_char, remove_char_at};
