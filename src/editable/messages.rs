//! Message types for single-line input editing.

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move to start of input
    Start,
    /// Move to end of input
    End,
    /// Move to an absolute character offset
    Offset(usize),
}

/// Editing operations on a text input.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move cursor and collapse any selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),
    /// Select all text
    SelectAll,

    // === Insertion ===
    /// Insert a single character (replaces the selection)
    InsertChar(char),
    /// Insert a string, e.g. a paste (replaces the selection)
    InsertText(String),

    // === Deletion ===
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,

    // === Whole-text ===
    /// Replace the whole text programmatically, cursor at end
    SetText(String),
}

impl TextEditMsg {
    /// Check if this message may modify the text
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::SetText(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(TextEditMsg::InsertChar('1').is_editing());
        assert!(TextEditMsg::DeleteBackward.is_editing());
        assert!(TextEditMsg::SetText(String::new()).is_editing());
        assert!(!TextEditMsg::Move(MoveTarget::Left).is_editing());
        assert!(!TextEditMsg::SelectAll.is_editing());
    }
}
