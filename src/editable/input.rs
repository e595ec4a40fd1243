//! In-memory single-line text input implementing [`TextControl`].

use std::borrow::Cow;

use crate::field::TextControl;

use super::buffer::{StringBuffer, TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// A single-line text input: buffer, cursor/selection, and constraints.
///
/// Tracks a notification suspension depth so the driver knows whether a
/// mutation should go through the change hooks.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: StringBuffer,
    selection: Selection,
    pub constraints: EditConstraints,
    suspend_depth: usize,
}

impl TextInput {
    pub fn new(constraints: EditConstraints) -> Self {
        Self {
            constraints,
            ..Self::default()
        }
    }

    /// Create an input with text and the cursor at the end
    pub fn with_text(text: &str, constraints: EditConstraints) -> Self {
        let buffer = StringBuffer::from_text(text);
        let selection = Selection::collapsed(buffer.len_chars());
        Self {
            buffer,
            selection,
            constraints,
            suspend_depth: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Whether change hooks are currently suspended
    pub fn notifications_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    /// Apply a message. Returns true if the text changed.
    pub fn update(&mut self, msg: TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => {
                let offset = if self.has_selection() {
                    match target {
                        MoveTarget::Left => self.selection.start(),
                        MoveTarget::Right => self.selection.end(),
                        other => self.target_offset(other),
                    }
                } else {
                    self.target_offset(target)
                };
                self.selection = Selection::collapsed(offset);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.selection.head = self.target_offset(target);
                false
            }
            TextEditMsg::SelectAll => {
                self.selection = Selection::new(0, self.len_chars());
                false
            }
            TextEditMsg::InsertChar(ch) => {
                if !self.constraints.is_char_allowed(ch) {
                    return false;
                }
                self.replace_selection(ch.encode_utf8(&mut [0u8; 4]))
            }
            TextEditMsg::InsertText(text) => {
                let filtered: String = text
                    .chars()
                    .filter(|&c| self.constraints.is_char_allowed(c))
                    .collect();
                if filtered.is_empty() && !self.has_selection() {
                    return false;
                }
                self.replace_selection(&filtered)
            }
            TextEditMsg::DeleteBackward => {
                if self.has_selection() {
                    return self.replace_selection("");
                }
                let head = self.selection.head;
                if head == 0 {
                    return false;
                }
                self.buffer.remove(head - 1..head);
                self.selection = Selection::collapsed(head - 1);
                true
            }
            TextEditMsg::DeleteForward => {
                if self.has_selection() {
                    return self.replace_selection("");
                }
                let head = self.selection.head;
                if head >= self.len_chars() {
                    return false;
                }
                self.buffer.remove(head..head + 1);
                true
            }
            TextEditMsg::SetText(text) => {
                if text == self.buffer.as_str() {
                    return false;
                }
                self.buffer.set_content(&text);
                self.selection = Selection::collapsed(self.len_chars());
                true
            }
        }
    }

    fn target_offset(&self, target: MoveTarget) -> usize {
        let head = self.selection.head;
        match target {
            MoveTarget::Left => head.saturating_sub(1),
            MoveTarget::Right => (head + 1).min(self.len_chars()),
            MoveTarget::Start => 0,
            MoveTarget::End => self.len_chars(),
            MoveTarget::Offset(offset) => offset.min(self.len_chars()),
        }
    }

    /// Replace the selection (or insert at the cursor) with `text`.
    fn replace_selection(&mut self, text: &str) -> bool {
        let start = self.selection.start();
        let end = self.selection.end();
        let inserted = text.chars().count();
        let resulting = self.len_chars() - (end - start);

        if self.constraints.would_exceed_max_length(resulting, inserted) {
            return false;
        }
        if start == end && inserted == 0 {
            return false;
        }

        self.buffer.replace(start..end, text);
        self.selection = Selection::collapsed(start + inserted);
        true
    }
}

impl TextControl for TextInput {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.buffer.content())
    }

    fn cursor(&self) -> usize {
        self.selection.head
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.selection.clamp(self.len_chars());
    }

    fn set_cursor(&mut self, offset: usize) {
        self.selection = Selection::collapsed(offset.min(self.len_chars()));
    }

    fn suspend_change_notifications(&mut self) {
        self.suspend_depth += 1;
    }

    fn resume_change_notifications(&mut self) {
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
    }
}
