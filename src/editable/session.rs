//! Drives a [`NumericField`] from [`TextEditMsg`]s applied to a [`TextInput`].

use crate::field::{EditOutcome, NumericField, TextControl};

use super::constraints::EditConstraints;
use super::input::TextInput;
use super::messages::TextEditMsg;

/// A text input with a numeric field attached to its change hooks.
#[derive(Debug)]
pub struct EditSession {
    pub input: TextInput,
    pub field: NumericField,
}

impl EditSession {
    /// Attach `field` to an empty phone-keypad input
    pub fn new(field: NumericField) -> Self {
        Self::with_constraints(field, EditConstraints::phone())
    }

    /// Attach `field` to an empty input with the given constraints
    pub fn with_constraints(field: NumericField, constraints: EditConstraints) -> Self {
        Self {
            input: TextInput::new(constraints),
            field,
        }
    }

    pub fn text(&self) -> &str {
        self.input.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn numeric_value(&self) -> f64 {
        self.field.numeric_value(&self.input)
    }

    /// Apply one message.
    ///
    /// Text-changing messages run a full edit cycle and return its outcome;
    /// movements and no-op edits return `None`.
    pub fn handle(&mut self, msg: TextEditMsg) -> Option<EditOutcome> {
        if !msg.is_editing() || self.input.notifications_suspended() {
            self.input.update(msg);
            return None;
        }

        self.field.before_edit(&self.input);
        if !self.input.update(msg) {
            self.field.cancel_edit();
            return None;
        }
        Some(self.field.after_edit(&mut self.input))
    }

    /// Type each character of `keys` in turn, returning the last outcome
    pub fn type_str(&mut self, keys: &str) -> Option<EditOutcome> {
        keys.chars()
            .map(|ch| self.handle(TextEditMsg::InsertChar(ch)))
            .last()
            .flatten()
    }

    /// Reset the input to the field's default text
    pub fn clear(&mut self) {
        self.field.clear(&mut self.input);
    }
}
