//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use numeric_field::editable::{EditConstraints, EditSession, TextInput};
use numeric_field::field::{NumericField, TextControl, ValueEvent};
use numeric_field::format::FormatConfig;

/// Shared log of listener notifications
pub type EventLog = Rc<RefCell<Vec<ValueEvent>>>;

/// Create a session for `locale` showing `text` with the cursor at `cursor`
pub fn test_session(locale: &str, text: &str, cursor: usize) -> EditSession {
    let field = NumericField::new(FormatConfig::for_locale(locale));
    let mut input = TextInput::with_text(text, EditConstraints::phone());
    input.set_cursor(cursor);
    EditSession { input, field }
}

/// Attach a recording listener to the session's field
pub fn record_events(session: &mut EditSession) -> EventLog {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    session
        .field
        .add_value_change_listener(move |event: ValueEvent| sink.borrow_mut().push(event));
    log
}

/// Display text with `|` at the cursor, e.g. `"1,2|34"`
pub fn shown(session: &EditSession) -> String {
    let text = session.text();
    let byte = numeric_field::util::char_to_byte(text, session.cursor());
    format!("{}|{}", &text[..byte], &text[byte..])
}
