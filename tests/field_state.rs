//! Edit-cycle state machine tests against a recording host control

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use numeric_field::config::{DefaultValue, FieldConfig};
use numeric_field::field::{EditOutcome, EditPhase, NumericField, TextControl, ValueEvent};
use numeric_field::format::{FormatConfig, PatternError};

/// Host control that records every write and whether hooks were suspended
#[derive(Default)]
struct RecordingControl {
    text: String,
    cursor: usize,
    suspended: usize,
    writes: Vec<(String, bool)>,
    suspend_calls: usize,
    resume_calls: usize,
}

impl RecordingControl {
    fn new(text: &str, cursor: usize) -> Self {
        Self {
            text: text.to_string(),
            cursor,
            ..Self::default()
        }
    }

    /// Simulate the user's edit landing in the control
    fn user_edit(&mut self, text: &str, cursor: usize) {
        self.text = text.to_string();
        self.cursor = cursor;
    }
}

impl TextControl for RecordingControl {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.writes.push((text.to_string(), self.suspended > 0));
        self.text = text.to_string();
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset;
    }

    fn suspend_change_notifications(&mut self) {
        self.suspended += 1;
        self.suspend_calls += 1;
    }

    fn resume_change_notifications(&mut self) {
        self.suspended -= 1;
        self.resume_calls += 1;
    }
}

fn run_edit(
    field: &mut NumericField,
    control: &mut RecordingControl,
    text: &str,
    cursor: usize,
) -> EditOutcome {
    field.before_edit(&*control);
    assert_eq!(field.phase(), EditPhase::Capturing);
    control.user_edit(text, cursor);
    let outcome = field.after_edit(control);
    assert_eq!(field.phase(), EditPhase::Idle);
    outcome
}

// ========================================================================
// Reentrancy guard
// ========================================================================

#[test]
fn test_commit_writes_while_suspended() {
    let mut field = NumericField::default();
    let mut control = RecordingControl::new("123", 3);
    run_edit(&mut field, &mut control, "1234", 4);

    assert_eq!(control.writes, vec![("1,234".to_string(), true)]);
    assert_eq!(control.suspended, 0);
    assert_eq!(control.suspend_calls, control.resume_calls);
}

#[test]
fn test_revert_writes_while_suspended() {
    let mut field = NumericField::default();
    let mut control = RecordingControl::new("1.25", 4);
    let outcome = run_edit(&mut field, &mut control, "1.259", 5);

    assert!(matches!(outcome, EditOutcome::Reverted(_)));
    assert_eq!(control.writes, vec![("1.25".to_string(), true)]);
    assert_eq!(control.cursor, 4);
    assert_eq!(control.suspended, 0);
}

#[test]
fn test_clear_path_without_default_writes_nothing() {
    let mut field = NumericField::default();
    let mut control = RecordingControl::new("5", 1);
    let outcome = run_edit(&mut field, &mut control, "", 0);

    assert_eq!(outcome, EditOutcome::Cleared);
    assert!(control.writes.is_empty());
    assert_eq!(control.suspend_calls, 0);
}

// ========================================================================
// State machine
// ========================================================================

#[test]
fn test_after_edit_without_before_is_ignored() {
    let mut field = NumericField::default();
    let mut control = RecordingControl::new("12345", 5);
    assert_eq!(field.after_edit(&mut control), EditOutcome::Ignored);
    assert_eq!(control.text, "12345");
    assert!(control.writes.is_empty());
}

#[test]
fn test_cancel_edit_returns_to_idle() {
    let mut field = NumericField::default();
    let control = RecordingControl::new("1", 1);
    field.before_edit(&control);
    field.cancel_edit();
    assert_eq!(field.phase(), EditPhase::Idle);
}

#[test]
fn test_snapshot_is_overwritten_by_each_capture() {
    let mut field = NumericField::default();
    let mut control = RecordingControl::new("1", 1);
    field.before_edit(&control);
    control.user_edit("12", 2);
    field.before_edit(&control);
    control.user_edit("12.999", 6);
    let outcome = field.after_edit(&mut control);

    // Revert goes to the most recent snapshot
    assert!(matches!(outcome, EditOutcome::Reverted(_)));
    assert_eq!(control.text, "12");
}

#[test]
fn test_committed_result() {
    let mut field = NumericField::new(FormatConfig::for_locale("de-DE"));
    let mut control = RecordingControl::new("999", 3);
    match run_edit(&mut field, &mut control, "9999", 4) {
        EditOutcome::Committed(result) => {
            assert_eq!(result.text, "9.999");
            assert_eq!(result.cursor, 5);
        }
        other => panic!("Expected commit, got {:?}", other),
    }
}

// ========================================================================
// clear() and default values
// ========================================================================

fn recorded(field: &mut NumericField) -> Rc<RefCell<Vec<ValueEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    field.add_value_change_listener(move |e: ValueEvent| sink.borrow_mut().push(e));
    log
}

#[test]
fn test_clear_shows_default_text_and_notifies() {
    let mut field = NumericField::default();
    field.set_default_value(0.0, "%.2f").unwrap();
    let log = recorded(&mut field);
    let mut control = RecordingControl::new("1,234.5", 7);

    field.clear(&mut control);

    assert_eq!(control.text, "0.00");
    assert_eq!(control.cursor, 4);
    assert_eq!(control.writes, vec![("0.00".to_string(), true)]);
    assert_eq!(*log.borrow(), vec![ValueEvent::Changed(0.0)]);
}

#[test]
fn test_clear_without_default_empties_field() {
    let mut field = NumericField::default();
    let log = recorded(&mut field);
    let mut control = RecordingControl::new("42", 2);

    field.clear(&mut control);

    assert_eq!(control.text, "");
    assert_eq!(*log.borrow(), vec![ValueEvent::Cleared]);
}

#[test]
fn test_default_value_uses_locale_separators() {
    let mut field = NumericField::new(FormatConfig::for_locale("de-DE"));
    field.set_default_value(1500.0, "%,.2f").unwrap();
    assert_eq!(field.default_text(), "1.500,00");
}

#[test]
fn test_invalid_default_pattern_keeps_previous_text() {
    let mut field = NumericField::default();
    field.set_default_value(1.0, "%.1f").unwrap();
    assert_eq!(
        field.set_default_value(1.0, "%d"),
        Err(PatternError::UnsupportedConversion('d'))
    );
    assert_eq!(field.default_text(), "1.0");
}

#[test]
fn test_numeric_value_of_control() {
    let field = NumericField::default();
    assert_eq!(field.numeric_value(&RecordingControl::new("1,234.5", 0)), 1234.5);
    assert!(field.numeric_value(&RecordingControl::new("", 0)).is_nan());
}

// ========================================================================
// Construction from config
// ========================================================================

#[test]
fn test_from_config() {
    let config = FieldConfig {
        locale: "de-CH".to_string(),
        digits_before_decimal: Some(6),
        digits_after_decimal: 3,
        default_value: Some(DefaultValue {
            value: 0.0,
            pattern: "%.3f".to_string(),
        }),
    };
    let field = NumericField::from_config(&config).unwrap();
    assert_eq!(field.config().grouping_separator(), '\'');
    assert_eq!(field.config().digits_before_separator(), Some(6));
    assert_eq!(field.config().digits_after_separator(), 3);
    assert_eq!(field.default_text(), "0.000");
}

#[test]
fn test_from_config_rejects_bad_pattern() {
    let config = FieldConfig {
        default_value: Some(DefaultValue {
            value: 0.0,
            pattern: "zero".to_string(),
        }),
        ..FieldConfig::default()
    };
    assert!(NumericField::from_config(&config).is_err());
}
