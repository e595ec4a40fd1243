//! Edit-cycle state machine binding the formatting pipeline to a text control.
//!
//! A [`NumericField`] sits between a host [`TextControl`] and the pipeline in
//! [`crate::format`]. The host calls [`NumericField::before_edit`] right before
//! it mutates its text and [`NumericField::after_edit`] right after. Each cycle
//! ends in exactly one of:
//!
//! - **Commit**: formatted text and remapped cursor are written back, listeners
//!   get the new value (or "cleared" when formatting produced nothing)
//! - **Revert**: the snapshot is written back, listeners are not notified
//! - **Cleared**: the host text became empty; the default text (if any) is
//!   written and listeners get "cleared"
//!
//! All write-backs go through a [`SuppressGuard`] so they don't start a new cycle.

mod control;
mod listener;

pub use control::{SuppressGuard, TextControl};
pub use listener::{ListenerRegistry, ValueEvent, ValueListener};

use crate::config::{ConfigError, FieldConfig};
use crate::format::{
    extract_value, process_edit, render_pattern, EditSnapshot, FormatConfig, FormattedResult,
    PatternError, Rejection,
};
use crate::util::text::char_len;

/// Where the field is in the current edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// No edit in flight
    Idle,
    /// Snapshot taken, waiting for the host to apply its edit
    Capturing,
    /// Reconciling/validating/formatting the host's edit
    Processing,
}

#[derive(Debug, Clone, Default)]
enum CycleState {
    #[default]
    Idle,
    Capturing(EditSnapshot),
    Processing,
}

/// How an edit cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Formatted result was written to the control
    Committed(FormattedResult),
    /// Edit was rejected and the snapshot restored
    Reverted(Rejection),
    /// Control became empty
    Cleared,
    /// `after_edit` without a preceding `before_edit`
    Ignored,
}

/// Live reformatting engine for one numeric input field.
#[derive(Debug, Default)]
pub struct NumericField {
    config: FormatConfig,
    default_text: String,
    listeners: ListenerRegistry,
    state: CycleState,
}

impl NumericField {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a field from a loaded [`FieldConfig`].
    pub fn from_config(config: &FieldConfig) -> Result<Self, ConfigError> {
        let format = FormatConfig::for_locale(&config.locale)
            .with_digits_before(config.digits_before_decimal)
            .with_digits_after(config.digits_after_decimal);
        let mut field = Self::new(format);
        if let Some(default) = &config.default_value {
            field.set_default_value(default.value, &default.pattern)?;
        }
        Ok(field)
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn phase(&self) -> EditPhase {
        match self.state {
            CycleState::Idle => EditPhase::Idle,
            CycleState::Capturing(_) => EditPhase::Capturing,
            CycleState::Processing => EditPhase::Processing,
        }
    }

    /// Switch separators to `locale`; takes effect on the next edit.
    pub fn set_locale(&mut self, locale: &str) {
        self.config = self.config.reload(locale);
    }

    /// Limit integer digits (`None` = unbounded)
    pub fn set_digits_before_decimal(&mut self, limit: Option<usize>) {
        self.config = self.config.with_digits_before(limit);
    }

    pub fn set_digits_after_decimal(&mut self, limit: usize) {
        self.config = self.config.with_digits_after(limit);
    }

    /// Precompute the text shown when the field is cleared.
    pub fn set_default_value(&mut self, value: f64, pattern: &str) -> Result<(), PatternError> {
        self.default_text = render_pattern(pattern, value, &self.config)?;
        tracing::debug!("Default text set to {:?}", self.default_text);
        Ok(())
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    pub fn add_value_change_listener(&mut self, listener: impl ValueListener + 'static) {
        self.listeners.add(Box::new(listener));
    }

    pub fn remove_all_value_change_listeners(&mut self) {
        self.listeners.remove_all();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Numeric value of the control's current text (`NaN` if unparseable)
    pub fn numeric_value<C: TextControl + ?Sized>(&self, control: &C) -> f64 {
        extract_value(&control.text(), &self.config)
    }

    /// Reset the control to the default text and notify listeners.
    pub fn clear<C: TextControl + ?Sized>(&mut self, control: &mut C) {
        SuppressGuard::new(control).write(&self.default_text, char_len(&self.default_text));
        self.state = CycleState::Idle;

        if self.default_text.is_empty() {
            self.listeners.notify(ValueEvent::Cleared);
        } else {
            let value = extract_value(&self.default_text, &self.config);
            self.listeners.notify(ValueEvent::Changed(value));
        }
    }

    /// Snapshot the control right before the host applies an edit.
    pub fn before_edit<C: TextControl + ?Sized>(&mut self, control: &C) {
        let snapshot = EditSnapshot::new(control.text(), control.cursor());
        tracing::trace!(
            "Capturing edit: {:?} cursor={}",
            snapshot.text,
            snapshot.cursor
        );
        self.state = CycleState::Capturing(snapshot);
    }

    /// Drop the snapshot when the host ended up not changing anything.
    pub fn cancel_edit(&mut self) {
        self.state = CycleState::Idle;
    }

    /// Process the edit the host just applied.
    pub fn after_edit<C: TextControl + ?Sized>(&mut self, control: &mut C) -> EditOutcome {
        let snapshot = match std::mem::replace(&mut self.state, CycleState::Processing) {
            CycleState::Capturing(snapshot) => snapshot,
            other => {
                tracing::warn!("after_edit called without a captured snapshot; ignoring");
                self.state = other;
                return EditOutcome::Ignored;
            }
        };

        let outcome = self.process(control, &snapshot);
        self.state = CycleState::Idle;
        outcome
    }

    fn process<C: TextControl + ?Sized>(
        &mut self,
        control: &mut C,
        snapshot: &EditSnapshot,
    ) -> EditOutcome {
        let raw = control.text().into_owned();

        if raw.is_empty() {
            if !self.default_text.is_empty() {
                SuppressGuard::new(control)
                    .write(&self.default_text, char_len(&self.default_text));
            }
            tracing::debug!("Field cleared");
            self.listeners.notify(ValueEvent::Cleared);
            return EditOutcome::Cleared;
        }

        match process_edit(&raw, snapshot, control.cursor(), &self.config) {
            Ok(result) => {
                SuppressGuard::new(control).write(&result.text, result.cursor);
                tracing::debug!(
                    "Committed {:?} -> {:?} cursor={}",
                    raw,
                    result.text,
                    result.cursor
                );

                if result.text.is_empty() {
                    self.listeners.notify(ValueEvent::Cleared);
                } else {
                    let value = extract_value(&result.text, &self.config);
                    self.listeners.notify(ValueEvent::Changed(value));
                }
                EditOutcome::Committed(result)
            }
            Err(rejection) => {
                SuppressGuard::new(control).write(&snapshot.text, snapshot.cursor);
                tracing::debug!("Reverted {:?}: {}", raw, rejection);
                EditOutcome::Reverted(rejection)
            }
        }
    }
}
