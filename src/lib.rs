//! Numeric field - live reformatting for numeric and currency inputs
//!
//! On every edit the field's raw text is rewritten into a locale-grouped,
//! decimal-limited form while the cursor stays next to what was typed.
//!
//! - [`format`]: the per-keystroke pipeline (reconcile, validate, format,
//!   cursor mapping, value extraction)
//! - [`field`]: the edit-cycle state machine and listener fan-out
//! - [`editable`]: an in-memory text input to drive the field with

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod format;
pub mod locale;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::FieldConfig;
pub use field::{EditOutcome, NumericField, TextControl, ValueEvent, ValueListener};
pub use format::FormatConfig;
