//! Single-line text input used as the host control for numeric fields.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: buffer traits over char offsets
//! - [`StringBuffer`]: `String`-backed buffer
//! - [`TextInput`]: buffer + selection + constraints, implements
//!   [`crate::field::TextControl`]
//! - [`EditConstraints`]: which characters an input accepts
//! - [`TextEditMsg`]: editing operations
//! - [`EditSession`]: runs the field's edit cycle around each message
//!
//! # Example
//!
//! ```
//! use numeric_field::editable::{EditSession, TextEditMsg};
//! use numeric_field::field::NumericField;
//!
//! let mut session = EditSession::new(NumericField::default());
//! session.type_str("1234.5");
//! assert_eq!(session.text(), "1,234.5");
//!
//! session.handle(TextEditMsg::DeleteBackward);
//! assert_eq!(session.text(), "1,234.");
//! ```

mod buffer;
mod constraints;
mod input;
mod messages;
mod selection;
mod session;

pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::{CharFilter, EditConstraints};
pub use input::TextInput;
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use session::EditSession;
