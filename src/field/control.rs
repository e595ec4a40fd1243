//! Host text-control abstraction and the scoped write guard.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

/// The editable text control a [`super::NumericField`] is attached to.
///
/// Offsets are character offsets. The host is expected to call
/// [`super::NumericField::before_edit`] / [`super::NumericField::after_edit`]
/// around every text mutation, except while notifications are suspended.
pub trait TextControl {
    /// Current text
    fn text(&self) -> Cow<'_, str>;

    /// Current cursor offset
    fn cursor(&self) -> usize;

    /// Replace the whole text
    fn set_text(&mut self, text: &str);

    /// Move the cursor (hosts clamp to the text length)
    fn set_cursor(&mut self, offset: usize);

    /// Stop issuing change hooks until the matching resume
    fn suspend_change_notifications(&mut self);

    /// Re-arm change hooks
    fn resume_change_notifications(&mut self);
}

/// Suspends a control's change notifications for as long as it lives.
///
/// Writes made through the guard can't start a new edit cycle. Notifications
/// are resumed on drop, including on early returns.
pub struct SuppressGuard<'a, C: TextControl + ?Sized> {
    control: &'a mut C,
}

impl<'a, C: TextControl + ?Sized> SuppressGuard<'a, C> {
    pub fn new(control: &'a mut C) -> Self {
        control.suspend_change_notifications();
        Self { control }
    }

    /// Write text and cursor in one go
    pub fn write(&mut self, text: &str, cursor: usize) {
        self.control.set_text(text);
        self.control.set_cursor(cursor);
    }
}

impl<C: TextControl + ?Sized> Deref for SuppressGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.control
    }
}

impl<C: TextControl + ?Sized> DerefMut for SuppressGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.control
    }
}

impl<C: TextControl + ?Sized> Drop for SuppressGuard<'_, C> {
    fn drop(&mut self) {
        self.control.resume_change_notifications();
    }
}
