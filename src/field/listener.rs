//! Value-change listeners.

/// Notification sent to listeners after an edit cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueEvent {
    /// Field holds a value (`NaN` if the text does not parse)
    Changed(f64),
    /// Field was emptied
    Cleared,
}

/// Observer of a field's numeric value.
pub trait ValueListener {
    fn on_changed(&mut self, value: f64);
    fn on_cleared(&mut self);
}

impl<F: FnMut(ValueEvent)> ValueListener for F {
    fn on_changed(&mut self, value: f64) {
        self(ValueEvent::Changed(value))
    }

    fn on_cleared(&mut self) {
        self(ValueEvent::Cleared)
    }
}

/// Ordered listener list; notification order is registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn ValueListener>>,
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl ListenerRegistry {
    pub fn add(&mut self, listener: Box<dyn ValueListener>) {
        self.listeners.push(listener);
    }

    pub fn remove_all(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&mut self, event: ValueEvent) {
        for listener in &mut self.listeners {
            match event {
                ValueEvent::Changed(value) => listener.on_changed(value),
                ValueEvent::Cleared => listener.on_cleared(),
            }
        }
    }
}
