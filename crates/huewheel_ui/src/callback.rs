//! Callback abstraction for widget observers
//!
//! Widgets report changes to their host by mapping a value into the host's
//! message type. `Callback<T, M>` wraps the optional `Box<dyn Fn(T) -> M>`
//! so widgets don't repeat that pattern.
//!
//! # Examples
//!
//! ```ignore
//! use huewheel_ui::{Argb, ColorWheel};
//!
//! enum Message {
//!     ColorChanged(Argb),
//! }
//!
//! let wheel = ColorWheel::new().on_change(Message::ColorChanged);
//! ```

use std::fmt;

/// An optional handler turning a `T` into a message `M`.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` when no handler is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
