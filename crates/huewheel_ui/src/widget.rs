//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// What a widget produced while handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// Nothing for the host to act on
    None,
    /// A message for the host's update loop
    Message(M),
}

impl<M> EventResult<M> {
    pub fn is_message(&self) -> bool {
        matches!(self, EventResult::Message(_))
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(message: Option<M>) -> Self {
        match message {
            Some(m) => EventResult::Message(m),
            None => EventResult::None,
        }
    }
}

/// The contract between a widget and its host toolkit.
///
/// The host lays the widget out, asks it to draw into a [`Renderer`] at the
/// resulting bounds, and forwards pointer events together with those bounds.
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }

    /// Whether a drag started on this widget is still in progress
    fn has_active_drag(&self) -> bool {
        false
    }
}
