use crate::layout::Point;

/// Pointer events a widget can respond to, in the host's coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer button pressed (or finger down).
    PointerPressed {
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved.
    PointerMoved { position: Point },
    /// Pointer button released (or finger up).
    PointerReleased {
        button: PointerButton,
        position: Point,
    },
}

impl Event {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Event::PointerPressed { position, .. }
            | Event::PointerMoved { position }
            | Event::PointerReleased { position, .. } => *position,
        }
    }

    /// Primary press at `(x, y)`.
    pub fn press(x: f32, y: f32) -> Self {
        Event::PointerPressed {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Primary release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self {
        Event::PointerReleased {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Move to `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Event::PointerMoved {
            position: Point::new(x, y),
        }
    }
}

/// Pointer buttons. Touch input reports `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}
