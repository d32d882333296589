//! huewheel_ui - an HSV color wheel widget
//!
//! A hue ring around a saturation/value square. The behavior lives in two
//! toolkit-independent functions, [`wheel::render`] and
//! [`wheel::handle_pointer`]; [`ColorWheel`] wraps them in the callback-based
//! [`Widget`] contract so a host toolkit only has to replay draw commands and
//! forward pointer events.

mod callback;
mod color;
mod constants;
mod event;
mod geometry;
mod gradient;
mod hsv;
mod layout;
mod renderer;
pub mod wheel;
mod widget;
mod widgets;

pub use callback::Callback;
pub use color::{Argb, ColorParseError};
pub use constants::*;
pub use event::{Event, PointerButton};
pub use geometry::{Geometry, PointerHit};
pub use gradient::{interpolate, AnchorSequence, EmptyAnchorSequence, DEFAULT_ANCHORS};
pub use hsv::{hsv_to_argb, hue_of, Hsv, MAX_HUE};
pub use layout::{Bounds, Point, Size};
pub use renderer::{DrawCommand, Renderer};
pub use wheel::{PointerOutcome, WheelState};
pub use widget::{EventResult, Widget};
pub use widgets::{color_wheel, ColorWheel, SquareMapping, WheelConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::Argb;
    pub use crate::event::{Event, PointerButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::renderer::{DrawCommand, Renderer};
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{color_wheel, ColorWheel, SquareMapping, WheelConfig};
}
