//! Toolkit-independent core of the color wheel.
//!
//! Two pure functions carry all of the widget's behavior:
//! [`render`] turns a state and geometry into draw commands, and
//! [`handle_pointer`] turns a state and a pointer position into a new state.
//! The [`ColorWheel`](crate::ColorWheel) widget only adds caching and event
//! plumbing around them.

use crate::color::Argb;
use crate::geometry::{Geometry, PointerHit};
use crate::hsv::{hsv_to_argb, Hsv};
use crate::layout::Point;
use crate::renderer::{DrawCommand, Renderer};
use crate::widgets::WheelConfig;

/// The current selection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelState {
    /// Hue in degrees, from the last ring pick
    pub hue: f32,
    /// Selected color
    pub color: Argb,
}

impl WheelState {
    pub fn new(hue: f32, color: Argb) -> Self {
        Self { hue, color }
    }

    /// State for a color set by the host.
    ///
    /// The hue follows the color when it has one; for grays the previous
    /// hue is kept so the square keeps showing it.
    pub fn with_color(self, color: Argb) -> Self {
        let hsv = Hsv::from_argb(color);
        let hue = if hsv.is_chromatic() { hsv.hue } else { self.hue };
        Self { hue, color }
    }
}

/// Result of one pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOutcome {
    pub state: WheelState,
    pub hit: PointerHit,
}

impl PointerOutcome {
    /// True when the selected color differs from `previous`.
    pub fn color_changed(&self, previous: &WheelState) -> bool {
        self.state.color != previous.color
    }
}

/// Apply a pointer position in widget-local coordinates.
///
/// The ring and square checks are independent. When both hit, the ring is
/// applied first and the square then uses the new hue.
pub fn handle_pointer(
    state: WheelState,
    geometry: &Geometry,
    config: &WheelConfig,
    x: f32,
    y: f32,
) -> PointerOutcome {
    let hit = geometry.classify(x, y);
    let mut next = state;

    if hit.ring {
        let unit = geometry.unit_angle(x, y);
        let color = config.anchors.interpolate(unit);
        next.color = color;
        next.hue = Hsv::from_argb(color).hue;
        log::debug!(
            "Ring pick at ({:.1}, {:.1}): unit={:.4}, color={}, hue={:.1}",
            x,
            y,
            unit,
            color,
            next.hue
        );
    }

    if hit.square {
        let square = geometry.square_bounds();
        let (saturation, value) =
            config
                .square_mapping
                .saturation_value(x - square.x, y - square.y, square.width);
        next.color = hsv_to_argb(next.hue, saturation, value);
        log::debug!(
            "Square pick at ({:.1}, {:.1}): s={:.3}, v={:.3}, color={}",
            x,
            y,
            saturation,
            value,
            next.color
        );
    }

    PointerOutcome { state: next, hit }
}

/// Draw the hue ring and the SV square for the current hue.
pub fn render(state: &WheelState, geometry: &Geometry, config: &WheelConfig) -> Vec<DrawCommand> {
    let mut renderer = Renderer::new();
    draw(&mut renderer, state, geometry, config);
    renderer.into_commands()
}

/// Record the wheel's draw commands into an existing renderer.
pub fn draw(
    renderer: &mut Renderer,
    state: &WheelState,
    geometry: &Geometry,
    config: &WheelConfig,
) {
    let before = renderer.commands().len();

    renderer.stroke_sweep_ring(
        geometry.center(),
        geometry.ring_radius(),
        geometry.ring_width(),
        config.anchors.colors(),
    );
    draw_sv_square(renderer, state.hue, geometry, config);

    log::trace!(
        "Wheel draw: {} commands at hue {:.1}",
        renderer.commands().len() - before,
        state.hue
    );
}

/// One gradient line per row; each row samples evenly spaced columns
/// through the same mapping pointer picks use.
fn draw_sv_square(renderer: &mut Renderer, hue: f32, geometry: &Geometry, config: &WheelConfig) {
    let square = geometry.square_bounds();
    let side = square.width;
    if side <= 0.0 {
        return;
    }

    let divisions = config.effective_divisions();
    let step = config.effective_row_step();
    let column_width = side / (divisions - 1) as f32;

    let mut offset_y = 0.0;
    while offset_y < side {
        let stops = (0..divisions)
            .map(|i| {
                let (s, v) = config.square_mapping.saturation_value(
                    i as f32 * column_width,
                    offset_y,
                    side,
                );
                hsv_to_argb(hue, s, v)
            })
            .collect();

        let y = square.y + offset_y;
        renderer.gradient_line(
            Point::new(square.x, y),
            Point::new(square.right(), y),
            config.sv_line_width,
            stops,
        );
        offset_y += step;
    }
}
