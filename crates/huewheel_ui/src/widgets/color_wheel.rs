//! HSV color wheel widget
//!
//! An outer ring picks the hue and an inner square picks saturation and
//! value for that hue. Drawing and picking are delegated to the pure
//! functions in [`crate::wheel`]; this widget caches the geometry for the
//! current size, tracks drags and notifies the host through `on_change`.

use crate::callback::Callback;
use crate::color::Argb;
use crate::constants::DEFAULT_WHEEL_SIDE;
use crate::event::{Event, PointerButton};
use crate::geometry::{Geometry, PointerHit};
use crate::layout::{Bounds, Size};
use crate::renderer::{DrawCommand, Renderer};
use crate::wheel::{self, WheelState};
use crate::widget::{EventResult, Widget};
use crate::widgets::config::WheelConfig;

/// A hue ring around a saturation/value square.
pub struct ColorWheel<M> {
    config: WheelConfig,
    state: WheelState,
    /// Geometry for the last laid-out size
    geometry: Option<Geometry>,
    /// A press landed on the ring or square and has not been released
    dragging: bool,
    /// Called with the new color whenever a pick changes it
    on_change: Callback<Argb, M>,
}

impl<M> ColorWheel<M> {
    /// Create a wheel with the default config and no selection.
    pub fn new() -> Self {
        Self {
            config: WheelConfig::default(),
            state: WheelState::default(),
            geometry: None,
            dragging: false,
            on_change: Callback::none(),
        }
    }

    /// Set the config. Cached geometry is dropped since the ring width may change.
    pub fn config(mut self, config: WheelConfig) -> Self {
        self.config = config;
        self.geometry = None;
        self
    }

    /// Set the initially selected color
    pub fn selected(mut self, color: Argb) -> Self {
        self.set_color(color);
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(Argb) -> M + 'static,
    {
        self.on_change = Callback::new(handler);
        self
    }

    /// Replace the selected color from host code.
    ///
    /// Does not notify `on_change`; the host already knows the value.
    pub fn set_color(&mut self, color: Argb) {
        self.state = self.state.with_color(color);
    }

    pub fn color(&self) -> Argb {
        self.state.color
    }

    pub fn hue(&self) -> f32 {
        self.state.hue
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn wheel_config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Make the cached geometry match `size`, recomputing only on change.
    pub fn resize(&mut self, size: Size) -> Option<&Geometry> {
        let stale = self.geometry.is_none_or(|g| g.size() != size);
        if stale {
            self.geometry = Geometry::new(size, self.config.stroke_width);
            if self.geometry.is_none() {
                log::debug!("ColorWheel: empty size {:?}, nothing to draw", size);
            }
        }
        self.geometry.as_ref()
    }

    /// Draw commands for a widget of `size`, in widget-local coordinates.
    ///
    /// An empty size yields no commands.
    pub fn render(&mut self, size: Size) -> Vec<DrawCommand> {
        self.resize(size);
        match self.geometry {
            Some(geometry) => wheel::render(&self.state, &geometry, &self.config),
            None => Vec::new(),
        }
    }

    /// Apply a pointer position in widget-local coordinates.
    ///
    /// Returns the regions hit and the `on_change` message when the color
    /// changed. Before the first layout this is a no-op.
    pub fn handle_pointer(&mut self, x: f32, y: f32) -> (PointerHit, Option<M>) {
        let Some(geometry) = self.geometry else {
            return (PointerHit::NONE, None);
        };
        let previous = self.state;
        let outcome = wheel::handle_pointer(previous, &geometry, &self.config, x, y);
        self.state = outcome.state;

        let message = if outcome.color_changed(&previous) {
            self.on_change.call(self.state.color)
        } else {
            None
        };
        (outcome.hit, message)
    }
}

impl<M> Default for ColorWheel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> std::fmt::Debug for ColorWheel<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorWheel")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("dragging", &self.dragging)
            .field("on_change", &self.on_change)
            .finish()
    }
}

impl<M: 'static> Widget<M> for ColorWheel<M> {
    fn layout(&mut self, available: Size) -> Size {
        let resolve = |v: f32| if v.is_finite() { v } else { DEFAULT_WHEEL_SIDE };
        let size = Size::new(resolve(available.width), resolve(available.height));
        self.resize(size);
        size
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let size = bounds.size();
        // draw() can't refresh the cache, so build a throwaway geometry on a mismatch
        let geometry = match self.geometry {
            Some(g) if g.size() == size => g,
            _ => match Geometry::new(size, self.config.stroke_width) {
                Some(g) => g,
                None => return,
            },
        };
        for command in wheel::render(&self.state, &geometry, &self.config) {
            renderer.push(command.translated(bounds.x, bounds.y));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        self.resize(bounds.size());
        let position = event.position();
        let (x, y) = (position.x - bounds.x, position.y - bounds.y);

        match event {
            Event::PointerPressed {
                button: PointerButton::Primary,
                ..
            } => {
                let (hit, message) = self.handle_pointer(x, y);
                if hit.any() {
                    log::debug!("ColorWheel: started drag at ({:.1}, {:.1})", x, y);
                    self.dragging = true;
                }
                message.into()
            }

            Event::PointerMoved { .. } if self.dragging => self.handle_pointer(x, y).1.into(),

            Event::PointerReleased {
                button: PointerButton::Primary,
                ..
            } if self.dragging => {
                log::debug!("ColorWheel: stopped drag, color={}", self.state.color);
                self.dragging = false;
                self.handle_pointer(x, y).1.into()
            }

            _ => EventResult::None,
        }
    }

    fn has_active_drag(&self) -> bool {
        self.dragging
    }
}

/// Helper function to create a color wheel.
pub fn color_wheel<M>() -> ColorWheel<M> {
    ColorWheel::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsv::Hsv;
    use crate::layout::Point;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Changed(Argb),
    }

    fn laid_out() -> ColorWheel<Message> {
        let mut wheel = ColorWheel::new().on_change(Message::Changed);
        wheel.layout(Size::square(400.0));
        wheel
    }

    #[test]
    fn test_layout_caches_geometry() {
        let mut wheel = laid_out();
        let first = *wheel.geometry().unwrap();
        assert_eq!(first.outer_radius(), 175.0);
        wheel.resize(Size::square(400.0));
        assert_eq!(*wheel.geometry().unwrap(), first);
        wheel.resize(Size::square(200.0));
        assert_eq!(wheel.geometry().unwrap().outer_radius(), 75.0);
    }

    #[test]
    fn test_unbounded_layout_uses_default_side() {
        let mut wheel: ColorWheel<Message> = ColorWheel::new();
        let size = wheel.layout(Size::new(f32::INFINITY, f32::INFINITY));
        assert_eq!(size, Size::square(DEFAULT_WHEEL_SIDE));
    }

    #[test]
    fn test_zero_size_renders_nothing() {
        let mut wheel: ColorWheel<Message> = ColorWheel::new();
        assert!(wheel.render(Size::ZERO).is_empty());
        assert!(wheel.geometry().is_none());

        let mut renderer = Renderer::new();
        wheel.draw(&mut renderer, Bounds::new(10.0, 10.0, 0.0, 0.0));
        assert!(renderer.is_empty());
    }

    #[test]
    fn test_pointer_before_layout_is_noop() {
        let mut wheel: ColorWheel<Message> = ColorWheel::new().on_change(Message::Changed);
        let (hit, message) = wheel.handle_pointer(350.0, 200.0);
        assert_eq!(hit, PointerHit::NONE);
        assert_eq!(message, None);
        assert_eq!(wheel.color(), Argb::TRANSPARENT);
    }

    #[test]
    fn test_ring_pick_notifies() {
        let mut wheel = laid_out();
        let (hit, message) = wheel.handle_pointer(350.0, 200.0);
        assert!(hit.ring);
        assert_eq!(message, Some(Message::Changed(Argb::RED)));
        assert_eq!(wheel.color(), Argb::RED);
    }

    #[test]
    fn test_unchanged_color_does_not_notify() {
        let mut wheel = laid_out();
        wheel.handle_pointer(350.0, 200.0);
        let (_, message) = wheel.handle_pointer(351.0, 200.0);
        assert_eq!(message, None);
    }

    #[test]
    fn test_set_color_syncs_hue_without_notifying() {
        let mut wheel = laid_out();
        wheel.set_color(Argb::GREEN);
        assert_eq!(wheel.color(), Argb::GREEN);
        assert!((wheel.hue() - 120.0).abs() < 0.001);

        // the square now picks within green
        let (_, message) = wheel.handle_pointer(250.0, 150.0);
        let Some(Message::Changed(color)) = message else {
            panic!("expected a color change");
        };
        assert!((Hsv::from_argb(color).hue - 120.0).abs() < 2.0);
    }

    #[test]
    fn test_press_drag_release() {
        let mut wheel = laid_out();
        let bounds = Bounds::new(100.0, 50.0, 400.0, 400.0);

        // press on the ring to the right of center, in host coordinates
        let result = wheel.on_event(&Event::press(450.0, 250.0), bounds);
        assert_eq!(result, EventResult::Message(Message::Changed(Argb::RED)));
        assert!(wheel.has_active_drag());

        // drag to the left side of the ring
        let result = wheel.on_event(&Event::moved(150.0, 250.0), bounds);
        assert_eq!(result, EventResult::Message(Message::Changed(Argb::CYAN)));

        // release in the square center picks from the cyan hue
        let result = wheel.on_event(&Event::release(300.0, 250.0), bounds);
        assert!(result.is_message());
        assert!(!wheel.has_active_drag());
        let hsv = Hsv::from_argb(wheel.color());
        assert!((hsv.hue - 180.0).abs() < 2.0);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut wheel = laid_out();
        let bounds = Bounds::from_size(Size::square(400.0));
        let result = wheel.on_event(&Event::moved(350.0, 200.0), bounds);
        assert_eq!(result, EventResult::None);
        assert_eq!(wheel.color(), Argb::TRANSPARENT);
    }

    #[test]
    fn test_press_outside_does_not_start_drag() {
        let mut wheel = laid_out();
        let bounds = Bounds::from_size(Size::square(400.0));
        let result = wheel.on_event(&Event::press(2.0, 2.0), bounds);
        assert_eq!(result, EventResult::None);
        assert!(!wheel.has_active_drag());
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut wheel = laid_out();
        let bounds = Bounds::from_size(Size::square(400.0));
        let event = Event::PointerPressed {
            button: PointerButton::Secondary,
            position: Point::new(350.0, 200.0),
        };
        assert_eq!(wheel.on_event(&event, bounds), EventResult::None);
        assert!(!wheel.has_active_drag());
    }

    #[test]
    fn test_draw_translates_to_bounds() {
        let wheel = laid_out();
        let mut renderer = Renderer::new();
        wheel.draw(&mut renderer, Bounds::new(100.0, 50.0, 400.0, 400.0));
        match &renderer.commands()[0] {
            DrawCommand::SweepRing { center, .. } => assert_eq!(*center, Point::new(300.0, 250.0)),
            other => panic!("expected ring, got {:?}", other),
        }
    }
}
