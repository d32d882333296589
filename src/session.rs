//! Scripted interaction with a color wheel.
//!
//! A session owns one `ColorWheel`, feeds it pointer events in canvas
//! coordinates and applies the messages it emits, the same way an
//! application's update loop would.

use huewheel_ui::prelude::*;

use crate::config::AppConfig;

/// Messages emitted by the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ColorChanged(Argb),
}

/// A wheel laid out on a canvas plus the colors it has produced.
#[derive(Debug)]
pub struct Session {
    wheel: ColorWheel<Message>,
    bounds: Bounds,
    history: Vec<Argb>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let mut wheel = ColorWheel::new()
            .config(config.wheel.clone())
            .on_change(Message::ColorChanged);
        if let Some(color) = config.initial_color {
            wheel.set_color(color);
        }
        let size = wheel.layout(config.canvas.size());

        Self {
            wheel,
            bounds: Bounds::from_size(size),
            history: Vec::new(),
        }
    }

    /// Press and release at `(x, y)`. Returns the color if it changed.
    pub fn tap(&mut self, x: f32, y: f32) -> Option<Argb> {
        let before = self.history.len();
        for event in [Event::press(x, y), Event::release(x, y)] {
            if let EventResult::Message(message) = self.wheel.on_event(&event, self.bounds) {
                self.update(message);
            }
        }
        if self.history.len() > before {
            self.history.last().copied()
        } else {
            log::debug!("Tap at ({:.1}, {:.1}) missed the wheel", x, y);
            None
        }
    }

    /// Press at `from`, drag through `path`, release at the last point.
    pub fn drag(&mut self, from: (f32, f32), path: &[(f32, f32)]) {
        let mut events = vec![Event::press(from.0, from.1)];
        events.extend(path.iter().map(|&(x, y)| Event::moved(x, y)));
        let end = path.last().copied().unwrap_or(from);
        events.push(Event::release(end.0, end.1));

        for event in events {
            if let EventResult::Message(message) = self.wheel.on_event(&event, self.bounds) {
                self.update(message);
            }
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ColorChanged(color) => {
                log::info!("Selected color {} (hue {:.1})", color, self.wheel.hue());
                self.history.push(color);
            }
        }
    }

    /// Draw commands for the whole canvas.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut renderer = Renderer::new();
        self.wheel.draw(&mut renderer, self.bounds);
        renderer.into_commands()
    }

    pub fn color(&self) -> Argb {
        self.wheel.color()
    }

    /// Every color the wheel reported, oldest first.
    pub fn history(&self) -> &[Argb] {
        &self.history
    }

    pub fn wheel(&self) -> &ColorWheel<Message> {
        &self.wheel
    }
}
