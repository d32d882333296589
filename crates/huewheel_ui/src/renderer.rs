use crate::color::Argb;
use crate::layout::Point;

/// A draw command produced by a widget.
///
/// Commands are toolkit-independent; a host turns them into calls on its own
/// canvas API.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A circle stroked with an angular gradient.
    ///
    /// `stops` are spread evenly clockwise starting at the positive x axis,
    /// the first at angle 0 and the last at a full turn.
    SweepRing {
        center: Point,
        radius: f32,
        width: f32,
        stops: Vec<Argb>,
    },
    /// A straight line stroked with a linear gradient from `start` to `end`.
    ///
    /// `stops` are spread evenly along the line.
    GradientLine {
        start: Point,
        end: Point,
        width: f32,
        stops: Vec<Argb>,
    },
}

impl DrawCommand {
    /// The same command moved by `(dx, dy)`.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        let shift = |p: Point| Point::new(p.x + dx, p.y + dy);
        match self {
            DrawCommand::SweepRing {
                center,
                radius,
                width,
                stops,
            } => DrawCommand::SweepRing {
                center: shift(center),
                radius,
                width,
                stops,
            },
            DrawCommand::GradientLine {
                start,
                end,
                width,
                stops,
            } => DrawCommand::GradientLine {
                start: shift(start),
                end: shift(end),
                width,
                stops,
            },
        }
    }
}

/// Records draw commands for one frame.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke a circle of `radius` around `center` with a sweep gradient.
    pub fn stroke_sweep_ring(&mut self, center: Point, radius: f32, width: f32, stops: &[Argb]) {
        if stops.is_empty() || width <= 0.0 {
            return;
        }
        self.draw_commands.push(DrawCommand::SweepRing {
            center,
            radius,
            width,
            stops: stops.to_vec(),
        });
    }

    /// Stroke a line with a linear gradient.
    pub fn gradient_line(&mut self, start: Point, end: Point, width: f32, stops: Vec<Argb>) {
        if stops.is_empty() || width <= 0.0 {
            return;
        }
        self.draw_commands.push(DrawCommand::GradientLine {
            start,
            end,
            width,
            stops,
        });
    }

    /// Append an already built command.
    pub fn push(&mut self, command: DrawCommand) {
        self.draw_commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    pub fn is_empty(&self) -> bool {
        self.draw_commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.draw_commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut renderer = Renderer::new();
        renderer.stroke_sweep_ring(Point::ORIGIN, 10.0, 2.0, &[Argb::RED, Argb::BLUE]);
        renderer.gradient_line(Point::ORIGIN, Point::new(5.0, 0.0), 1.0, vec![Argb::WHITE]);
        let commands = renderer.into_commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::SweepRing { radius, .. } if radius == 10.0));
        assert!(matches!(commands[1], DrawCommand::GradientLine { .. }));
    }

    #[test]
    fn test_translated_moves_points_only() {
        let line = DrawCommand::GradientLine {
            start: Point::new(1.0, 2.0),
            end: Point::new(3.0, 2.0),
            width: 2.0,
            stops: vec![Argb::RED],
        };
        assert_eq!(
            line.translated(10.0, 20.0),
            DrawCommand::GradientLine {
                start: Point::new(11.0, 22.0),
                end: Point::new(13.0, 22.0),
                width: 2.0,
                stops: vec![Argb::RED],
            }
        );
    }

    #[test]
    fn test_skips_degenerate_commands() {
        let mut renderer = Renderer::new();
        renderer.stroke_sweep_ring(Point::ORIGIN, 10.0, 0.0, &[Argb::RED]);
        renderer.gradient_line(Point::ORIGIN, Point::new(5.0, 0.0), 1.0, Vec::new());
        assert!(renderer.is_empty());
    }
}
