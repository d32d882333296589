//! Software rasterization of wheel draw commands.
//!
//! The widget only emits [`DrawCommand`]s. This module plays the role of a
//! host canvas: it replays them into a `tiny_skia::Pixmap` and exports PNGs
//! through the `image` crate.

use std::f32::consts::TAU;
use std::path::Path;

use huewheel_ui::{Argb, DrawCommand, Point, interpolate};
use tiny_skia::{
    Color, FillRule, GradientStop, LineCap, LinearGradient, Paint, PathBuilder, Pixmap,
    SpreadMode, Stroke, Transform,
};

use crate::error::{HostError, Result};

/// Wedges used to approximate a sweep gradient.
pub const RING_SEGMENTS: usize = 360;

/// Extra angle added to each wedge so anti-aliased edges don't leave seams.
const SEGMENT_OVERLAP: f32 = 0.002;

/// Render commands onto a fresh canvas, optionally filled with `background`.
pub fn rasterize(
    commands: &[DrawCommand],
    width: u32,
    height: u32,
    background: Option<Argb>,
) -> Result<Pixmap> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(HostError::InvalidCanvas { width, height })?;
    if let Some(color) = background {
        pixmap.fill(to_skia(color));
    }
    for command in commands {
        draw_command(&mut pixmap, command);
    }
    log::debug!(
        "Rasterized {} commands onto {}x{} canvas",
        commands.len(),
        width,
        height
    );
    Ok(pixmap)
}

/// Replay a single command.
pub fn draw_command(pixmap: &mut Pixmap, command: &DrawCommand) {
    match command {
        DrawCommand::SweepRing {
            center,
            radius,
            width,
            stops,
        } => fill_sweep_ring(pixmap, *center, *radius, *width, stops),
        DrawCommand::GradientLine {
            start,
            end,
            width,
            stops,
        } => stroke_gradient_line(pixmap, *start, *end, *width, stops),
    }
}

/// Approximate an angular gradient with solid wedges sampled at their mid angle.
fn fill_sweep_ring(pixmap: &mut Pixmap, center: Point, radius: f32, width: f32, stops: &[Argb]) {
    let outer = radius + width / 2.0;
    let inner = (radius - width / 2.0).max(0.0);
    let mut paint = Paint {
        anti_alias: true,
        ..Paint::default()
    };

    for k in 0..RING_SEGMENTS {
        let start = k as f32 / RING_SEGMENTS as f32;
        let end = (k + 1) as f32 / RING_SEGMENTS as f32;
        let a0 = start * TAU;
        let a1 = end * TAU + SEGMENT_OVERLAP;

        let at = |r: f32, a: f32| (center.x + r * a.cos(), center.y + r * a.sin());
        let mut pb = PathBuilder::new();
        let (x, y) = at(outer, a0);
        pb.move_to(x, y);
        let (x, y) = at(outer, a1);
        pb.line_to(x, y);
        let (x, y) = at(inner, a1);
        pb.line_to(x, y);
        let (x, y) = at(inner, a0);
        pb.line_to(x, y);
        pb.close();

        let Some(path) = pb.finish() else {
            continue;
        };
        let [r, g, b, a] = interpolate(stops, (start + end) / 2.0).to_rgba8();
        paint.set_color_rgba8(r, g, b, a);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn stroke_gradient_line(pixmap: &mut Pixmap, start: Point, end: Point, width: f32, stops: &[Argb]) {
    let mut pb = PathBuilder::new();
    pb.move_to(start.x, start.y);
    pb.line_to(end.x, end.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint {
        anti_alias: true,
        ..Paint::default()
    };
    match linear_shader(start, end, stops) {
        Some(shader) => paint.shader = shader,
        None => {
            let Some(first) = stops.first() else {
                return;
            };
            paint.set_color(to_skia(*first));
        }
    }

    let stroke = Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

/// Evenly spaced gradient; `None` when a solid color should be used instead.
fn linear_shader(start: Point, end: Point, stops: &[Argb]) -> Option<tiny_skia::Shader<'static>> {
    if stops.len() < 2 {
        return None;
    }
    let last = (stops.len() - 1) as f32;
    let gradient_stops = stops
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop::new(i as f32 / last, to_skia(*color)))
        .collect();
    LinearGradient::new(
        tiny_skia::Point::from_xy(start.x, start.y),
        tiny_skia::Point::from_xy(end.x, end.y),
        gradient_stops,
        SpreadMode::Pad,
        Transform::identity(),
    )
}

fn to_skia(color: Argb) -> Color {
    let [r, g, b, a] = color.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}

/// Straight-alpha RGBA copy of a pixmap.
pub fn to_rgba_image(pixmap: &Pixmap) -> image::RgbaImage {
    image::RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let rgba = pixmap
            .pixel(x, y)
            .map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .unwrap_or([0, 0, 0, 0]);
        image::Rgba(rgba)
    })
}

/// Write the pixmap as a PNG file.
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    to_rgba_image(pixmap).save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Wrote {}x{} PNG to {:?}", pixmap.width(), pixmap.height(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_ui::{ColorWheel, Size};

    fn pixel(image: &image::RgbaImage, x: u32, y: u32) -> [u8; 4] {
        image.get_pixel(x, y).0
    }

    fn wheel_image(hue_color: Argb) -> image::RgbaImage {
        let mut wheel: ColorWheel<()> = ColorWheel::new().selected(hue_color);
        let commands = wheel.render(Size::square(400.0));
        let pixmap = rasterize(&commands, 400, 400, None).unwrap();
        to_rgba_image(&pixmap)
    }

    #[test]
    fn test_zero_canvas_is_error() {
        let err = rasterize(&[], 0, 10, None).unwrap_err();
        assert!(matches!(
            err,
            HostError::InvalidCanvas {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_background_fill() {
        let pixmap = rasterize(&[], 4, 4, Some(Argb::rgb(10, 20, 30))).unwrap();
        assert_eq!(pixel(&to_rgba_image(&pixmap), 1, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn test_ring_colors() {
        let image = wheel_image(Argb::RED);

        // right of center, middle of the ring band: red
        let [r, g, b, a] = pixel(&image, 350, 200);
        assert_eq!(a, 255);
        assert!(r > 240 && g < 10 && b < 10, "got {:?}", [r, g, b]);

        // left of center: cyan
        let [r, g, b, a] = pixel(&image, 50, 200);
        assert_eq!(a, 255);
        assert!(r < 10 && g > 240 && b > 240, "got {:?}", [r, g, b]);
    }

    #[test]
    fn test_outside_wheel_is_transparent() {
        let image = wheel_image(Argb::RED);
        assert_eq!(pixel(&image, 0, 0)[3], 0);
        assert_eq!(pixel(&image, 399, 399)[3], 0);
        // gap between the square and the ring
        assert_eq!(pixel(&image, 200, 95)[3], 0);
    }

    #[test]
    fn test_square_center_follows_hue() {
        let image = wheel_image(Argb::BLUE);
        let [r, g, b, a] = pixel(&image, 200, 200);
        assert_eq!(a, 255);
        // roughly half saturated, half bright blue
        assert!(b > 100 && b < 160, "got {:?}", [r, g, b]);
        assert!(r < b && g < b);
        assert!((r as i32 - g as i32).abs() <= 3);
    }
}
