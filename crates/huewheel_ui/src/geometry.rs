//! Wheel geometry and hit-testing.
//!
//! A `Geometry` is computed once per widget size and then reused by both
//! drawing and pointer handling. It is an immutable value; a resize builds a
//! new one.

use std::f32::consts::{PI, SQRT_2};

use crate::layout::{Bounds, Point, Size};

/// Which regions a pointer position falls in. Both can be true at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerHit {
    pub ring: bool,
    pub square: bool,
}

impl PointerHit {
    pub const NONE: Self = Self {
        ring: false,
        square: false,
    };

    pub fn any(&self) -> bool {
        self.ring || self.square
    }
}

/// Center, radii and SV square for one widget size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    size: Size,
    center: Point,
    outer_radius: f32,
    inner_radius: f32,
}

impl Geometry {
    /// Compute the geometry for `size` with a ring of `stroke_width`.
    ///
    /// Returns `None` for an empty size. Radii never go negative.
    pub fn new(size: Size, stroke_width: f32) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        let stroke = if stroke_width.is_finite() {
            stroke_width.max(0.0)
        } else {
            0.0
        };
        let outer_radius = (size.min_side() / 2.0 - stroke / 2.0).max(0.0);
        let inner_radius = (outer_radius - stroke).max(0.0);

        let geometry = Self {
            size,
            center: Point::new(size.width / 2.0, size.height / 2.0),
            outer_radius,
            inner_radius,
        };
        log::debug!(
            "Wheel geometry for {}x{}: outer={:.2}, inner={:.2}, square side={:.2}",
            size.width,
            size.height,
            outer_radius,
            inner_radius,
            geometry.square_side()
        );
        Some(geometry)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the ring's outer hit edge.
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Radius of the ring's inner hit edge; the SV square is inscribed in it.
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Radius of the ring's stroke centerline.
    pub fn ring_radius(&self) -> f32 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    /// Width of the painted ring band.
    pub fn ring_width(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }

    /// Side of the square inscribed in the inner circle.
    pub fn square_side(&self) -> f32 {
        self.inner_radius * SQRT_2
    }

    pub fn square_bounds(&self) -> Bounds {
        let side = self.square_side();
        let half = side / 2.0;
        Bounds::new(self.center.x - half, self.center.y - half, side, side)
    }

    /// On the ring when `inner < distance <= outer`.
    pub fn is_on_ring(&self, x: f32, y: f32) -> bool {
        let (dx, dy) = Point::new(x, y).offset_from(self.center);
        let distance_sq = dx * dx + dy * dy;
        distance_sq <= self.outer_radius * self.outer_radius
            && distance_sq > self.inner_radius * self.inner_radius
    }

    pub fn is_in_square(&self, x: f32, y: f32) -> bool {
        self.square_bounds().contains(x, y)
    }

    pub fn classify(&self, x: f32, y: f32) -> PointerHit {
        PointerHit {
            ring: self.is_on_ring(x, y),
            square: self.is_in_square(x, y),
        }
    }

    /// Clockwise angle of `(x, y)` around the center as a fraction of a turn, in `[0, 1)`.
    ///
    /// Zero is the positive x axis. Screen y grows downward, so increasing
    /// fractions run clockwise on screen.
    pub fn unit_angle(&self, x: f32, y: f32) -> f32 {
        let (dx, dy) = Point::new(x, y).offset_from(self.center);
        let mut unit = dy.atan2(dx) / (2.0 * PI);
        if unit < 0.0 {
            unit += 1.0;
        }
        // -tiny + 1.0 can round up to exactly 1.0
        if unit >= 1.0 {
            0.0
        } else {
            unit
        }
    }
}
