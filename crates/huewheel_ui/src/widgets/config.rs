//! Color wheel configuration
//!
//! Centralizes the ring and square dimensions so hosts can tune them from a
//! config file or through the builder methods.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_STROKE_WIDTH, DEFAULT_SV_DIVISIONS, DEFAULT_SV_LINE_WIDTH, DEFAULT_SV_ROW_STEP,
    LEGACY_SQUARE_SPAN, MIN_SV_DIVISIONS, MIN_SV_ROW_STEP,
};
use crate::gradient::AnchorSequence;

/// How a position inside the SV square maps to saturation and value.
///
/// Saturation grows left to right and value grows bottom to top. Results
/// are not clamped here; the HSV conversion clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SquareMapping {
    /// Offsets are divided by the square's side, so the square spans `[0, 1]`
    #[default]
    Normalized,
    /// Offsets are divided by a fixed pixel span regardless of widget size
    FixedSpan {
        /// Pixels per unit of saturation/value
        span: f32,
    },
}

impl SquareMapping {
    /// Fixed 100px span, matching pickers that ignored the square's size.
    pub fn legacy() -> Self {
        Self::FixedSpan {
            span: LEGACY_SQUARE_SPAN,
        }
    }

    /// Saturation and value for an offset from the square's top-left corner.
    pub fn saturation_value(&self, offset_x: f32, offset_y: f32, side: f32) -> (f32, f32) {
        let span = match *self {
            SquareMapping::Normalized => side,
            SquareMapping::FixedSpan { span } => span,
        };
        if span <= 0.0 || !span.is_finite() {
            return (0.0, 0.0);
        }
        (offset_x / span, (side - offset_y) / span)
    }
}

/// Configuration for the color wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Width of the hue ring stroke
    pub stroke_width: f32,
    /// Number of sampled columns in each square row
    pub sv_divisions: usize,
    /// Stroke width of each square row
    pub sv_line_width: f32,
    /// Vertical distance between square rows
    pub sv_row_step: f32,
    /// Colors spread around the hue ring
    pub anchors: AnchorSequence,
    /// Position to saturation/value mapping for the square
    pub square_mapping: SquareMapping,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            sv_divisions: DEFAULT_SV_DIVISIONS,
            sv_line_width: DEFAULT_SV_LINE_WIDTH,
            sv_row_step: DEFAULT_SV_ROW_STEP,
            anchors: AnchorSequence::default(),
            square_mapping: SquareMapping::default(),
        }
    }
}

impl WheelConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ring stroke width.
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the number of sampled columns per square row.
    pub fn sv_divisions(mut self, divisions: usize) -> Self {
        self.sv_divisions = divisions;
        self
    }

    /// Set the stroke width of square rows.
    pub fn sv_line_width(mut self, width: f32) -> Self {
        self.sv_line_width = width;
        self
    }

    /// Set the distance between square rows.
    pub fn sv_row_step(mut self, step: f32) -> Self {
        self.sv_row_step = step;
        self
    }

    /// Set the ring anchors.
    pub fn anchors(mut self, anchors: AnchorSequence) -> Self {
        self.anchors = anchors;
        self
    }

    /// Set the square mapping.
    pub fn square_mapping(mut self, mapping: SquareMapping) -> Self {
        self.square_mapping = mapping;
        self
    }

    /// Column count actually used, at least two.
    pub fn effective_divisions(&self) -> usize {
        self.sv_divisions.max(MIN_SV_DIVISIONS)
    }

    /// Row step actually used; NaN and tiny values fall back to the minimum.
    pub fn effective_row_step(&self) -> f32 {
        if self.sv_row_step.is_finite() {
            self.sv_row_step.max(MIN_SV_ROW_STEP)
        } else {
            DEFAULT_SV_ROW_STEP
        }
    }
}
