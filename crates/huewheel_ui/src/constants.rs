//! Centralized constants for huewheel_ui
//!
//! Default dimensions and sampling limits for the color wheel live here so the
//! config defaults, the widget and the tests agree on them.

// =============================================================================
// Hue Ring
// =============================================================================

/// Default width of the hue ring stroke in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 50.0;

// =============================================================================
// Saturation/Value Square
// =============================================================================

/// Default number of sampled columns per square row
pub const DEFAULT_SV_DIVISIONS: usize = 10;

/// Fewest columns a gradient row can have
pub const MIN_SV_DIVISIONS: usize = 2;

/// Default stroke width of each square row
pub const DEFAULT_SV_LINE_WIDTH: f32 = 2.0;

/// Default vertical distance between square rows
pub const DEFAULT_SV_ROW_STEP: f32 = 1.0;

/// Smallest row step accepted; keeps the row count bounded
pub const MIN_SV_ROW_STEP: f32 = 0.1;

/// Pixel span that reproduces the fixed 100px scaling of older pickers
pub const LEGACY_SQUARE_SPAN: f32 = 100.0;

// =============================================================================
// Layout
// =============================================================================

/// Side length the wheel asks for when the parent leaves it unconstrained
pub const DEFAULT_WHEEL_SIDE: f32 = 240.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_positive() {
        assert!(DEFAULT_STROKE_WIDTH > 0.0);
        assert!(DEFAULT_SV_DIVISIONS >= MIN_SV_DIVISIONS);
        assert!(DEFAULT_SV_LINE_WIDTH > 0.0);
        assert!(DEFAULT_SV_ROW_STEP >= MIN_SV_ROW_STEP);
        assert!(MIN_SV_ROW_STEP > 0.0);
        assert!(LEGACY_SQUARE_SPAN > 0.0);
        assert!(DEFAULT_WHEEL_SIDE > DEFAULT_STROKE_WIDTH * 2.0);
    }
}
