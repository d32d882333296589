//! HSV color model and conversion to and from ARGB.
//!
//! Conversion into ARGB never fails: out-of-range components are clamped
//! (hue into `[0, 359]`, saturation and value into `[0, 1]`, NaN to zero).

use crate::color::Argb;

/// Largest hue accepted by the conversion. Anything at or above 360 maps here.
pub const MAX_HUE: f32 = 359.0;

/// A hue/saturation/value triple.
///
/// * `hue` - degrees in `[0, 360)`
/// * `saturation` - `0.0..=1.0`
/// * `value` - brightness, `0.0..=1.0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Copy with every component pulled into its valid range.
    pub fn clamped(self) -> Self {
        let hue = if self.hue.is_nan() || self.hue < 0.0 {
            0.0
        } else if self.hue >= 360.0 {
            MAX_HUE
        } else {
            self.hue
        };
        Self {
            hue,
            saturation: clamp_unit(self.saturation),
            value: clamp_unit(self.value),
        }
    }

    /// Decompose a color. Achromatic colors report hue 0.
    pub fn from_argb(color: Argb) -> Self {
        let r = color.red() as f32;
        let g = color.green() as f32;
        let b = color.blue() as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        let mut hue = if delta == 0.0 {
            0.0
        } else if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self {
            hue,
            saturation,
            value: max / 255.0,
        }
    }

    /// Build a color with the given alpha after clamping.
    pub fn to_argb(self, alpha: u8) -> Argb {
        let Hsv {
            hue,
            saturation: s,
            value: v,
        } = self.clamped();

        let v_byte = unit_to_byte(v);
        if s <= 0.0 {
            return Argb::from_argb(alpha, v_byte, v_byte, v_byte);
        }

        let sector = hue / 60.0;
        let w = sector.floor();
        let f = sector - w;

        let p = unit_to_byte((1.0 - s) * v);
        let q = unit_to_byte((1.0 - s * f) * v);
        let t = unit_to_byte((1.0 - s * (1.0 - f)) * v);

        let (r, g, b) = match w as u8 {
            0 => (v_byte, t, p),
            1 => (q, v_byte, p),
            2 => (p, v_byte, t),
            3 => (p, q, v_byte),
            4 => (t, p, v_byte),
            _ => (v_byte, p, q),
        };

        Argb::from_argb(alpha, r, g, b)
    }

    /// True when the color carries a meaningful hue.
    pub fn is_chromatic(&self) -> bool {
        self.saturation > 0.0 && self.value > 0.0
    }
}

/// Opaque ARGB from HSV components, clamping out-of-range input.
pub fn hsv_to_argb(hue: f32, saturation: f32, value: f32) -> Argb {
    Hsv::new(hue, saturation, value).to_argb(0xFF)
}

/// Hue of a color in degrees.
pub fn hue_of(color: Argb) -> f32 {
    Hsv::from_argb(color).hue
}

fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Scale a unit value to a byte, rounding half up.
fn unit_to_byte(x: f32) -> u8 {
    (x * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
