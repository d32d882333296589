//! Anchor color sequences and interpolation along them.
//!
//! The hue ring is defined by a short list of anchor colors spread evenly
//! around the circle. Sampling at a fraction `f` in `[0, 1]` blends the two
//! nearest anchors channel by channel.

use serde::{Deserialize, Serialize};

use crate::color::Argb;

/// Default ring anchors: red, magenta, blue, cyan, green, yellow, back to red.
pub const DEFAULT_ANCHORS: [Argb; 7] = [
    Argb::RED,
    Argb::MAGENTA,
    Argb::BLUE,
    Argb::CYAN,
    Argb::GREEN,
    Argb::YELLOW,
    Argb::RED,
];

/// An ordered, non-empty list of colors spaced evenly over `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Argb>", into = "Vec<Argb>")]
pub struct AnchorSequence {
    colors: Vec<Argb>,
}

/// Returned when building a sequence from an empty list.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Anchor sequence needs at least one color")]
pub struct EmptyAnchorSequence;

impl AnchorSequence {
    pub fn new(colors: Vec<Argb>) -> Result<Self, EmptyAnchorSequence> {
        if colors.is_empty() {
            return Err(EmptyAnchorSequence);
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// True when the first and last anchors match, so the ring has no seam.
    pub fn is_closed(&self) -> bool {
        self.colors.first() == self.colors.last()
    }

    /// Color at `unit` along the sequence.
    pub fn interpolate(&self, unit: f32) -> Argb {
        interpolate(&self.colors, unit)
    }
}

impl Default for AnchorSequence {
    fn default() -> Self {
        Self {
            colors: DEFAULT_ANCHORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<Argb>> for AnchorSequence {
    type Error = EmptyAnchorSequence;

    fn try_from(colors: Vec<Argb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<AnchorSequence> for Vec<Argb> {
    fn from(sequence: AnchorSequence) -> Self {
        sequence.colors
    }
}

/// Blend across `colors` at `unit`.
///
/// `unit <= 0` yields the first color and `unit >= 1` the last. NaN is
/// treated as 0. An empty slice yields transparent black.
pub fn interpolate(colors: &[Argb], unit: f32) -> Argb {
    let (Some(&first), Some(&last)) = (colors.first(), colors.last()) else {
        return Argb::TRANSPARENT;
    };
    if unit.is_nan() || unit <= 0.0 {
        return first;
    }
    if unit >= 1.0 {
        return last;
    }

    let scaled = unit * (colors.len() - 1) as f32;
    let i = (scaled as usize).min(colors.len() - 1);
    let p = scaled - i as f32;

    let c0 = colors[i];
    let Some(&c1) = colors.get(i + 1) else {
        return c0;
    };

    Argb::from_argb(
        lerp_channel(c0.alpha(), c1.alpha(), p),
        lerp_channel(c0.red(), c1.red(), p),
        lerp_channel(c0.green(), c1.green(), p),
        lerp_channel(c0.blue(), c1.blue(), p),
    )
}

/// `from + round(p * (to - from))`, rounding half toward positive infinity.
fn lerp_channel(from: u8, to: u8, p: f32) -> u8 {
    let delta = to as f32 - from as f32;
    let step = (p * delta + 0.5).floor();
    (from as f32 + step).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_close_the_loop() {
        let seq = AnchorSequence::default();
        assert!(seq.is_closed());
        assert_eq!(seq.interpolate(0.0), Argb::RED);
        assert_eq!(seq.interpolate(1.0), Argb::RED);
        assert_eq!(seq.interpolate(-0.5), Argb::RED);
        assert_eq!(seq.interpolate(7.0), Argb::RED);
    }

    #[test]
    fn test_midpoint_is_cyan() {
        // 6 segments, 0.5 * 6 = 3 -> exactly the fourth anchor
        assert_eq!(interpolate(&DEFAULT_ANCHORS, 0.5), Argb::CYAN);
    }

    #[test]
    fn test_exact_anchor_positions() {
        for (i, expected) in DEFAULT_ANCHORS.iter().enumerate().take(6) {
            let unit = i as f32 / 6.0;
            assert_eq!(interpolate(&DEFAULT_ANCHORS, unit), *expected, "anchor {}", i);
        }
    }

    #[test]
    fn test_halfway_between_red_and_magenta() {
        // 1/12 sits halfway through the first segment; 127.5 rounds up
        let c = interpolate(&DEFAULT_ANCHORS, 1.0 / 12.0);
        assert_eq!(c, Argb::rgb(255, 0, 128));
    }

    #[test]
    fn test_descending_channel_rounds_half_up() {
        // 255 -> 0 at p = 0.5: 255 + floor(-127.5 + 0.5) = 128
        let c = interpolate(&[Argb::RED, Argb::BLACK], 0.5);
        assert_eq!(c, Argb::rgb(128, 0, 0));
    }

    #[test]
    fn test_alpha_is_interpolated() {
        let c = interpolate(&[Argb::TRANSPARENT, Argb::BLACK], 0.25);
        assert_eq!(c.alpha(), 64);
    }

    #[test]
    fn test_single_and_empty_sequences() {
        assert_eq!(interpolate(&[Argb::BLUE], 0.3), Argb::BLUE);
        assert_eq!(interpolate(&[], 0.3), Argb::TRANSPARENT);
        assert_eq!(AnchorSequence::new(Vec::new()), Err(EmptyAnchorSequence));
    }

    #[test]
    fn test_nan_yields_first() {
        assert_eq!(interpolate(&DEFAULT_ANCHORS, f32::NAN), Argb::RED);
    }

    #[test]
    fn test_serde_rejects_empty() {
        let seq: AnchorSequence = serde_json::from_str(r##"["#FF0000", "#0000FF"]"##).unwrap();
        assert_eq!(seq.colors(), &[Argb::RED, Argb::BLUE]);
        assert!(serde_json::from_str::<AnchorSequence>("[]").is_err());
    }
}
