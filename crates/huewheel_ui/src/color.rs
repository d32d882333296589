//! 32-bit ARGB color value
//!
//! `Argb` is the color type the wheel works in: every pick produces one and
//! every draw command carries them. It formats and parses as `#AARRGGBB`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A packed 32-bit color, alpha in the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const CYAN: Argb = Argb(0xFF00_FFFF);
    pub const MAGENTA: Argb = Argb(0xFFFF_00FF);
    pub const YELLOW: Argb = Argb(0xFFFF_FF00);

    /// Pack four channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::from_argb(alpha, self.red(), self.green(), self.blue())
    }

    /// Channels as `[r, g, b, a]` bytes, the order most rasterizers expect.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> u32 {
        color.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Errors from parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not 6 or 8 hex digits after the optional `#`
    #[error("Invalid color length {len} in '{input}', expected 6 or 8 hex digits")]
    InvalidLength {
        /// The rejected input
        input: String,
        /// Number of digits found
        len: usize,
    },

    /// A non-hex character was found
    #[error("Invalid hex digits in color '{0}'")]
    InvalidDigit(String),
}

impl FromStr for Argb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let value = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map(|rgb| 0xFF00_0000 | rgb),
            8 => u32::from_str_radix(digits, 16),
            len => {
                return Err(ColorParseError::InvalidLength {
                    input: s.to_string(),
                    len,
                })
            }
        };
        value
            .map(Argb)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> String {
        color.to_string()
    }
}
