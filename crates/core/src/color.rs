//! Pallet display colors and the fixed default palette.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 24-bit RGB color, stored as `0xRRGGBB`.
///
/// Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color(u32);

impl Color {
    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    /// Creates a color from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn to_rgb_u32(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb`, `rrggbb` or `0xrrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);

        if hex.len() != 6 {
            return Err(Error::ConfigError(format!(
                "color '{s}' must have exactly six hex digits"
            )));
        }

        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::ConfigError(format!("color '{s}' is not valid hex")))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Default colors handed to pallets without a custom color, cycled by placement index.
pub const PALETTE: [Color; 10] = [
    Color::from_rgb_u32(0x1f77b4),
    Color::from_rgb_u32(0xff7f0e),
    Color::from_rgb_u32(0x2ca02c),
    Color::from_rgb_u32(0xd62728),
    Color::from_rgb_u32(0x9467bd),
    Color::from_rgb_u32(0x8c564b),
    Color::from_rgb_u32(0xe377c2),
    Color::from_rgb_u32(0x7f7f7f),
    Color::from_rgb_u32(0xbcbd22),
    Color::from_rgb_u32(0x17becf),
];

/// Returns the palette color for a 0-based placement index.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
