//! Residue colors: an 8-bit RGB value type and the cyclic rainbow palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 8-bit sRGB color.
///
/// Serializes as a `#RRGGBB` hex string so TOML presets stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` form accepted by canvas and SVG hosts.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a #RRGGBB color, got {:?}", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRgbError(s.to_owned());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Number of entries in the residue palette.
pub const PALETTE_LEN: usize = 7;

/// Red, orange, yellow, green, blue, indigo, violet.
pub const RAINBOW: [Rgb; PALETTE_LEN] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0xFF, 0x7F, 0x00),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0x00, 0xFF, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0x4B, 0x00, 0x82),
    Rgb::new(0x94, 0x00, 0xD3),
];

/// Cyclic residue palette indexed by a residue's color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [Rgb; PALETTE_LEN]);

impl Default for Palette {
    fn default() -> Self {
        Self(RAINBOW)
    }
}

impl Palette {
    /// Color for a tag; tags wrap around the palette.
    #[must_use]
    pub fn color(&self, tag: usize) -> Rgb {
        self.0[tag % PALETTE_LEN]
    }
}
