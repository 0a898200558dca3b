use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BannerError, BannerResult};

/// Opaque sRGB color, canonically written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Straight RGBA8 pixel with the given alpha.
    pub const fn with_alpha(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Parse a `#RRGGBB` color (hex digits are case-insensitive).
///
/// Shorthand `#RGB`, alpha suffixes and surrounding whitespace are rejected; normalizing
/// user input into the canonical form is the caller's job.
pub fn parse_hex(s: &str) -> BannerResult<Color> {
    let Some(digits) = s.strip_prefix('#') else {
        return Err(BannerError::color_format(format!(
            "\"{s}\" must start with '#'"
        )));
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BannerError::color_format(format!(
            "\"{s}\" must be '#' followed by exactly 6 hex digits"
        )));
    }

    let byte = |i: usize| -> BannerResult<u8> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| BannerError::color_format(format!("\"{s}\": {e}")))
    };
    Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
}

/// Linear per-channel blend from `c1` (factor 0) to `c2` (factor 1).
///
/// `factor` is clamped to `[0, 1]`; non-finite factors are treated as 0.
pub fn interpolate(c1: Color, c2: Color, factor: f32) -> Color {
    let t = if factor.is_finite() {
        factor.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lerp = |a: u8, b: u8| -> u8 {
        let v = f32::from(a) * (1.0 - t) + f32::from(b) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::rgb(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
