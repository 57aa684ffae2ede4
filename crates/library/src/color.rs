use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color '{0}' must have the form #rrggbb")]
    Malformed(String),

    #[error("color '{0}' contains a non-hexadecimal digit")]
    NonHexDigit(String),
}

/// An sRGB color in the canonical `#rrggbb` form.
///
/// Parsing is strict about shape (leading `#`, exactly six hex digits) but
/// accepts either case; formatting always emits lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::Malformed(input.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Malformed(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::NonHexDigit(input.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Normalized components in `0.0..=1.0`, ordered `[r, g, b]`.
    pub fn components(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_canonically() {
        let color = HexColor::parse("#002b5b").unwrap();
        assert_eq!(color, HexColor::from_rgb(0x00, 0x2b, 0x5b));
        assert_eq!(color.to_string(), "#002b5b");
    }

    #[test]
    fn normalizes_uppercase_input() {
        let color = HexColor::parse("#FF6600").unwrap();
        assert_eq!(color.to_string(), "#ff6600");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            HexColor::parse("002b5b"),
            Err(ColorError::Malformed(_))
        ));
        assert!(matches!(
            HexColor::parse("#02b5b"),
            Err(ColorError::Malformed(_))
        ));
        assert!(matches!(
            HexColor::parse("#002b5b00"),
            Err(ColorError::Malformed(_))
        ));
        assert!(matches!(
            HexColor::parse("#00zb5b"),
            Err(ColorError::NonHexDigit(_))
        ));
    }

    #[test]
    fn components_are_normalized() {
        let [r, g, b] = HexColor::from_rgb(0, 127, 255).components();
        assert!(r.abs() < f32::EPSILON);
        assert!((g - 127.0 / 255.0).abs() < 1e-6);
        assert!((b - 1.0).abs() < f32::EPSILON);
    }
}
