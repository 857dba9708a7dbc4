//! RGBA color type
//!
//! Channels use the conventional 8-bit scale for red, green and blue and a
//! unit scale for alpha, matching CSS `rgba()` notation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// A color in sRGB space with an alpha channel.
///
/// `r`, `g` and `b` are in `0.0..=255.0`, `a` is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
    /// Alpha channel (0.0..=1.0)
    pub a: f64,
}

impl Rgba {
    /// Create a new color from raw channel values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use swatch_color::Rgba;
    /// let red = Rgba::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_bytes([r, g, b, 255])
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    ///
    /// The alpha byte is scaled to `0.0..=1.0`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            r: f64::from(bytes[0]),
            g: f64::from(bytes[1]),
            b: f64::from(bytes[2]),
            a: f64::from(bytes[3]) / 255.0,
        }
    }

    /// A color whose channels are all NaN.
    ///
    /// Stands in for a color that could not be parsed. Every comparison
    /// against a NaN channel is false, so range filters never admit it.
    #[inline]
    pub fn unresolved() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Returns `false` if any channel is NaN.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        !(self.r.is_nan() || self.g.is_nan() || self.b.is_nan() || self.a.is_nan())
    }

    /// Red, green and blue scaled to `0.0..=1.0`.
    #[inline]
    pub fn unit_rgb(&self) -> [f64; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats, with or without a leading `#`:
    /// - `RRGGBB` and `RRGGBBAA`
    /// - `RGB` and `RGBA` shorthand (each digit is doubled)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    /// A missing alpha component means fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_color::Rgba;
    ///
    /// let white: Rgba = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgba::from_u8(255, 255, 255));
    ///
    /// let translucent: Rgba = "#f008".parse().unwrap();
    /// assert_eq!(translucent.r, 255.0);
    /// assert!((translucent.a - 0x88 as f64 / 255.0).abs() < 1e-12);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 => Ok(Self::from_bytes([
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
                255,
            ])),
            4 => Ok(Self::from_bytes([
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
                digits[3] * 17,
            ])),
            6 => Ok(Self::from_bytes([
                (digits[0] << 4) | digits[1],
                (digits[2] << 4) | digits[3],
                (digits[4] << 4) | digits[5],
                255,
            ])),
            8 => Ok(Self::from_bytes([
                (digits[0] << 4) | digits[1],
                (digits[2] << 4) | digits[3],
                (digits[4] << 4) | digits[5],
                (digits[6] << 4) | digits[7],
            ])),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgba = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgba::new(255.0, 255.0, 255.0, 1.0));

        let black: Rgba = "#000000".parse().unwrap();
        assert_eq!(black, Rgba::new(0.0, 0.0, 0.0, 1.0));

        // No hash
        let red: Rgba = "FF0000".parse().unwrap();
        assert_eq!(red, Rgba::from_u8(255, 0, 0));

        let color: Rgba = "#1a2b3c".parse().unwrap();
        assert_eq!(color, Rgba::from_u8(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let white: Rgba = "#FFF".parse().unwrap();
        assert_eq!(white, Rgba::from_u8(255, 255, 255));

        // #ABC -> expanded to #AABBCC
        let color: Rgba = "#ABC".parse().unwrap();
        assert_eq!(color, Rgba::from_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_alpha() {
        let half: Rgba = "#00000080".parse().unwrap();
        assert_eq!(half.r, 0.0);
        assert!((half.a - 128.0 / 255.0).abs() < 1e-12);

        let clear: Rgba = "#fff0".parse().unwrap();
        assert_eq!(clear.a, 0.0);
        assert_eq!(clear.g, 255.0);
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#GGG".parse::<Rgba>(),
            Err(ParseColorError::InvalidDigit('G'))
        );
        assert_eq!(
            "#FFFFF".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength(5))
        );
        assert_eq!("".parse::<Rgba>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<Rgba>(), Err(ParseColorError::InvalidLength(0)));

        // from_str_radix would accept a sign, a color must not
        assert_eq!(
            "+fff".parse::<Rgba>(),
            Err(ParseColorError::InvalidDigit('+'))
        );
        assert_eq!(
            "#é12".parse::<Rgba>(),
            Err(ParseColorError::InvalidDigit('é'))
        );
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let padded: Rgba = "  #abcdef  ".parse().unwrap();
        let upper: Rgba = "#ABCDEF".parse().unwrap();
        let mixed: Rgba = "#AbCdEf".parse().unwrap();
        assert_eq!(padded, upper);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_unresolved() {
        let color = Rgba::unresolved();
        assert!(!color.is_resolved());
        assert!(Rgba::from_u8(1, 2, 3).is_resolved());
        assert!(!(color.r >= 0.0));
    }
}
