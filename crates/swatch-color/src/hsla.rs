//! HSLA color type
//!
//! Hue, saturation and lightness as used by CSS `hsla()`: hue in degrees,
//! saturation and lightness as percentages.

use serde::{Deserialize, Serialize};

use crate::rgba::Rgba;

/// A color as hue, saturation, lightness and alpha.
///
/// `h` is in `0.0..360.0`, `s` and `l` are in `0.0..=100.0`, `a` is carried
/// over unchanged from the source [`Rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees (0.0..360.0, 0 = red, 120 = green, 240 = blue)
    pub h: f64,
    /// Saturation in percent (0.0..=100.0)
    pub s: f64,
    /// Lightness in percent (0.0..=100.0)
    pub l: f64,
    /// Alpha (0.0..=1.0)
    pub a: f64,
}

impl Hsla {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// An HSLA value whose components are all NaN.
    #[inline]
    pub fn unresolved() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }
}

impl From<Rgba> for Hsla {
    /// Convert RGBA to HSLA.
    ///
    /// Achromatic colors (r == g == b) get hue 0 and saturation 0.
    fn from(rgba: Rgba) -> Self {
        if !rgba.is_resolved() {
            return Self::unresolved();
        }

        let [r, g, b] = rgba.unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0, rgba.a);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        // sector is in 0.0..6.0, but keep the result strictly below 360
        let h = (sector * 60.0).rem_euclid(360.0);

        Self::new(h, s * 100.0, l * 100.0, rgba.a)
    }
}
