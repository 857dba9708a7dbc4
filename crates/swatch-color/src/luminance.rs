//! Relative luminance
//!
//! WCAG 2.x relative luminance: each sRGB channel is linearized with the
//! IEC 61966-2-1 transfer function, then weighted by the Rec. 709
//! luma coefficients.

use crate::error::ParseColorError;
use crate::rgba::Rgba;

/// IEC 61966-2-1 exact formula: sRGB to linear
#[inline]
fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgba {
    /// Relative luminance of this color in `0.0..=1.0`.
    ///
    /// Alpha is ignored. An unresolved color yields NaN.
    pub fn relative_luminance(&self) -> f64 {
        let [r, g, b] = self.unit_rgb();
        0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
    }
}

/// Relative luminance of a hex color string in `0.0..=1.0`.
///
/// # Example
/// ```
/// use swatch_color::relative_luminance;
/// assert_eq!(relative_luminance("#000000").unwrap(), 0.0);
/// assert!(relative_luminance("nope").is_err());
/// ```
pub fn relative_luminance(hex: &str) -> Result<f64, ParseColorError> {
    Ok(hex.parse::<Rgba>()?.relative_luminance())
}
