//! swatch-color: color conversions for swatch palettes
//!
//! This crate provides the three conversions a swatch palette needs to
//! describe its entries:
//!
//! - [`Rgba`]: parsed from a hex string (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! - [`Hsla`]: hue/saturation/lightness derived from an [`Rgba`]
//! - [`relative_luminance()`]: WCAG relative luminance of a hex color
//!
//! # Example
//!
//! ```
//! use swatch_color::{relative_luminance, Hsla, Rgba};
//!
//! let rgba: Rgba = "#ff8000".parse().unwrap();
//! let hsla = Hsla::from(rgba);
//! assert!((hsla.h - 30.1).abs() < 0.1);
//!
//! let white = relative_luminance("#fff").unwrap();
//! assert!((white - 1.0).abs() < 1e-9);
//! ```
//!
//! # Ranges
//!
//! | Type | Channel | Range |
//! |------|---------|-------|
//! | [`Rgba`] | `r`, `g`, `b` | `0.0..=255.0` |
//! | [`Rgba`] | `a` | `0.0..=1.0` |
//! | [`Hsla`] | `h` | `0.0..360.0` degrees |
//! | [`Hsla`] | `s`, `l` | `0.0..=100.0` percent |
//! | luminance | | `0.0..=1.0` |
//!
//! Channels are stored as `f64` so that an unparseable color can be carried
//! through as NaN (see [`Rgba::unresolved()`]) instead of failing the caller.

mod error;
mod hsla;
mod luminance;
mod rgba;

pub use error::ParseColorError;
pub use hsla::Hsla;
pub use luminance::relative_luminance;
pub use rgba::Rgba;
