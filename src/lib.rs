//! Swatchbook - queryable color palettes
//!
//! Builds an immutable [`PaletteIndex`] from a list of swatches, derives
//! RGBA, HSLA and relative luminance for each one, and answers random
//! selections filtered by luminance, hue, saturation and lightness.
//!
//! ```
//! use rand::SeedableRng;
//! use swatchbook::{Draw, LevelRange, PaletteIndex, Swatch};
//!
//! let index = PaletteIndex::new(
//!     vec![Swatch::new("ink", "#1b1b1e"), Swatch::new("paper", "#f4f1ea")],
//!     false,
//! );
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let light = index.by_luminance(&mut rng, LevelRange::new(0.5, 1.0), &Draw::default());
//! assert_eq!(light.first().id(), "paper");
//!
//! // Nothing is this dark: the error swatch stands in
//! let none = index.by_luminance(&mut rng, LevelRange::new(0.0, 0.001), &Draw::default());
//! assert!(none.first().is_invalid());
//! ```

pub mod assets;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, PaletteError, SelectionError};
pub use models::{
    Draw, EnrichedSwatch, ErrorSwatch, Exclude, HslRanges, HueRange, LevelRange, PaletteConfig,
    Query, Swatch, ERROR_SWATCH,
};
pub use services::{PaletteIndex, Selected, Selection};
