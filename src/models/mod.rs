pub mod config;
pub mod query;
pub mod swatch;

pub use config::{PaletteConfig, PaletteFormat};
pub use query::{Draw, HslRanges, HueRange, LevelRange, Query};
pub use swatch::{EnrichedSwatch, ErrorSwatch, Exclude, Swatch, SwatchRef, ERROR_SWATCH};
