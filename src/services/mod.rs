pub mod palette_index;
pub mod pool;
pub mod ranges;
pub mod selection;

pub use palette_index::PaletteIndex;
pub use selection::{Selected, Selection};
