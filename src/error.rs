use swatch_color::ParseColorError;
use thiserror::Error;

/// Errors from strict palette construction.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette has no swatches")]
    EmptyPalette,

    #[error("Duplicate swatch id \"{id}\" at index {index}")]
    DuplicateId { id: String, index: usize },

    #[error("Invalid color for swatch \"{id}\": {source}")]
    InvalidColor {
        id: String,
        #[source]
        source: ParseColorError,
    },
}

/// Errors from loading a palette file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returned when a selection had to be padded with the error swatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Found {found} of {requested} requested swatches")]
    Unsatisfied { found: usize, requested: usize },
}
