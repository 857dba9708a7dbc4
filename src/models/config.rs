use crate::assets::AssetLoader;
use crate::error::{ConfigError, PaletteError};
use crate::services::PaletteIndex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::swatch::Swatch;

/// Palette file contents (palette.yaml or palette.json)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Log a diagnostic when a query cannot be satisfied
    #[serde(default = "default_log")]
    pub log: bool,

    /// Swatch definitions, in selection order
    #[serde(default)]
    pub swatches: Vec<Swatch>,
}

fn default_log() -> bool {
    true
}

/// Serialization format of a palette file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteFormat {
    #[default]
    Yaml,
    Json,
}

impl PaletteFormat {
    /// Pick the format from a file extension (`.json` is JSON, anything else YAML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PaletteFormat::Json,
            _ => PaletteFormat::Yaml,
        }
    }
}

impl PaletteConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parse(content: &str, format: PaletteFormat) -> Result<Self, ConfigError> {
        match format {
            PaletteFormat::Yaml => Self::from_yaml_str(content),
            PaletteFormat::Json => Self::from_json_str(content),
        }
    }

    /// Load a palette file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, PaletteFormat::from_path(path))?;
        tracing::info!(
            path = %path.display(),
            swatches = config.swatches.len(),
            "Loaded palette"
        );
        Ok(config)
    }

    /// Load the palette from AssetLoader (external file or embedded default)
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_palette_string()?;
        let config = Self::parse(&content, loader.palette_format())?;
        tracing::info!(swatches = config.swatches.len(), "Loaded palette");
        Ok(config)
    }

    /// Build an index without validating the swatches
    pub fn into_index(self) -> PaletteIndex {
        PaletteIndex::new(self.swatches, self.log)
    }

    /// Build an index, rejecting empty palettes, duplicate ids and bad colors
    pub fn try_into_index(self) -> Result<PaletteIndex, PaletteError> {
        PaletteIndex::try_new(self.swatches, self.log)
    }
}
