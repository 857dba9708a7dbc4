//! Palette loading with an embedded fallback
//!
//! - If no palette file is configured: use the embedded default palette
//! - If a palette file is configured and exists: read it from disk
//! - If a palette file is configured but missing: warn and use the embedded default

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::PaletteFormat;

/// Embedded default palette
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "palette.yaml"]
struct EmbeddedPalette;

const EMBEDDED_PALETTE: &str = "palette.yaml";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Palette loader with optional filesystem override
pub struct AssetLoader {
    /// External palette file (from --palette or PALETTE_FILE)
    palette_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `palette_file` should be `Some` only if a path was given.
    /// If `None`, the embedded palette is used exclusively.
    pub fn new(palette_file: Option<PathBuf>) -> Self {
        Self { palette_file }
    }

    pub fn palette_file(&self) -> Option<&Path> {
        self.palette_file.as_deref()
    }

    /// Whether reads will be served from the configured file
    fn uses_external(&self) -> bool {
        self.palette_file.as_ref().is_some_and(|path| path.exists())
    }

    /// Format of the palette that [`read_palette`](Self::read_palette) returns
    pub fn palette_format(&self) -> PaletteFormat {
        match self.palette_file {
            Some(ref path) if self.uses_external() => PaletteFormat::from_path(path),
            _ => PaletteFormat::Yaml,
        }
    }

    /// Read the palette file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded palette.
    pub fn read_palette(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.palette_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(
                path = %path.display(),
                "Palette file not found, using embedded default"
            );
        }

        EmbeddedPalette::get(EMBEDDED_PALETTE)
            .map(|f| {
                tracing::trace!("Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded palette.yaml not found")
            })
    }

    /// Read the palette as a UTF-8 string
    pub fn read_palette_string(&self) -> io::Result<String> {
        let bytes = self.read_palette()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded palette to the configured path (or ./palette.yaml)
    ///
    /// Existing files are left alone unless `force` is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .palette_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(EMBEDDED_PALETTE));
        let name = path.display().to_string();

        if path.exists() && !force {
            report.skipped.push(name);
            return Ok(report);
        }

        let data = EmbeddedPalette::get(EMBEDDED_PALETTE).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded palette.yaml not found")
        })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, &*data.data)?;
        tracing::info!(path = %path.display(), "Wrote embedded palette");
        report.written.push(name);

        Ok(report)
    }
}
