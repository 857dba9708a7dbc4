use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swatch_color::{relative_luminance, Hsla, ParseColorError, Rgba};

/// A raw swatch record as supplied by the caller.
///
/// Only `id` and `hex` are interpreted; every other field is kept in
/// `extra` and serialized back out alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub id: String,
    pub hex: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Swatch {
    pub fn new(id: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex: hex.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field, replacing any previous value under `key`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A swatch with its derived color attributes.
///
/// The attributes are computed once from `hex` when the swatch is enriched
/// and cannot be changed afterwards. A malformed `hex` leaves them NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSwatch {
    #[serde(flatten)]
    swatch: Swatch,
    rgba: Rgba,
    hsla: Hsla,
    luminance: f64,
}

impl EnrichedSwatch {
    /// Enrich a swatch without validating its color.
    pub fn new(swatch: Swatch) -> Self {
        let rgba = swatch.hex.parse::<Rgba>().unwrap_or_else(|_| Rgba::unresolved());
        let luminance = relative_luminance(&swatch.hex).unwrap_or(f64::NAN);
        Self {
            hsla: Hsla::from(rgba),
            rgba,
            luminance,
            swatch,
        }
    }

    /// Enrich a swatch, failing if its `hex` is not a valid color.
    pub fn try_new(swatch: Swatch) -> Result<Self, ParseColorError> {
        let rgba = swatch.hex.parse::<Rgba>()?;
        Ok(Self {
            hsla: Hsla::from(rgba),
            luminance: rgba.relative_luminance(),
            rgba,
            swatch,
        })
    }

    pub fn id(&self) -> &str {
        &self.swatch.id
    }

    pub fn hex(&self) -> &str {
        &self.swatch.hex
    }

    /// Extra field supplied with the raw swatch.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.swatch.extra.get(key)
    }

    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    pub fn hsla(&self) -> Hsla {
        self.hsla
    }

    /// Relative luminance (0.0..=1.0)
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// Hue in degrees (0.0..360.0)
    pub fn hue(&self) -> f64 {
        self.hsla.h
    }

    /// Saturation as a fraction (0.0..=1.0)
    pub fn saturation(&self) -> f64 {
        self.hsla.s / 100.0
    }

    /// Lightness as a fraction (0.0..=1.0)
    pub fn lightness(&self) -> f64 {
        self.hsla.l / 100.0
    }

    /// Whether the derived attributes came from a valid color.
    pub fn is_resolved(&self) -> bool {
        self.rgba.is_resolved()
    }
}

/// Placeholder returned when a query cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorSwatch {
    pub id: &'static str,
    pub title: &'static str,
    pub hex: &'static str,
    pub contrast: bool,
}

pub const ERROR_SWATCH: ErrorSwatch = ErrorSwatch {
    id: "invalid",
    title: "Invalid Swatch",
    hex: "#ff0000",
    contrast: true,
};

/// Any record that carries a swatch id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwatchRef {
    pub id: String,
}

/// An entry in an exclusion list: either a bare id or a swatch-like record.
///
/// Deserializes from a plain string or from any object with an `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exclude {
    Id(String),
    Swatch(SwatchRef),
}

impl Exclude {
    pub fn id(&self) -> &str {
        match self {
            Exclude::Id(id) => id,
            Exclude::Swatch(swatch) => &swatch.id,
        }
    }
}

impl From<&str> for Exclude {
    fn from(id: &str) -> Self {
        Exclude::Id(id.to_string())
    }
}

impl From<String> for Exclude {
    fn from(id: String) -> Self {
        Exclude::Id(id)
    }
}

impl From<&Swatch> for Exclude {
    fn from(swatch: &Swatch) -> Self {
        Exclude::Swatch(SwatchRef {
            id: swatch.id.clone(),
        })
    }
}

impl From<&EnrichedSwatch> for Exclude {
    fn from(swatch: &EnrichedSwatch) -> Self {
        Exclude::from(swatch.swatch())
    }
}
