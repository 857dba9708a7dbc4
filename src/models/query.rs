use serde::{Deserialize, Serialize};

use super::swatch::{EnrichedSwatch, Exclude};
use crate::services::ranges::{between, polar_between};

/// Inclusive range over a unit-scale attribute (luminance, saturation, lightness).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: f64,
    pub max: f64,
}

impl LevelRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        between(value, self.min, self.max)
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Window on the hue wheel, anchored at `theta` and sized by `range` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueRange {
    pub theta: f64,
    pub range: f64,
}

impl HueRange {
    pub fn new(theta: f64, range: f64) -> Self {
        Self { theta, range }
    }

    pub fn contains(&self, hue: f64) -> bool {
        polar_between(hue, self.theta, self.range)
    }
}

impl Default for HueRange {
    fn default() -> Self {
        Self::new(0.0, 45.0)
    }
}

/// Combined hue, saturation and lightness filter.
///
/// The default admits every color: a 180 degree hue window folds around the
/// whole wheel, and saturation and lightness span `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslRanges {
    pub hue: HueRange,
    pub saturation: LevelRange,
    pub lightness: LevelRange,
}

impl Default for HslRanges {
    fn default() -> Self {
        Self {
            hue: HueRange::new(0.0, 180.0),
            saturation: LevelRange::default(),
            lightness: LevelRange::default(),
        }
    }
}

/// How many swatches to draw and which ids to leave out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub count: usize,
    #[serde(default)]
    pub exclude: Vec<Exclude>,
}

impl Draw {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            exclude: Vec::new(),
        }
    }

    pub fn excluding<I, E>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Exclude>,
    {
        self.exclude.extend(exclude.into_iter().map(Into::into));
        self
    }

    /// Requested count, with 0 treated as a single pick.
    pub fn effective_count(&self) -> usize {
        self.count.max(1)
    }
}

impl Default for Draw {
    fn default() -> Self {
        Self::new(1)
    }
}

/// A filtered selection, as dispatched by [`PaletteIndex::query`](crate::services::PaletteIndex::query).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "lowercase")]
pub enum Query {
    Random,
    Luminance(LevelRange),
    Hue(HueRange),
    Saturation(LevelRange),
    Lightness(LevelRange),
    Hsl(HslRanges),
}

impl Query {
    /// Whether a swatch passes this filter.
    pub fn admits(&self, swatch: &EnrichedSwatch) -> bool {
        match self {
            Query::Random => true,
            Query::Luminance(range) => range.contains(swatch.luminance()),
            Query::Hue(hue) => hue.contains(swatch.hue()),
            Query::Saturation(range) => range.contains(swatch.saturation()),
            Query::Lightness(range) => range.contains(swatch.lightness()),
            Query::Hsl(hsl) => {
                hsl.hue.contains(swatch.hue())
                    && hsl.saturation.contains(swatch.saturation())
                    && hsl.lightness.contains(swatch.lightness())
            }
        }
    }

    /// Human-readable filter description used in diagnostics.
    pub fn describe(&self, excluded: usize) -> String {
        match self {
            Query::Random => format!("excluding {} ids", excluded),
            Query::Luminance(r) => format!("with luminance between {} and {}", r.min, r.max),
            Query::Hue(h) => format!("within hue range {}±{}", h.theta, h.range),
            Query::Saturation(r) => format!("with saturation between {} and {}", r.min, r.max),
            Query::Lightness(r) => format!("with lightness between {} and {}", r.min, r.max),
            Query::Hsl(hsl) => format!(
                "within HSL ranges ({}±{}, {}-{}, {}-{})",
                hsl.hue.theta,
                hsl.hue.range,
                hsl.saturation.min,
                hsl.saturation.max,
                hsl.lightness.min,
                hsl.lightness.max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        assert_eq!(LevelRange::default(), LevelRange::new(0.0, 1.0));
        assert_eq!(HueRange::default(), HueRange::new(0.0, 45.0));

        let hsl = HslRanges::default();
        assert_eq!(hsl.hue, HueRange::new(0.0, 180.0));
        assert_eq!(hsl.saturation, LevelRange::new(0.0, 1.0));
        assert_eq!(hsl.lightness, LevelRange::new(0.0, 1.0));

        let draw = Draw::default();
        assert_eq!(draw.count, 1);
        assert!(draw.exclude.is_empty());
    }

    #[test]
    fn test_level_range_inclusive() {
        let range = LevelRange::new(0.25, 0.75);
        assert!(range.contains(0.25));
        assert!(range.contains(0.75));
        assert!(!range.contains(0.7500001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_default_hsl_hue_admits_whole_wheel() {
        let hue = HslRanges::default().hue;
        for degrees in 0..360 {
            assert!(hue.contains(f64::from(degrees)), "hue {degrees} rejected");
        }
        assert!(hue.contains(359.99));
    }

    #[test]
    fn test_draw_excluding_mixed() {
        let draw = Draw::new(3).excluding(["ember", "sky"]);
        assert_eq!(draw.exclude.len(), 2);
        assert_eq!(draw.exclude[1].id(), "sky");
    }

    #[test]
    fn test_effective_count() {
        assert_eq!(Draw::new(0).effective_count(), 1);
        assert_eq!(Draw::new(1).effective_count(), 1);
        assert_eq!(Draw::new(7).effective_count(), 7);
    }

    #[test]
    fn test_query_admits() {
        use crate::models::Swatch;

        // #ff8000: hue ~30, saturation 1.0, lightness 0.5
        let orange = EnrichedSwatch::new(Swatch::new("orange", "#ff8000"));

        assert!(Query::Random.admits(&orange));
        assert!(Query::Hue(HueRange::new(20.0, 10.0)).admits(&orange));
        assert!(!Query::Hue(HueRange::new(40.0, 10.0)).admits(&orange));
        assert!(Query::Saturation(LevelRange::new(0.9, 1.0)).admits(&orange));
        assert!(Query::Lightness(LevelRange::new(0.5, 0.5)).admits(&orange));
        assert!(!Query::Luminance(LevelRange::new(0.8, 1.0)).admits(&orange));
        assert!(Query::Hsl(HslRanges::default()).admits(&orange));
        assert!(!Query::Hsl(HslRanges {
            lightness: LevelRange::new(0.0, 0.4),
            ..HslRanges::default()
        })
        .admits(&orange));
    }

    #[test]
    fn test_query_admits_unresolved_only_when_random() {
        use crate::models::Swatch;

        let mud = EnrichedSwatch::new(Swatch::new("mud", "not-a-color"));
        assert!(Query::Random.admits(&mud));
        assert!(!Query::Luminance(LevelRange::default()).admits(&mud));
        assert!(!Query::Hsl(HslRanges::default()).admits(&mud));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Query::Luminance(LevelRange::new(0.8, 1.0)).describe(0),
            "with luminance between 0.8 and 1"
        );
        assert_eq!(
            Query::Hue(HueRange::new(0.0, 10.0)).describe(0),
            "within hue range 0±10"
        );
        assert_eq!(
            Query::Hsl(HslRanges::default()).describe(0),
            "within HSL ranges (0±180, 0-1, 0-1)"
        );
        assert_eq!(Query::Random.describe(4), "excluding 4 ids");
    }

    #[test]
    fn test_query_deserialize() {
        let query: Query =
            serde_json::from_value(json!({"by": "hue", "theta": 120.0, "range": 30.0})).unwrap();
        assert_eq!(query, Query::Hue(HueRange::new(120.0, 30.0)));

        let query: Query = serde_json::from_value(json!({"by": "random"})).unwrap();
        assert_eq!(query, Query::Random);
    }
}
