use std::collections::HashSet;

use rand::Rng;

use super::pool::{invalidate, output, trim};
use super::selection::{Selected, Selection};
use crate::error::PaletteError;
use crate::models::{Draw, EnrichedSwatch, HslRanges, HueRange, LevelRange, Query, Swatch};

/// Immutable, queryable palette.
///
/// Derived color attributes are computed once when the index is built.
/// Queries borrow the index immutably and take their random source as an
/// argument, so one index can serve any number of callers.
#[derive(Debug, Clone)]
pub struct PaletteIndex {
    swatches: Vec<EnrichedSwatch>,
    log: bool,
}

impl PaletteIndex {
    /// Build an index without validating ids or colors.
    ///
    /// Swatches with an unparseable `hex` are kept; their derived attributes
    /// are NaN, so they only show up in lookups by id and unfiltered draws.
    pub fn new<I>(swatches: I, log: bool) -> Self
    where
        I: IntoIterator<Item = Swatch>,
    {
        let swatches: Vec<EnrichedSwatch> =
            swatches.into_iter().map(EnrichedSwatch::new).collect();

        if log {
            for swatch in swatches.iter().filter(|s| !s.is_resolved()) {
                tracing::warn!(
                    id = %swatch.id(),
                    hex = %swatch.hex(),
                    "Swatch color could not be parsed"
                );
            }
        }
        tracing::debug!(swatches = swatches.len(), "Built palette index");

        Self { swatches, log }
    }

    /// Build an index, rejecting empty input, duplicate ids and bad colors.
    pub fn try_new<I>(swatches: I, log: bool) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Swatch>,
    {
        let mut seen = HashSet::new();
        let mut enriched = Vec::new();

        for (index, swatch) in swatches.into_iter().enumerate() {
            if seen.contains(&swatch.id) {
                return Err(PaletteError::DuplicateId {
                    id: swatch.id,
                    index,
                });
            }
            let id = swatch.id.clone();
            let swatch = EnrichedSwatch::try_new(swatch).map_err(|source| {
                PaletteError::InvalidColor {
                    id: id.clone(),
                    source,
                }
            })?;
            seen.insert(id);
            enriched.push(swatch);
        }

        if enriched.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        tracing::debug!(swatches = enriched.len(), "Built palette index");

        Ok(Self {
            swatches: enriched,
            log,
        })
    }

    /// All swatches, in input order.
    pub fn swatches(&self) -> &[EnrichedSwatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Whether failed queries emit a diagnostic.
    pub fn logging(&self) -> bool {
        self.log
    }

    /// Look up a swatch by id. The first match wins if ids repeat.
    pub fn get(&self, id: &str) -> Option<&EnrichedSwatch> {
        self.swatches.iter().find(|swatch| swatch.id() == id)
    }

    /// Swatch by id, or the error swatch if there is none.
    pub fn by_id(&self, id: &str) -> Selected<'_> {
        match self.get(id) {
            Some(swatch) => Selected::Swatch(swatch),
            None => {
                if self.log {
                    tracing::error!(id, "Could not find swatch with id \"{}\"", id);
                }
                Selected::Invalid
            }
        }
    }

    /// Random swatch(es) from the whole palette.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R, draw: &Draw) -> Selection<'_> {
        self.query(rng, &Query::Random, draw)
    }

    /// Random swatch(es) with relative luminance in `range`.
    pub fn by_luminance<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: LevelRange,
        draw: &Draw,
    ) -> Selection<'_> {
        self.query(rng, &Query::Luminance(range), draw)
    }

    /// Random swatch(es) whose hue falls in the `hue` window.
    pub fn by_hue<R: Rng + ?Sized>(&self, rng: &mut R, hue: HueRange, draw: &Draw) -> Selection<'_> {
        self.query(rng, &Query::Hue(hue), draw)
    }

    /// Random swatch(es) with saturation (as a fraction) in `range`.
    pub fn by_saturation<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: LevelRange,
        draw: &Draw,
    ) -> Selection<'_> {
        self.query(rng, &Query::Saturation(range), draw)
    }

    /// Random swatch(es) with lightness (as a fraction) in `range`.
    pub fn by_lightness<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: LevelRange,
        draw: &Draw,
    ) -> Selection<'_> {
        self.query(rng, &Query::Lightness(range), draw)
    }

    /// Random swatch(es) matching hue, saturation and lightness at once.
    pub fn by_hsl<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ranges: HslRanges,
        draw: &Draw,
    ) -> Selection<'_> {
        self.query(rng, &Query::Hsl(ranges), draw)
    }

    /// Run a query: trim exclusions, filter, then draw or fall back.
    ///
    /// A request for one swatch yields [`Selection::One`], more yields
    /// [`Selection::Many`] of exactly the requested length. When too few
    /// swatches match, the result is padded with the error swatch.
    pub fn query<R: Rng + ?Sized>(&self, rng: &mut R, query: &Query, draw: &Draw) -> Selection<'_> {
        let n = draw.effective_count();
        let pool: Vec<&EnrichedSwatch> = trim(&self.swatches, &draw.exclude)
            .into_iter()
            .filter(|swatch| query.admits(swatch))
            .collect();

        if pool.len() < n {
            if self.log {
                tracing::error!(
                    requested = n,
                    found = pool.len(),
                    "{}",
                    failure_message(query, n, draw.exclude.len())
                );
            }
            return invalidate(n, pool);
        }

        output(rng, pool, n)
    }
}

impl From<Vec<Swatch>> for PaletteIndex {
    /// Build an index with logging enabled.
    fn from(swatches: Vec<Swatch>) -> Self {
        Self::new(swatches, true)
    }
}

fn failure_message(query: &Query, n: usize, excluded: usize) -> String {
    let subject = if n > 1 {
        format!("{} swatches", n)
    } else {
        "swatch".to_string()
    };
    format!("Could not find {} {}.", subject, query.describe(excluded))
}
