//! Candidate pool shaping: exclusion, random output and error-swatch fallback.

use std::collections::HashSet;
use std::iter;

use rand::seq::SliceRandom;
use rand::Rng;

use super::selection::{Selected, Selection};
use crate::models::{EnrichedSwatch, Exclude};

/// Every swatch whose id is not named by `exclude`, in palette order.
pub fn trim<'a>(swatches: &'a [EnrichedSwatch], exclude: &[Exclude]) -> Vec<&'a EnrichedSwatch> {
    if exclude.is_empty() {
        return swatches.iter().collect();
    }

    let excluded: HashSet<&str> = exclude.iter().map(Exclude::id).collect();
    swatches
        .iter()
        .filter(|swatch| !excluded.contains(swatch.id()))
        .collect()
}

/// Fallback for a pool that cannot satisfy a request for `n` swatches.
///
/// `n <= 1` yields the error swatch alone. Larger requests keep whatever the
/// pool did find, in order, and pad with error swatches to exactly `n`.
pub fn invalidate<'a>(n: usize, pool: Vec<&'a EnrichedSwatch>) -> Selection<'a> {
    if n <= 1 {
        return Selection::One(Selected::Invalid);
    }

    let entries = pool
        .into_iter()
        .map(Selected::Swatch)
        .chain(iter::repeat(Selected::Invalid))
        .take(n)
        .collect();
    Selection::Many(entries)
}

/// Random draw from a pool that holds at least `n` swatches.
///
/// `n > 1` shuffles the pool and keeps the first `n`, so no swatch appears
/// twice. Otherwise a single swatch is picked uniformly.
pub fn output<'a, R: Rng + ?Sized>(
    rng: &mut R,
    mut pool: Vec<&'a EnrichedSwatch>,
    n: usize,
) -> Selection<'a> {
    if n > 1 {
        pool.shuffle(rng);
        pool.truncate(n);
        return Selection::Many(pool.into_iter().map(Selected::Swatch).collect());
    }

    Selection::One(
        pool.choose(rng)
            .copied()
            .map_or(Selected::Invalid, Selected::Swatch),
    )
}
