//! Query results.
//!
//! A query never fails outright: when it cannot be satisfied, the missing
//! entries are filled with [`ERROR_SWATCH`]. [`Selected`] and [`Selection`]
//! make that filler explicit so callers can branch on it without comparing
//! ids.

use serde::{Serialize, Serializer};

use crate::error::SelectionError;
use crate::models::{EnrichedSwatch, Exclude, ERROR_SWATCH};

/// One entry of a query result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selected<'a> {
    /// A real swatch from the palette
    Swatch(&'a EnrichedSwatch),
    /// The error swatch placeholder
    Invalid,
}

impl<'a> Selected<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Selected::Swatch(swatch) => swatch.id(),
            Selected::Invalid => ERROR_SWATCH.id,
        }
    }

    pub fn hex(&self) -> &'a str {
        match *self {
            Selected::Swatch(swatch) => swatch.hex(),
            Selected::Invalid => ERROR_SWATCH.hex,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Selected::Invalid)
    }

    pub fn swatch(&self) -> Option<&'a EnrichedSwatch> {
        match *self {
            Selected::Swatch(swatch) => Some(swatch),
            Selected::Invalid => None,
        }
    }
}

impl Serialize for Selected<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selected::Swatch(swatch) => swatch.serialize(serializer),
            Selected::Invalid => ERROR_SWATCH.serialize(serializer),
        }
    }
}

impl From<&Selected<'_>> for Exclude {
    fn from(selected: &Selected<'_>) -> Self {
        Exclude::from(selected.id())
    }
}

/// Result of a query: a single entry when one swatch was asked for,
/// a list of exactly the requested length otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Selection<'a> {
    One(Selected<'a>),
    Many(Vec<Selected<'a>>),
}

impl<'a> Selection<'a> {
    /// Number of entries, error swatches included.
    pub fn len(&self) -> usize {
        match self {
            Selection::One(_) => 1,
            Selection::Many(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selected<'a>> {
        match self {
            Selection::One(entry) => std::slice::from_ref(entry).iter(),
            Selection::Many(entries) => entries.iter(),
        }
    }

    /// Number of real swatches in the result.
    pub fn found(&self) -> usize {
        self.iter().filter(|entry| !entry.is_invalid()).count()
    }

    /// True when no entry is the error swatch.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|entry| !entry.is_invalid())
    }

    /// The first entry, or the error swatch if the result is empty.
    pub fn first(&self) -> Selected<'a> {
        self.iter().next().copied().unwrap_or(Selected::Invalid)
    }

    /// Real swatches only, in result order.
    pub fn swatches(&self) -> Vec<&'a EnrichedSwatch> {
        self.iter().filter_map(Selected::swatch).collect()
    }

    pub fn into_vec(self) -> Vec<Selected<'a>> {
        match self {
            Selection::One(entry) => vec![entry],
            Selection::Many(entries) => entries,
        }
    }

    /// Convert a padded result into an error.
    pub fn into_result(self) -> Result<Self, SelectionError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(SelectionError::Unsatisfied {
                found: self.found(),
                requested: self.len(),
            })
        }
    }
}

impl<'a> IntoIterator for Selection<'a> {
    type Item = Selected<'a>;
    type IntoIter = std::vec::IntoIter<Selected<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
