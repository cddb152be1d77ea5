//! Closed-interval lookup tables
//!
//! A [`RangeTable`] maps a scalar domain to typed values through a small set
//! of inclusive buckets. Tables are built once and are read-only afterwards.

use log::{debug, trace};
use ordered_float::OrderedFloat;

use super::error::RangeTableError;

/// An inclusive interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    lower: f64,
    upper: f64,
}

impl NumericRange {
    /// Returns `None` if either bound is NaN or `lower > upper`
    pub fn new(lower: f64, upper: f64) -> Option<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            None
        } else {
            Some(Self { lower, upper })
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Both ends are inclusive. NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// One bucket of a table
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTableEntry<V> {
    pub range: NumericRange,
    pub value: V,
}

/// An immutable piecewise lookup over closed intervals
///
/// Entries are scanned in ascending order of their lower bound and the first
/// entry containing the query wins. Entries sharing a lower bound keep the
/// order they were given in, so a value sitting on a boundary shared by two
/// buckets always resolves to the bucket that starts lower.
#[derive(Debug, Clone)]
pub struct RangeTable<V> {
    name: String,
    entries: Vec<RangeTableEntry<V>>,
}

impl<V> RangeTable<V> {
    /// Build a table from `(lower, upper, value)` triples
    ///
    /// Fails with [`RangeTableError::InvalidRangeDefinition`] on the first
    /// entry whose bounds are NaN or out of order. `index` refers to the
    /// position in the input sequence.
    pub fn build<I>(name: impl Into<String>, entries: I) -> Result<Self, RangeTableError>
    where
        I: IntoIterator<Item = (f64, f64, V)>,
    {
        let name = name.into();
        let mut built = Vec::new();

        for (index, (lower, upper, value)) in entries.into_iter().enumerate() {
            let range = NumericRange::new(lower, upper).ok_or_else(|| {
                RangeTableError::InvalidRangeDefinition {
                    table: name.clone(),
                    index,
                    lower,
                    upper,
                }
            })?;
            built.push(RangeTableEntry { range, value });
        }

        // Stable, so ties on the lower bound keep input order
        built.sort_by_key(|entry| OrderedFloat(entry.range.lower));

        debug!("Built range table '{}' with {} entries", name, built.len());

        Ok(Self {
            name,
            entries: built,
        })
    }

    /// Look up the value for `x`
    pub fn lookup(&self, x: f64) -> Result<&V, RangeTableError> {
        match self.entries.iter().find(|entry| entry.range.contains(x)) {
            Some(entry) => {
                trace!(
                    "Table '{}': {} matched [{}, {}]",
                    self.name,
                    x,
                    entry.range.lower,
                    entry.range.upper
                );
                Ok(&entry.value)
            }
            None => {
                debug!("Table '{}': no range contains {}", self.name, x);
                Err(RangeTableError::RangeNotFound {
                    value: x,
                    table: self.name.clone(),
                })
            }
        }
    }

    /// Whether any entry contains `x`
    pub fn contains(&self, x: f64) -> bool {
        self.entries.iter().any(|entry| entry.range.contains(x))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in scan order
    pub fn entries(&self) -> &[RangeTableEntry<V>] {
        &self.entries
    }

    /// The smallest lower bound and largest upper bound, or `None` for an
    /// empty table. Gaps between entries are not reflected here.
    pub fn domain(&self) -> Option<NumericRange> {
        let lower = self.entries.first()?.range.lower;
        let upper = self
            .entries
            .iter()
            .map(|entry| OrderedFloat(entry.range.upper))
            .max()?
            .into_inner();
        NumericRange::new(lower, upper)
    }
}
