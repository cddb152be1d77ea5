//! Error types for range table construction and lookup

use thiserror::Error;

/// Errors raised by a [`RangeTable`](super::RangeTable)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeTableError {
    /// The queried value falls outside every configured interval
    #[error("No value could be found in table '{table}' for the given value of {value}")]
    RangeNotFound { value: f64, table: String },

    /// An entry's bounds are NaN or out of order
    #[error("Invalid range in table '{table}' at entry {index}: [{lower}, {upper}]")]
    InvalidRangeDefinition {
        table: String,
        index: usize,
        lower: f64,
        upper: f64,
    },
}
