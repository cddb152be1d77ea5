//! Shared simulator configuration
//!
//! Unit constants, display presets, velocity lookup tables, and the direction
//! vocabulary used by the motion-planning and intersection components.

mod directions;
mod error;
mod format;
mod range_table;
mod units;
mod velocity;

pub use directions::{CardinalDirection, LightStatus, TurnDirection};
pub use error::RangeTableError;
pub use format::{NumberFormat, LEADING_ZEROES, ONE_DEC, TEN_DEC, TWO_DEC, ZERO_DEC};
pub use range_table::{NumericRange, RangeTable, RangeTableEntry};
pub use units::{
    approx_eq, weakly_approx_eq, BITS_PER_BYTE, BITS_PER_KB, BOOLEAN_SIZE, BYTES_PER_KB,
    BYTES_PER_MB, DOUBLE_EQUAL_PRECISION, DOUBLE_EQUAL_WEAK_PRECISION, DOUBLE_SIZE, ENUM_SIZE,
    INTEGER_SIZE, NUM_OF_SECONDS_PER_HOUR,
};
pub use velocity::{
    VelocityParameterCatalog, EDGE_TILE_TIME_BUFFER_TABLE, MINIMUM_FOLLOWING_DISTANCE_TABLE,
};
