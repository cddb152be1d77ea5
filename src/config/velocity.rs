//! Velocity-dependent safety parameters
//!
//! Both tables cover velocities in [0, 80]. Adjacent buckets share their
//! boundary value; a query on a boundary resolves to the lower bucket.

use super::error::RangeTableError;
use super::range_table::RangeTable;

pub const EDGE_TILE_TIME_BUFFER_TABLE: &str = "edge_tile_time_buffer";
pub const MINIMUM_FOLLOWING_DISTANCE_TABLE: &str = "minimum_following_distance";

/// Edge tile time buffer in seconds, per velocity bucket
const EDGE_TILE_TIME_BUFFER: [(f64, f64, f64); 7] = [
    (0.0, 15.0, 0.3),
    (15.0, 30.0, 0.5),
    (30.0, 45.0, 0.7),
    (45.0, 55.0, 0.9),
    (55.0, 65.0, 1.1),
    (65.0, 75.0, 1.3),
    (75.0, 80.0, 1.5),
];

/// Minimum gap between two vehicles, per velocity bucket
const MINIMUM_FOLLOWING_DISTANCE: [(f64, f64, f64); 7] = [
    (0.0, 15.0, 0.5),
    (15.0, 30.0, 0.6),
    (30.0, 45.0, 0.9),
    (45.0, 55.0, 1.1),
    (55.0, 65.0, 1.2),
    (65.0, 75.0, 1.3),
    (75.0, 80.0, 1.5),
];

/// The two velocity lookup tables used by motion planning
///
/// Build it once at startup and hand out references (or wrap it in an `Arc`)
/// to every consumer.
#[derive(Debug, Clone)]
pub struct VelocityParameterCatalog {
    pub edge_tile_time_buffer: RangeTable<f64>,
    pub minimum_following_distance: RangeTable<f64>,
}

impl VelocityParameterCatalog {
    pub fn new() -> Result<Self, RangeTableError> {
        Ok(Self {
            edge_tile_time_buffer: RangeTable::build(
                EDGE_TILE_TIME_BUFFER_TABLE,
                EDGE_TILE_TIME_BUFFER,
            )?,
            minimum_following_distance: RangeTable::build(
                MINIMUM_FOLLOWING_DISTANCE_TABLE,
                MINIMUM_FOLLOWING_DISTANCE,
            )?,
        })
    }

    /// Edge tile time buffer (seconds) for the given velocity
    pub fn edge_tile_time_buffer(&self, velocity: f64) -> Result<f64, RangeTableError> {
        self.edge_tile_time_buffer.lookup(velocity).copied()
    }

    /// Minimum following distance for the given velocity
    pub fn minimum_following_distance(&self, velocity: f64) -> Result<f64, RangeTableError> {
        self.minimum_following_distance.lookup(velocity).copied()
    }
}
