//! Numeric unit constants shared across the simulator

/// Seconds per hour
pub const NUM_OF_SECONDS_PER_HOUR: u32 = 3600;

/// Size in bits of an integer on the theoretical platform
pub const INTEGER_SIZE: u32 = 32;
/// Size in bits of a double-precision float on the theoretical platform
pub const DOUBLE_SIZE: u32 = 64;
/// Size in bits of a boolean on the theoretical platform
pub const BOOLEAN_SIZE: u32 = 1;
/// Size in bits of an enumerated value on the theoretical platform
pub const ENUM_SIZE: u32 = 8;

pub const BITS_PER_BYTE: u32 = 8;
pub const BYTES_PER_KB: u32 = 1024;
pub const BITS_PER_KB: u32 = BYTES_PER_KB * BITS_PER_BYTE;
pub const BYTES_PER_MB: u32 = BYTES_PER_KB * 1024;

/// Tolerance for treating two doubles as equal: `|a - b| < DOUBLE_EQUAL_PRECISION`
pub const DOUBLE_EQUAL_PRECISION: f64 = 1e-10;

/// Looser tolerance for values carrying accumulated rounding error
pub const DOUBLE_EQUAL_WEAK_PRECISION: f64 = 1e-6;

/// `|a - b| < DOUBLE_EQUAL_PRECISION`
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < DOUBLE_EQUAL_PRECISION
}

/// `|a - b| < DOUBLE_EQUAL_WEAK_PRECISION`
#[inline]
pub fn weakly_approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < DOUBLE_EQUAL_WEAK_PRECISION
}
