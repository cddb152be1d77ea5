//! Number display presets
//!
//! Each preset mirrors a decimal pattern: `#` marks an optional integer digit,
//! `0` a required one, and the digits after the point are always printed.

/// A fixed decimal display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    min_integer_digits: usize,
    fraction_digits: usize,
}

/// `#`
pub const ZERO_DEC: NumberFormat = NumberFormat::new(0, 0);
/// `#.0`
pub const ONE_DEC: NumberFormat = NumberFormat::new(0, 1);
/// `#.00`
pub const TWO_DEC: NumberFormat = NumberFormat::new(0, 2);
/// `#.0000000000`
pub const TEN_DEC: NumberFormat = NumberFormat::new(0, 10);
/// `00000000`, at least eight digits with leading zeroes
pub const LEADING_ZEROES: NumberFormat = NumberFormat::new(8, 0);

impl NumberFormat {
    pub const fn new(min_integer_digits: usize, fraction_digits: usize) -> Self {
        Self {
            min_integer_digits,
            fraction_digits,
        }
    }

    pub fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// Render `value` with this format
    ///
    /// A zero integer part is omitted when there are fraction digits and no
    /// minimum integer width (`.5` rather than `0.5`). Values that round to
    /// zero carry no sign. Non-finite values print as Rust prints them.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.*}", self.fraction_digits, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (rounded.as_str(), None),
        };

        let is_zero = !rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let mut out = String::with_capacity(rounded.len() + self.min_integer_digits + 1);
        if value < 0.0 && !is_zero {
            out.push('-');
        }

        let significant = int_part.trim_start_matches('0');
        let width = if significant.is_empty() && frac_part.is_none() {
            self.min_integer_digits.max(1)
        } else {
            self.min_integer_digits
        };
        for _ in significant.len()..width {
            out.push('0');
        }
        out.push_str(significant);

        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}
