//! Exact fixed-point decimal numbers
//!
//! [`FixedDecimal`] stores a decimal as a string of digits plus the power of
//! ten of its first digit. It never goes through floating point, so values
//! such as `1000007` or `0.1` are represented exactly. Besides the
//! significant digits it tracks how many leading and trailing zeros should
//! be displayed.

use std::cmp;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::parser::parse_decimal_str;

/// Error type for decimal operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// A magnitude would leave the range of `i16`
    #[error("magnitude out of range")]
    Limit,
    /// The input is not a plain decimal literal
    #[error("invalid decimal literal: {0:?}")]
    Syntax(String),
}

type Result<T> = std::result::Result<T, DecimalError>;

/// A signed decimal number with an explicit display range
///
/// Invariants:
/// - `digits` holds the significant digits, most significant first, with no
///   leading or trailing zeros; it is empty for zero. Its length may exceed
///   `i16::MAX`, so digit offsets are computed in `i32`.
/// - `magnitude` is the power of ten of `digits[0]` (zero when `digits` is empty).
/// - `lower_magnitude <= 0 <= upper_magnitude`, and every significant digit
///   lies inside `lower_magnitude..=upper_magnitude`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedDecimal {
    digits: Vec<u8>,
    magnitude: i16,
    upper_magnitude: i16,
    lower_magnitude: i16,
    is_negative: bool,
}

impl FixedDecimal {
    fn from_unsigned(value: u64) -> Self {
        let mut result = Self::default();
        if value == 0 {
            return result;
        }

        let mut remaining = value;
        let mut reversed = Vec::with_capacity(20);
        while remaining > 0 {
            reversed.push((remaining % 10) as u8);
            remaining /= 10;
        }

        // u64 has at most 20 digits
        let magnitude = reversed.len() as i16 - 1;
        let trailing_zeros = reversed.iter().take_while(|&&d| d == 0).count();
        reversed.drain(..trailing_zeros);
        reversed.reverse();

        result.digits = reversed;
        result.magnitude = magnitude;
        result.upper_magnitude = magnitude;
        result
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.is_negative = negative;
    }

    /// Flip the sign in place
    pub fn negate(&mut self) {
        self.is_negative = !self.is_negative;
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// The digit at the given power of ten; zero outside the significant digits
    pub fn digit_at(&self, magnitude: i16) -> u8 {
        if self.digits.is_empty() || magnitude > self.magnitude {
            return 0;
        }
        let index = (self.magnitude as i32 - magnitude as i32) as usize;
        self.digits.get(index).copied().unwrap_or(0)
    }

    /// Magnitudes to display, lowest first
    pub fn magnitude_range(&self) -> RangeInclusive<i16> {
        self.lower_magnitude..=self.upper_magnitude
    }

    /// Magnitude of the most significant non-zero digit, or zero
    pub fn nonzero_magnitude_start(&self) -> i16 {
        self.magnitude
    }

    /// Magnitude of the least significant non-zero digit, or zero
    pub fn nonzero_magnitude_end(&self) -> i16 {
        if self.digits.is_empty() {
            0
        } else {
            // The last digit never sits below lower_magnitude, so the result fits in i16
            let end = i32::from(self.magnitude) - (self.digits.len() as i32 - 1);
            i16::try_from(end).unwrap_or(self.lower_magnitude)
        }
    }

    /// Multiply by `10^delta` in place
    ///
    /// Leading and trailing zero padding moves with the digits, but the
    /// display range always keeps magnitude zero. On overflow the value is
    /// left unchanged.
    pub fn multiply_pow10(&mut self, delta: i16) -> Result<()> {
        if delta == 0 || self.is_zero() {
            return Ok(());
        }

        if delta > 0 {
            let upper = self
                .upper_magnitude
                .checked_add(delta)
                .ok_or(DecimalError::Limit)?;
            self.magnitude += delta;
            self.upper_magnitude = upper;
            self.lower_magnitude = cmp::min(0, self.lower_magnitude + delta);
        } else {
            let lower = self
                .lower_magnitude
                .checked_add(delta)
                .ok_or(DecimalError::Limit)?;
            self.magnitude += delta;
            self.lower_magnitude = lower;
            self.upper_magnitude = cmp::max(0, self.upper_magnitude + delta);
        }

        Ok(())
    }

    /// Show exactly `count` integer digits, or more if the value needs them
    pub fn pad_start(&mut self, count: i16) {
        let needed = if self.is_zero() {
            0
        } else {
            cmp::max(0, self.nonzero_magnitude_start())
        };
        self.upper_magnitude = cmp::max(needed, count.saturating_sub(1));
    }

    /// Show exactly `count` fraction digits, or more if the value needs them
    pub fn pad_end(&mut self, count: i16) {
        let needed = if self.is_zero() {
            0
        } else {
            cmp::min(0, self.nonzero_magnitude_end())
        };
        self.lower_magnitude = cmp::min(needed, count.saturating_neg());
    }
}

impl From<u64> for FixedDecimal {
    fn from(value: u64) -> Self {
        Self::from_unsigned(value)
    }
}

impl From<i64> for FixedDecimal {
    fn from(value: i64) -> Self {
        let mut result = Self::from_unsigned(value.unsigned_abs());
        result.is_negative = value < 0;
        result
    }
}

impl From<u32> for FixedDecimal {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<i32> for FixedDecimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for FixedDecimal {
    type Err = DecimalError;

    /// Parse `[+-]digits[.digits]`
    ///
    /// Leading zeros of the integer part and trailing zeros of the fraction
    /// are kept as display padding: `"007.50"` shows three integer and two
    /// fraction digits.
    fn from_str(s: &str) -> Result<Self> {
        let parts = parse_decimal_str(s).ok_or_else(|| DecimalError::Syntax(s.to_string()))?;

        let integer_len = i16::try_from(parts.integer.len()).map_err(|_| DecimalError::Limit)?;
        let fraction_len = i16::try_from(parts.fraction.len()).map_err(|_| DecimalError::Limit)?;

        let all_digits: Vec<u8> = parts
            .integer
            .bytes()
            .chain(parts.fraction.bytes())
            .map(|b| b - b'0')
            .collect();

        let mut result = FixedDecimal {
            upper_magnitude: cmp::max(0, integer_len - 1),
            lower_magnitude: -fraction_len,
            is_negative: parts.negative,
            ..Default::default()
        };

        let first = all_digits.iter().position(|&d| d != 0);
        let last = all_digits.iter().rposition(|&d| d != 0);
        if let (Some(first), Some(last)) = (first, last) {
            let first_offset = i32::try_from(first).map_err(|_| DecimalError::Limit)?;
            let magnitude = i32::from(integer_len) - 1 - first_offset;
            result.magnitude = i16::try_from(magnitude).map_err(|_| DecimalError::Limit)?;
            result.digits = all_digits[first..=last].to_vec();
        }

        Ok(result)
    }
}

impl fmt::Display for FixedDecimal {
    /// Plain ASCII rendering, e.g. `-1000.70`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            f.write_str("-")?;
        }
        for magnitude in self.magnitude_range().rev() {
            if magnitude == -1 {
                f.write_str(".")?;
            }
            write!(f, "{}", self.digit_at(magnitude))?;
        }
        Ok(())
    }
}
