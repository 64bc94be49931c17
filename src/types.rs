//! Type definitions shared by the provider and the formatter
//!
//! This module defines the formatting options a caller picks and the
//! locale-specific symbols a data provider supplies.

use serde::Deserialize;

/// Policy for inserting grouping separators into the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// Group when the locale data says so, honoring its minimum grouping digits
    #[default]
    Auto,
    /// Never insert grouping separators
    Never,
    /// Group whenever the integer part is long enough, ignoring minimum grouping digits
    Always,
    /// Group only when the leading group would contain at least two digits
    Min2,
}

/// Policy for showing a sign in front of (or after) the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignDisplay {
    /// Minus sign for negative numbers, including negative zero
    #[default]
    Auto,
    /// No sign at all
    Never,
    /// Plus or minus sign on every number
    Always,
    /// Plus or minus sign on non-zero numbers only
    ExceptZero,
    /// Minus sign on negative non-zero numbers only
    Negative,
}

/// Options for [`FixedDecimalFormat`](crate::formatter::FixedDecimalFormat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FixedDecimalFormatOptions {
    pub grouping_strategy: GroupingStrategy,
    pub sign_display: SignDisplay,
}

impl FixedDecimalFormatOptions {
    pub fn new(grouping_strategy: GroupingStrategy, sign_display: SignDisplay) -> Self {
        Self {
            grouping_strategy,
            sign_display,
        }
    }
}

/// Text placed before and after the digits to express a sign
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AffixPair {
    pub prefix: String,
    pub suffix: String,
}

impl AffixPair {
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: String::new(),
        }
    }
}

/// Sizes of digit groups, counted from the decimal separator
///
/// A primary size of zero disables grouping for the locale. A secondary
/// size of zero means "same as primary".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingSizes {
    /// Size of the group closest to the decimal separator
    pub primary: u8,
    /// Size of every further group
    pub secondary: u8,
    /// Minimum number of digits in front of the first separator
    pub min_grouping: u8,
}

impl Default for GroupingSizes {
    fn default() -> Self {
        Self {
            primary: 3,
            secondary: 3,
            min_grouping: 1,
        }
    }
}

/// Locale-specific symbols needed to render a decimal number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSymbols {
    pub minus_sign: AffixPair,
    pub plus_sign: AffixPair,
    pub decimal_separator: String,
    pub grouping_separator: String,
    /// Digits zero through nine
    pub digits: [char; 10],
    pub grouping_sizes: GroupingSizes,
}

impl Default for DecimalSymbols {
    /// Root-locale symbols: ASCII digits, `.` as decimal and `,` as grouping separator
    fn default() -> Self {
        Self {
            minus_sign: AffixPair::prefix("-"),
            plus_sign: AffixPair::prefix("+"),
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            grouping_sizes: GroupingSizes::default(),
        }
    }
}

impl DecimalSymbols {
    /// Build the ten digits from the code point of the zero digit
    ///
    /// Returns `None` if any of the nine following code points is not a valid `char`.
    pub fn digits_from_zero(zero: char) -> Option<[char; 10]> {
        let mut digits = ['0'; 10];
        for (offset, slot) in digits.iter_mut().enumerate() {
            *slot = char::from_u32(zero as u32 + offset as u32)?;
        }
        Some(digits)
    }
}
