//! Text parsing for locale tags, decimal literals and CLDR number patterns
//!
//! The parsers are built with winnow and operate on `&mut &str`. Public
//! entry points consume the whole input and return `None` on failure; the
//! owning modules turn that into their own error types.

mod decimal;
mod locale_tag;
mod pattern;

pub use decimal::{DecimalParts, parse_decimal_str};
pub use locale_tag::{LocaleParts, parse_locale_tag_str};
pub use pattern::{PatternGrouping, parse_grouping_pattern_str};
