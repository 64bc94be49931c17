//! Locale-aware decimal formatting
//!
//! This module renders a [`FixedDecimal`] with the digits, separators and
//! sign affixes of a locale. The main entry point is
//! [`FixedDecimalFormat::try_new`].

mod grouper;
mod sign;

use std::fmt::{self, Write};

use log::debug;

use crate::decimal::FixedDecimal;
use crate::locale::Locale;
use crate::provider::{DataError, DecimalSymbolsProvider};
use crate::types::{DecimalSymbols, FixedDecimalFormatOptions};

use self::sign::Sign;

/// Error type for formatter construction
#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    #[error("failed to load decimal symbols: {0}")]
    Data(#[from] DataError),
}

/// Formats fixed decimals for one locale and one set of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDecimalFormat {
    symbols: DecimalSymbols,
    options: FixedDecimalFormatOptions,
}

impl FixedDecimalFormat {
    /// Load the locale's symbols from `provider` and build a formatter
    ///
    /// # Examples
    /// ```
    /// use fixed_decimal_format::{FixedDecimal, FixedDecimalFormat, Locale};
    /// use fixed_decimal_format::provider::InvariantDataProvider;
    ///
    /// let locale = Locale::try_from_str("en").unwrap();
    /// let fdf = FixedDecimalFormat::try_new(&locale, &InvariantDataProvider, Default::default())
    ///     .unwrap();
    /// assert_eq!(fdf.format_to_string(&FixedDecimal::from(-1234567)), "-1,234,567");
    /// ```
    pub fn try_new<P>(
        locale: &Locale,
        provider: &P,
        options: FixedDecimalFormatOptions,
    ) -> Result<Self, FormatterError>
    where
        P: DecimalSymbolsProvider + ?Sized,
    {
        let symbols = provider.load_decimal_symbols(locale)?;
        debug!("created decimal formatter for {locale} with {options:?}");
        Ok(Self::from_symbols(symbols, options))
    }

    /// Build a formatter from symbols that are already loaded
    pub fn from_symbols(symbols: DecimalSymbols, options: FixedDecimalFormatOptions) -> Self {
        Self { symbols, options }
    }

    pub fn symbols(&self) -> &DecimalSymbols {
        &self.symbols
    }

    pub fn options(&self) -> FixedDecimalFormatOptions {
        self.options
    }

    /// A lazily formatted view of `value`; nothing is rendered until it is written
    pub fn format<'l>(&'l self, value: &'l FixedDecimal) -> FormattedFixedDecimal<'l> {
        FormattedFixedDecimal {
            value,
            symbols: &self.symbols,
            options: self.options,
        }
    }

    /// Format `value` into a new string
    pub fn format_to_string(&self, value: &FixedDecimal) -> String {
        self.format(value).to_string()
    }

    /// Append the formatted `value` to a caller-supplied sink
    pub fn format_to_write<W>(&self, value: &FixedDecimal, sink: &mut W) -> fmt::Result
    where
        W: Write + ?Sized,
    {
        self.format(value).write_to(sink)
    }
}

/// A [`FixedDecimal`] paired with the symbols and options to render it
#[derive(Debug, Clone, Copy)]
pub struct FormattedFixedDecimal<'l> {
    value: &'l FixedDecimal,
    symbols: &'l DecimalSymbols,
    options: FixedDecimalFormatOptions,
}

impl FormattedFixedDecimal<'_> {
    /// Write the formatted number to `sink`
    pub fn write_to<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: Write + ?Sized,
    {
        let affixes = match sign::select(self.options.sign_display, self.value) {
            Some(Sign::Negative) => Some(&self.symbols.minus_sign),
            Some(Sign::Positive) => Some(&self.symbols.plus_sign),
            None => None,
        };

        if let Some(affixes) = affixes {
            sink.write_str(&affixes.prefix)?;
        }

        let range = self.value.magnitude_range();
        let upper_magnitude = *range.end();
        for magnitude in range.rev() {
            if magnitude == -1 {
                sink.write_str(&self.symbols.decimal_separator)?;
            }
            let digit = self.value.digit_at(magnitude);
            sink.write_char(self.symbols.digits[usize::from(digit)])?;
            if grouper::check(
                upper_magnitude,
                magnitude,
                self.options.grouping_strategy,
                &self.symbols.grouping_sizes,
            ) {
                sink.write_str(&self.symbols.grouping_separator)?;
            }
        }

        if let Some(affixes) = affixes {
            sink.write_str(&affixes.suffix)?;
        }

        Ok(())
    }
}

impl fmt::Display for FormattedFixedDecimal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
