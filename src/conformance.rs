//! Fixed decimal conformance check
//!
//! Formats 1,000,007 for Bengali through both output paths of
//! [`FixedDecimalFormat`], then scales and negates it and formats again,
//! comparing every result against the expected localized string.
//!
//! Progress lines go to the supplied writer. A mismatch stops the check at
//! the first failing comparison and is reported as
//! [`CheckOutcome::Mismatch`]; errors while building the locale, provider or
//! formatter are returned as [`CheckError`].

use std::fmt;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::decimal::{DecimalError, FixedDecimal};
use crate::formatter::{FixedDecimalFormat, FormatterError};
use crate::locale::{Locale, LocaleError};
use crate::provider::{DataError, FsDataProvider};
use crate::types::{FixedDecimalFormatOptions, GroupingStrategy, SignDisplay};

/// Data directory of the check, relative to the crate root
pub const DATA_ROOT: &str = "testdata/data";

pub const CHECK_LOCALE: &str = "bn";
pub const CHECK_VALUE: i64 = 1_000_007;
pub const EXPECTED_FORMATTED: &str = "১০,০০,০০৭";
pub const EXPECTED_SCALED_NEGATED: &str = "-১০,০০,০০,৭০০";

const MISMATCH_MESSAGE: &str = "Output does not match expected output";

/// Exit code constants for the check binary.
pub mod codes {
    /// Every comparison matched.
    pub const SUCCESS: u8 = 0;
    /// A formatted string differed from the expected one.
    pub const MISMATCH: u8 = 1;
    /// The locale, data provider or formatter could not be created.
    pub const SETUP_ERROR: u8 = 2;
}

/// Errors that stop the check before a comparison can be made
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid locale: {0}")]
    Locale(#[from] LocaleError),

    #[error("failed to open data provider: {0}")]
    Data(#[from] DataError),

    #[error("failed to create formatter: {0}")]
    Formatter(#[from] FormatterError),

    #[error("decimal arithmetic failed: {0}")]
    Decimal(#[from] DecimalError),

    #[error("failed to format into buffer")]
    Format(#[from] fmt::Error),

    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

/// The comparison a check step performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStep {
    /// Owned-string formatting of the original value
    Format,
    /// Formatting into a caller-supplied buffer
    FormatToWrite,
    /// Owned-string formatting after multiplying by 100 and negating
    ScaledAndNegated,
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckStep::Format => "format",
            CheckStep::FormatToWrite => "format_to_write",
            CheckStep::ScaledAndNegated => "scaled_and_negated",
        };
        f.write_str(name)
    }
}

/// Result of a check that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Mismatch {
        step: CheckStep,
        expected: String,
        actual: String,
    },
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// Map the result of a check run to a process exit code.
pub fn exit_code(result: &Result<CheckOutcome, CheckError>) -> u8 {
    match result {
        Ok(CheckOutcome::Passed) => codes::SUCCESS,
        Ok(CheckOutcome::Mismatch { .. }) => codes::MISMATCH,
        Err(_) => codes::SETUP_ERROR,
    }
}

fn compare<W: Write>(
    out: &mut W,
    step: CheckStep,
    expected: &str,
    actual: &str,
) -> Result<Option<CheckOutcome>, CheckError> {
    if actual == expected {
        debug!("step {step} matched");
        return Ok(None);
    }

    writeln!(out, "{MISMATCH_MESSAGE}")?;
    Ok(Some(CheckOutcome::Mismatch {
        step,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }))
}

/// Run the check against the data below `data_root`
pub fn run_fixed_decimal_check<W: Write>(
    data_root: &Path,
    out: &mut W,
) -> Result<CheckOutcome, CheckError> {
    let locale = Locale::try_from_str(CHECK_LOCALE)?;
    writeln!(out, "Running test for locale {}", locale.to_display_string())?;

    let provider = FsDataProvider::try_new(data_root)?;
    let options = FixedDecimalFormatOptions::new(GroupingStrategy::Auto, SignDisplay::Auto);
    let fdf = FixedDecimalFormat::try_new(&locale, &provider, options)?;

    let mut decimal = FixedDecimal::from(CHECK_VALUE);

    let formatted = fdf.format_to_string(&decimal);
    writeln!(out, "Formatted value is {formatted}")?;
    if let Some(mismatch) = compare(out, CheckStep::Format, EXPECTED_FORMATTED, &formatted)? {
        return Ok(mismatch);
    }

    let mut written = String::new();
    fdf.format_to_write(&decimal, &mut written)?;
    writeln!(out, "Formatted writeable value is {written}")?;
    if let Some(mismatch) = compare(out, CheckStep::FormatToWrite, EXPECTED_FORMATTED, &written)? {
        return Ok(mismatch);
    }

    decimal.multiply_pow10(2)?;
    decimal.negate();
    let formatted = fdf.format_to_string(&decimal);
    writeln!(out, "Value x100 and negated is {formatted}")?;
    if let Some(mismatch) = compare(
        out,
        CheckStep::ScaledAndNegated,
        EXPECTED_SCALED_NEGATED,
        &formatted,
    )? {
        return Ok(mismatch);
    }

    info!("fixed decimal check passed for {locale}");
    Ok(CheckOutcome::Passed)
}
