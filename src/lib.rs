pub mod conformance;
pub mod decimal;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod provider;
pub mod types;

pub use decimal::{DecimalError, FixedDecimal};
pub use formatter::{FixedDecimalFormat, FormattedFixedDecimal, FormatterError};
pub use locale::{Locale, LocaleError};
pub use provider::{DataError, DecimalSymbolsProvider, FsDataProvider, InvariantDataProvider};
pub use types::*;
