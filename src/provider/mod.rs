//! Sources of locale data
//!
//! A provider turns a [`Locale`] into the [`DecimalSymbols`] a formatter
//! needs. [`FsDataProvider`] reads TOML files from a data directory;
//! [`InvariantDataProvider`] answers every request with root-locale symbols.

mod fs;
mod invariant;

use std::path::PathBuf;

use crate::locale::Locale;
use crate::types::DecimalSymbols;

pub use fs::FsDataProvider;
pub use invariant::InvariantDataProvider;

/// Error type for data loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("data root has no manifest: {0}")]
    MissingManifest(PathBuf),

    #[error("unsupported data syntax: {0:?}")]
    UnsupportedSyntax(String),

    #[error("failed to parse TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed data in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("no decimal symbols for locale {0}")]
    MissingLocale(Locale),
}

/// Supplies decimal formatting symbols for a locale
pub trait DecimalSymbolsProvider {
    fn load_decimal_symbols(&self, locale: &Locale) -> Result<DecimalSymbols, DataError>;
}
