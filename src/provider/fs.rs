//! Filesystem-backed locale data
//!
//! Layout of a data root:
//!
//! ```text
//! <root>/manifest.toml                 syntax = "toml"
//! <root>/decimal/symbols@1/<tag>.toml  one file per locale
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use serde::Deserialize;

use super::{DataError, DecimalSymbolsProvider};
use crate::locale::Locale;
use crate::parser::parse_grouping_pattern_str;
use crate::types::{AffixPair, DecimalSymbols, GroupingSizes};

const MANIFEST_FILE: &str = "manifest.toml";
const SYMBOLS_DIR: [&str; 2] = ["decimal", "symbols@1"];
const DATA_EXTENSION: &str = "toml";

type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Deserialize)]
struct Manifest {
    syntax: String,
}

/// On-disk form of the decimal symbols of one locale
#[derive(Debug, Deserialize)]
struct DecimalSymbolsFile {
    #[serde(default = "default_minus_sign")]
    minus_sign: AffixPair,
    #[serde(default = "default_plus_sign")]
    plus_sign: AffixPair,
    decimal_separator: String,
    grouping_separator: String,
    zero_digit: String,
    /// CLDR decimal pattern, e.g. `#,##,##0.###`
    pattern: String,
    #[serde(default = "default_min_grouping_digits")]
    min_grouping_digits: u8,
}

fn default_minus_sign() -> AffixPair {
    AffixPair::prefix("-")
}

fn default_plus_sign() -> AffixPair {
    AffixPair::prefix("+")
}

fn default_min_grouping_digits() -> u8 {
    1
}

/// A data provider reading TOML files below a root directory
#[derive(Debug, Clone)]
pub struct FsDataProvider {
    root: PathBuf,
}

impl FsDataProvider {
    /// Open a data root
    ///
    /// Fails if the root is not a readable directory or its manifest is
    /// missing or names a syntax other than `toml`.
    pub fn try_new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let metadata = fs::metadata(&root).map_err(|source| DataError::Io {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(DataError::NotADirectory(root));
        }

        let manifest_path = root.join(MANIFEST_FILE);
        let manifest_text = match fs::read_to_string(&manifest_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DataError::MissingManifest(manifest_path));
            }
            Err(source) => {
                return Err(DataError::Io {
                    path: manifest_path,
                    source,
                });
            }
        };

        let manifest: Manifest =
            toml::from_str(&manifest_text).map_err(|source| DataError::Toml {
                path: manifest_path.clone(),
                source,
            })?;
        if manifest.syntax != DATA_EXTENSION {
            return Err(DataError::UnsupportedSyntax(manifest.syntax));
        }

        debug!("opened data root {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn symbols_dir(&self) -> PathBuf {
        SYMBOLS_DIR.iter().fold(self.root.clone(), |dir, part| dir.join(part))
    }

    fn symbols_path(&self, locale: &Locale) -> PathBuf {
        self.symbols_dir().join(format!("{locale}.{DATA_EXTENSION}"))
    }

    /// Locales that have a decimal symbols file, sorted by tag
    pub fn supported_locales(&self) -> Result<Vec<Locale>> {
        let dir = self.symbols_dir();
        let entries = fs::read_dir(&dir).map_err(|source| DataError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DataError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DATA_EXTENSION) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("skipping non UTF-8 data file {}", path.display());
                continue;
            };
            match Locale::try_from_str(stem) {
                Ok(locale) => locales.push(locale),
                Err(e) => warn!("skipping {}: {e}", path.display()),
            }
        }

        locales.sort_by_key(Locale::to_string);
        Ok(locales)
    }

    fn read_symbols_file(&self, path: &Path) -> Result<Option<DecimalSymbols>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(DataError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file: DecimalSymbolsFile = toml::from_str(&text).map_err(|source| DataError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        symbols_from_file(path, file).map(Some)
    }
}

fn symbols_from_file(path: &Path, file: DecimalSymbolsFile) -> Result<DecimalSymbols> {
    let malformed = |reason: String| DataError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let mut zero_chars = file.zero_digit.chars();
    let zero = match (zero_chars.next(), zero_chars.next()) {
        (Some(zero), None) => zero,
        _ => {
            return Err(malformed(format!(
                "zero_digit must be a single character, got {:?}",
                file.zero_digit
            )));
        }
    };
    let digits = DecimalSymbols::digits_from_zero(zero)
        .ok_or_else(|| malformed(format!("no ten digits start at {zero:?}")))?;

    let grouping = parse_grouping_pattern_str(&file.pattern)
        .ok_or_else(|| malformed(format!("invalid decimal pattern {:?}", file.pattern)))?;

    Ok(DecimalSymbols {
        minus_sign: file.minus_sign,
        plus_sign: file.plus_sign,
        decimal_separator: file.decimal_separator,
        grouping_separator: file.grouping_separator,
        digits,
        grouping_sizes: GroupingSizes {
            primary: grouping.primary,
            secondary: grouping.secondary,
            min_grouping: file.min_grouping_digits,
        },
    })
}

impl DecimalSymbolsProvider for FsDataProvider {
    fn load_decimal_symbols(&self, locale: &Locale) -> Result<DecimalSymbols> {
        for candidate in locale.fallback_chain() {
            let path = self.symbols_path(&candidate);
            trace!("looking for decimal symbols in {}", path.display());

            if let Some(symbols) = self.read_symbols_file(&path)? {
                if candidate != *locale {
                    debug!("decimal symbols for {locale} resolved through fallback to {candidate}");
                }
                return Ok(symbols);
            }
        }

        Err(DataError::MissingLocale(locale.clone()))
    }
}
