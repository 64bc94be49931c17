use log::trace;

use super::{DataError, DecimalSymbolsProvider};
use crate::locale::Locale;
use crate::types::DecimalSymbols;

/// A provider that needs no data and returns root-locale symbols for every locale
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantDataProvider;

impl DecimalSymbolsProvider for InvariantDataProvider {
    fn load_decimal_symbols(&self, locale: &Locale) -> Result<DecimalSymbols, DataError> {
        trace!("invariant decimal symbols for {locale}");
        Ok(DecimalSymbols::default())
    }
}
