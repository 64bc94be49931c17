use std::fs;
use std::path::{Path, PathBuf};

use fixed_decimal_format::{
    DataError, DecimalSymbols, DecimalSymbolsProvider, FsDataProvider, GroupingSizes,
    InvariantDataProvider, Locale,
};
use tempfile::TempDir;

const SR_SYMBOLS: &str = r##"
decimal_separator = ","
grouping_separator = "."
zero_digit = "0"
pattern = "#,##0.###"
"##;

fn testdata_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/data")
}

fn write_root(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("manifest.toml"), "syntax = \"toml\"\n").unwrap();

    let symbols_dir = dir.path().join("decimal").join("symbols@1");
    fs::create_dir_all(&symbols_dir).unwrap();
    for (name, content) in files {
        fs::write(symbols_dir.join(name), content).unwrap();
    }
    dir
}

fn locale(tag: &str) -> Locale {
    Locale::try_from_str(tag).unwrap()
}

#[test]
fn test_supported_locales() {
    let provider = FsDataProvider::try_new(testdata_root()).unwrap();
    let tags: Vec<String> = provider
        .supported_locales()
        .unwrap()
        .iter()
        .map(Locale::to_string)
        .collect();
    assert_eq!(tags, vec!["ar-EG", "bn", "en", "es", "fr", "und"]);
}

#[test]
fn test_load_bengali() {
    let provider = FsDataProvider::try_new(testdata_root()).unwrap();
    let symbols = provider.load_decimal_symbols(&locale("bn")).unwrap();

    assert_eq!(symbols.digits[1], '১');
    assert_eq!(symbols.grouping_separator, ",");
    assert_eq!(symbols.minus_sign.prefix, "-");
    assert_eq!(
        symbols.grouping_sizes,
        GroupingSizes {
            primary: 3,
            secondary: 2,
            min_grouping: 1
        }
    );
}

#[test]
fn test_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let err = FsDataProvider::try_new(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }), "{err}");
}

#[test]
fn test_root_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.toml");
    fs::write(&file, "").unwrap();

    let err = FsDataProvider::try_new(&file).unwrap_err();
    assert!(matches!(err, DataError::NotADirectory(path) if path == file));
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let err = FsDataProvider::try_new(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::MissingManifest(_)), "{err}");
}

#[test]
fn test_unsupported_syntax() {
    let dir = write_root(&[]);
    fs::write(dir.path().join("manifest.toml"), "syntax = \"json\"\n").unwrap();

    let err = FsDataProvider::try_new(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::UnsupportedSyntax(syntax) if syntax == "json"));
}

#[test]
fn test_manifest_not_toml() {
    let dir = write_root(&[]);
    let manifest = dir.path().join("manifest.toml");
    fs::write(&manifest, "syntax = \n").unwrap();

    let err = FsDataProvider::try_new(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::Toml { ref path, .. } if *path == manifest), "{err}");
}

#[test]
fn test_fallback_to_language() {
    let dir = write_root(&[("sr.toml", SR_SYMBOLS)]);
    let provider = FsDataProvider::try_new(dir.path()).unwrap();

    let symbols = provider.load_decimal_symbols(&locale("sr-Latn-RS")).unwrap();
    assert_eq!(symbols.decimal_separator, ",");
    assert_eq!(symbols.grouping_separator, ".");
}

#[test]
fn test_missing_locale() {
    let dir = write_root(&[("sr.toml", SR_SYMBOLS)]);
    let provider = FsDataProvider::try_new(dir.path()).unwrap();

    let err = provider.load_decimal_symbols(&locale("bn")).unwrap_err();
    assert!(matches!(err, DataError::MissingLocale(l) if l == locale("bn")));
}

#[test]
fn test_malformed_files() {
    let empty_zero_digit = SR_SYMBOLS.replace("\"0\"", "\"\"");
    let dir = write_root(&[
        ("sr.toml", "decimal_separator = "),
        ("bn.toml", empty_zero_digit.as_str()),
    ]);
    let provider = FsDataProvider::try_new(dir.path()).unwrap();

    let err = provider.load_decimal_symbols(&locale("sr")).unwrap_err();
    assert!(matches!(err, DataError::Toml { .. }), "{err}");

    let err = provider.load_decimal_symbols(&locale("bn")).unwrap_err();
    assert!(matches!(err, DataError::Malformed { .. }), "{err}");
}

#[test]
fn test_supported_locales_skips_other_files() {
    let dir = write_root(&[
        ("sr.toml", SR_SYMBOLS),
        ("README.md", "not data"),
        ("not a locale.toml", SR_SYMBOLS),
    ]);
    let provider = FsDataProvider::try_new(dir.path()).unwrap();

    assert_eq!(provider.supported_locales().unwrap(), vec![locale("sr")]);
}

#[test]
fn test_invariant_provider() {
    let symbols = InvariantDataProvider
        .load_decimal_symbols(&locale("bn"))
        .unwrap();
    assert_eq!(symbols, DecimalSymbols::default());
}
