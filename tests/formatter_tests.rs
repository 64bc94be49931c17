use std::path::{Path, PathBuf};

use fixed_decimal_format::{
    FixedDecimal, FixedDecimalFormat, FixedDecimalFormatOptions, FsDataProvider, GroupingStrategy,
    Locale, SignDisplay,
};

fn data_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/data")
}

fn formatter(tag: &str, options: FixedDecimalFormatOptions) -> FixedDecimalFormat {
    let provider = FsDataProvider::try_new(data_root()).unwrap();
    let locale = Locale::try_from_str(tag).unwrap();
    FixedDecimalFormat::try_new(&locale, &provider, options).unwrap()
}

fn fmt_with(tag: &str, value: &str, options: FixedDecimalFormatOptions) -> String {
    let decimal: FixedDecimal = value.parse().unwrap();
    formatter(tag, options).format_to_string(&decimal)
}

fn fmt(tag: &str, value: &str) -> String {
    fmt_with(tag, value, FixedDecimalFormatOptions::default())
}

#[test]
fn test_bengali_digits_and_grouping() {
    assert_eq!(fmt("bn", "1000007"), "১০,০০,০০৭");
    assert_eq!(fmt("bn", "12345678"), "১,২৩,৪৫,৬৭৮");
    assert_eq!(fmt("bn", "-1234.5"), "-১,২৩৪.৫");
    assert_eq!(fmt("bn", "999"), "৯৯৯");
}

#[test]
fn test_english() {
    assert_eq!(fmt("en", "1234567.891"), "1,234,567.891");
    assert_eq!(fmt("en", "1000"), "1,000");
    assert_eq!(fmt("en", "999"), "999");
    assert_eq!(fmt("en", "0.25"), "0.25");
}

#[test]
fn test_spanish_minimum_grouping_digits() {
    assert_eq!(fmt("es", "1234"), "1234");
    assert_eq!(fmt("es", "1234.5"), "1234,5");
    assert_eq!(fmt("es", "12345"), "12.345");
    assert_eq!(fmt("es", "-12345.67"), "-12.345,67");
}

#[test]
fn test_french_narrow_space() {
    assert_eq!(fmt("fr", "1234567.5"), "1\u{202F}234\u{202F}567,5");
}

#[test]
fn test_arabic_digits_and_sign() {
    assert_eq!(
        fmt("ar-EG", "-1234"),
        "\u{61C}-\u{661}\u{66C}\u{662}\u{663}\u{664}"
    );
    assert_eq!(fmt("ar-EG", "0.5"), "\u{660}\u{66B}\u{665}");
}

#[test]
fn test_locale_fallback() {
    assert_eq!(fmt("bn-BD", "1000007"), fmt("bn", "1000007"));
    // No data for German, so the root locale answers
    assert_eq!(fmt("de", "-1234.5"), "-1,234.5");
}

#[test]
fn test_grouping_strategies() {
    let with = |grouping_strategy| FixedDecimalFormatOptions {
        grouping_strategy,
        ..Default::default()
    };

    assert_eq!(fmt_with("en", "1234567", with(GroupingStrategy::Never)), "1234567");
    assert_eq!(fmt_with("en", "1000", with(GroupingStrategy::Always)), "1,000");
    assert_eq!(fmt_with("en", "1000", with(GroupingStrategy::Min2)), "1000");
    assert_eq!(fmt_with("en", "10000", with(GroupingStrategy::Min2)), "10,000");
    assert_eq!(fmt_with("es", "1234", with(GroupingStrategy::Always)), "1.234");
    assert_eq!(fmt_with("bn", "1000007", with(GroupingStrategy::Never)), "১০০০০০৭");
}

#[test]
fn test_sign_display() {
    let cases = [
        (SignDisplay::Auto, ["5", "-5", "0", "-0"]),
        (SignDisplay::Never, ["5", "5", "0", "0"]),
        (SignDisplay::Always, ["+5", "-5", "+0", "-0"]),
        (SignDisplay::ExceptZero, ["+5", "-5", "0", "0"]),
        (SignDisplay::Negative, ["5", "-5", "0", "0"]),
    ];

    for (sign_display, expected) in cases {
        let options = FixedDecimalFormatOptions {
            sign_display,
            ..Default::default()
        };
        for (input, expected) in ["5", "-5", "0", "-0"].iter().zip(expected) {
            assert_eq!(
                fmt_with("en", input, options),
                expected,
                "{input} with {sign_display:?}"
            );
        }
    }
}

#[test]
fn test_padding_is_rendered() {
    let options = FixedDecimalFormatOptions::new(GroupingStrategy::Never, SignDisplay::Auto);
    let fdf = formatter("en", options);

    let mut decimal = FixedDecimal::from(7);
    decimal.pad_start(4);
    decimal.pad_end(2);
    assert_eq!(fdf.format_to_string(&decimal), "0007.00");
}

#[test]
fn test_scale_and_negate_shifts_grouping() {
    let fdf = formatter("bn", FixedDecimalFormatOptions::default());
    let mut decimal = FixedDecimal::from(1000007);

    decimal.multiply_pow10(2).unwrap();
    decimal.negate();
    assert_eq!(fdf.format_to_string(&decimal), "-১০,০০,০০,৭০০");

    let mut decimal = FixedDecimal::from(1000007);
    decimal.multiply_pow10(-4).unwrap();
    let fdf = formatter("en", FixedDecimalFormatOptions::default());
    assert_eq!(fdf.format_to_string(&decimal), "100.0007");
}

#[test]
fn test_output_paths_agree_and_repeat() {
    let fdf = formatter("bn", FixedDecimalFormatOptions::default());
    let decimal = FixedDecimal::from(1000007);

    let owned = fdf.format_to_string(&decimal);
    let mut written = String::new();
    fdf.format_to_write(&decimal, &mut written).unwrap();
    let displayed = fdf.format(&decimal).to_string();

    assert_eq!(owned.as_bytes(), written.as_bytes());
    assert_eq!(owned, displayed);
    assert_eq!(fdf.format_to_string(&decimal), owned);
    assert_eq!(decimal, FixedDecimal::from(1000007));
}
