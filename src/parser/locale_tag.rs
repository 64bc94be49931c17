use winnow::combinator::{opt, preceded};
use winnow::token::{one_of, take_while};
use winnow::{ModalResult, Parser};

/// Borrowed subtags of a locale identifier, not yet case-normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleParts<'s> {
    pub language: &'s str,
    pub script: Option<&'s str>,
    pub region: Option<&'s str>,
}

fn is_language(subtag: &str) -> bool {
    matches!(subtag.len(), 2..=3 | 5..=8) && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

fn parse_subtag<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

fn parse_separator(input: &mut &str) -> ModalResult<char> {
    one_of(['-', '_']).parse_next(input)
}

/// Parse `language[-script][-region]`, accepting `-` or `_` between subtags
pub fn parse_locale_tag<'s>(input: &mut &'s str) -> ModalResult<LocaleParts<'s>> {
    let language = parse_subtag.verify(is_language).parse_next(input)?;
    let script = opt(preceded(parse_separator, parse_subtag.verify(is_script))).parse_next(input)?;
    let region = opt(preceded(parse_separator, parse_subtag.verify(is_region))).parse_next(input)?;

    Ok(LocaleParts {
        language,
        script,
        region,
    })
}

/// Parse a complete locale tag; trailing input is an error
pub fn parse_locale_tag_str(tag: &str) -> Option<LocaleParts<'_>> {
    parse_locale_tag.parse(tag).ok()
}
