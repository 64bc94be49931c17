use winnow::ascii::digit0;
use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

/// Pieces of a plain decimal literal such as `-0012.3400`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts<'s> {
    pub negative: bool,
    /// Integer digits, leading zeros included
    pub integer: &'s str,
    /// Fraction digits, trailing zeros included
    pub fraction: &'s str,
}

fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['-', '+']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// Parse `[+-]digits[.digits]`; at least one digit must be present
pub fn parse_decimal<'s>(input: &mut &'s str) -> ModalResult<DecimalParts<'s>> {
    let start = *input;
    let negative = parse_sign.parse_next(input)?;
    let integer = digit0.parse_next(input)?;
    let fraction = opt(preceded(literal("."), digit0))
        .parse_next(input)?
        .unwrap_or("");

    if integer.is_empty() && fraction.is_empty() {
        return Err(ErrMode::Backtrack(ContextError::from_input(&start)));
    }

    Ok(DecimalParts {
        negative,
        integer,
        fraction,
    })
}

/// Parse a complete decimal literal; trailing input is an error
pub fn parse_decimal_str(text: &str) -> Option<DecimalParts<'_>> {
    parse_decimal.parse(text).ok()
}
