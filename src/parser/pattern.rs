use winnow::token::{rest, take_till, take_while};
use winnow::{ModalResult, Parser};

/// Grouping sizes read from the integer part of a CLDR decimal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternGrouping {
    /// Zero when the pattern has no grouping separator
    pub primary: u8,
    pub secondary: u8,
}

const INTEGER_PATTERN_CHARS: [char; 4] = ['#', '0', ',', '@'];

fn parse_integer_pattern<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    let _prefix = take_till(0.., INTEGER_PATTERN_CHARS).parse_next(input)?;
    let integer = take_while(1.., INTEGER_PATTERN_CHARS).parse_next(input)?;
    // Fraction digits, suffix and the negative subpattern carry no grouping information
    let _rest = rest.parse_next(input)?;
    Ok(integer)
}

fn grouping_from_integer_pattern(integer: &str) -> Option<PatternGrouping> {
    let groups: Vec<&str> = integer.split(',').collect();
    let primary_group = groups.last()?;

    if groups.len() == 1 {
        return Some(PatternGrouping {
            primary: 0,
            secondary: 0,
        });
    }
    if primary_group.is_empty() {
        return None;
    }

    let primary = u8::try_from(primary_group.len()).ok()?;
    let secondary = if groups.len() >= 3 {
        let secondary_group = groups[groups.len() - 2];
        if secondary_group.is_empty() {
            return None;
        }
        u8::try_from(secondary_group.len()).ok()?
    } else {
        primary
    };

    Some(PatternGrouping { primary, secondary })
}

/// Derive grouping sizes from a pattern such as `#,##,##0.###`
pub fn parse_grouping_pattern_str(pattern: &str) -> Option<PatternGrouping> {
    let integer = parse_integer_pattern.parse(pattern).ok()?;
    grouping_from_integer_pattern(integer)
}
