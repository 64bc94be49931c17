use crate::decimal::FixedDecimal;
use crate::types::SignDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Negative,
    Positive,
}

/// Which sign, if any, to display for `value`
pub(super) fn select(display: SignDisplay, value: &FixedDecimal) -> Option<Sign> {
    let negative = value.is_negative();
    let zero = value.is_zero();

    match display {
        SignDisplay::Auto => negative.then_some(Sign::Negative),
        SignDisplay::Never => None,
        SignDisplay::Always if negative => Some(Sign::Negative),
        SignDisplay::Always => Some(Sign::Positive),
        SignDisplay::ExceptZero if zero => None,
        SignDisplay::ExceptZero if negative => Some(Sign::Negative),
        SignDisplay::ExceptZero => Some(Sign::Positive),
        SignDisplay::Negative => (negative && !zero).then_some(Sign::Negative),
    }
}
