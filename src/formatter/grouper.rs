use std::cmp;

use crate::types::{GroupingSizes, GroupingStrategy};

/// Whether a grouping separator follows the digit at `magnitude`
///
/// `upper_magnitude` is the magnitude of the first displayed digit.
pub(super) fn check(
    upper_magnitude: i16,
    magnitude: i16,
    strategy: GroupingStrategy,
    sizes: &GroupingSizes,
) -> bool {
    let primary = i16::from(sizes.primary);
    if primary == 0 || magnitude < primary {
        return false;
    }

    let min_grouping = match strategy {
        GroupingStrategy::Never => return false,
        GroupingStrategy::Auto => cmp::max(1, sizes.min_grouping),
        GroupingStrategy::Always => 1,
        GroupingStrategy::Min2 => cmp::max(2, sizes.min_grouping),
    };
    if upper_magnitude < primary + i16::from(min_grouping) - 1 {
        return false;
    }

    let secondary = match sizes.secondary {
        0 => primary,
        size => i16::from(size),
    };
    (magnitude - primary) % secondary == 0
}
