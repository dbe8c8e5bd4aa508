//! Check families, grouped by the capability they require
//!
//! Every family follows the same contract: an absent value passes, a
//! present value is tested by a pure predicate, and a failure records
//! one violation with the descriptor for the failed rule.

mod chars;
mod collection;
mod general;
mod numeric;
mod ordering;
mod temporal;
mod text;

/// Optional-bound test shared by size and digit-count checks.
///
/// Each bound applies independently when present. `min > max` is not
/// rejected; the count is simply tested against whichever bound it
/// violates.
pub(crate) fn within_bounds(count: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.is_none_or(|m| count >= m) && max.is_none_or(|m| count <= m)
}

#[cfg(test)]
mod tests {
    use super::within_bounds;

    #[test]
    fn test_bounds_apply_independently() {
        assert!(within_bounds(3, None, None));
        assert!(within_bounds(3, Some(3), None));
        assert!(!within_bounds(2, Some(3), None));
        assert!(within_bounds(3, None, Some(3)));
        assert!(!within_bounds(4, None, Some(3)));
    }

    #[test]
    fn test_inverted_bounds_are_not_rejected() {
        // min > max is caller error, not a library fault: everything
        // fails one bound or the other.
        assert!(!within_bounds(3, Some(5), Some(2)));
        assert!(!within_bounds(6, Some(5), Some(2)));
        assert!(!within_bounds(1, Some(5), Some(2)));
    }
}
