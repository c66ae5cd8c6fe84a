//! Insertion-order policy.

/// Computes the display order for an entity inserted into a scope whose
/// existing members carry the given orders: one past the maximum, or 0
/// for an empty scope.
///
/// Batch insertions take this value once as a shared baseline and add
/// each element's zero-based batch index, so batch members keep their
/// submission order without recomputing after every insert.
#[must_use]
pub fn next_order(existing: impl Iterator<Item = i64>) -> i64 {
    existing.max().map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scope_starts_at_zero() {
        assert_eq!(next_order(std::iter::empty()), 0);
    }

    #[test]
    fn appends_past_the_maximum() {
        assert_eq!(next_order([0, 1, 2].into_iter()), 3);
    }

    #[test]
    fn gaps_and_duplicates_only_raise_the_baseline() {
        assert_eq!(next_order([0, 5, 5].into_iter()), 6);
    }

    #[test]
    fn negative_orders_still_yield_max_plus_one() {
        assert_eq!(next_order([-4, -2].into_iter()), -1);
    }
}
