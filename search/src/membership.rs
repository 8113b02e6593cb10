//! Linear and binary membership checks over ordered sequences.
//!
//! Auxiliary utilities, not part of the traversal contract.

use std::cmp::Ordering;

/// Linear scan: `true` iff any element equals `target`. O(n).
#[must_use]
pub fn linear_contains<T: PartialEq>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}

/// Binary search on a slice sorted ascending: `true` iff `target` is found.
/// O(log n) comparisons; the result is unspecified if `items` is not sorted.
#[must_use]
pub fn binary_contains<T: Ord>(items: &[T], target: &T) -> bool {
    let mut low = 0usize;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return true,
        }
    }
    false
}
