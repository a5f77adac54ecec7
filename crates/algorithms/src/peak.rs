//! One-dimensional peak finding.
//!
//! Two algorithms locate *a* peak (not necessarily the highest one):
//!
//! - [`find_linear`] scans left to right in `O(n)` and stops at the first peak
//! - [`find_divide_and_conquer`] halves the search range in `O(log n)`,
//!   moving towards a larger neighbor
//!
//! When a sequence has several peaks the two may disagree. Both always return
//! a position satisfying [`is_peak`].
//!
//! The value-returning wrappers [`straight_forward`], [`divide_and_conquer`],
//! and [`maximum`] report an empty sequence as [`NOT_FOUND`].

/// Returned by the value-returning functions for an empty sequence.
pub const NOT_FOUND: i32 = -1;

/// Returns true if `index` is a peak of `values`.
///
/// Edges only compare against their single neighbor. An out-of-range index is
/// never a peak.
#[must_use]
pub fn is_peak<T: PartialOrd>(values: &[T], index: usize) -> bool {
    let Some(value) = values.get(index) else {
        return false;
    };

    let left = index == 0 || *value >= values[index - 1];
    let right = values.get(index + 1).is_none_or(|next| value >= next);
    left && right
}

/// Finds the first peak with a linear scan.
///
/// The first position is compared with its right neighbor only, and the last
/// position is accepted as soon as the scan reaches it.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn find_linear<T: PartialOrd>(values: &[T]) -> Option<usize> {
    let last = values.len().checked_sub(1)?;

    (0..=last).find(|&i| {
        if i == last {
            true
        } else if i == 0 {
            values[0] >= values[1]
        } else {
            values[i] >= values[i - 1] && values[i] >= values[i + 1]
        }
    })
}

/// Finds a peak by repeatedly halving the search range.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn find_divide_and_conquer<T: PartialOrd>(values: &[T]) -> Option<usize> {
    let end = values.len().checked_sub(1)?;
    Some(narrow(values, 0, end))
}

/// Searches the inclusive range `[start, end]`.
///
/// Whenever `start > 0`, `values[start - 1] < values[start]` holds, so the
/// range never needs to move left of `start`.
fn narrow<T: PartialOrd>(values: &[T], start: usize, end: usize) -> usize {
    if start == end {
        return start;
    }

    let middle = start + (end - start) / 2;
    log::trace!("peak search in [{start}, {end}], middle {middle}");

    if values[middle] < values[middle + 1] {
        narrow(values, middle + 1, end)
    } else if middle > start && values[middle] < values[middle - 1] {
        narrow(values, start, middle - 1)
    } else {
        middle
    }
}

/// Returns the value of the first peak found by a linear scan.
#[must_use]
pub fn straight_forward(numbers: &[i32]) -> i32 {
    find_linear(numbers).map_or(NOT_FOUND, |i| numbers[i])
}

/// Returns the value of a peak found by divide and conquer.
#[must_use]
pub fn divide_and_conquer(numbers: &[i32]) -> i32 {
    find_divide_and_conquer(numbers).map_or(NOT_FOUND, |i| numbers[i])
}

/// Returns the largest value.
#[must_use]
pub fn maximum(numbers: &[i32]) -> i32 {
    match numbers.split_first() {
        None => NOT_FOUND,
        Some((&first, rest)) => rest.iter().fold(first, |best, &n| best.max(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(len: i32) -> Vec<i32> {
        (0..len).collect()
    }

    #[test]
    fn straight_forward_single_number() {
        assert_eq!(straight_forward(&[2]), 2);
    }

    #[test]
    fn straight_forward_two_numbers() {
        assert_eq!(straight_forward(&[2, 3]), 3);
        assert_eq!(straight_forward(&[3, 2]), 3);
    }

    #[test]
    fn straight_forward_three_numbers() {
        assert_eq!(straight_forward(&[1, 3, 2]), 3);
        assert_eq!(straight_forward(&[1, 2, 3]), 3);
    }

    #[test]
    fn straight_forward_returns_first_of_multiple_peaks() {
        let numbers = [1, 2, 5, 2, 3, 1];
        assert_eq!(find_linear(&numbers), Some(2));
        assert_eq!(straight_forward(&numbers), 5);
    }

    #[test]
    fn straight_forward_flat_sequence() {
        let numbers = [1; 9];
        assert_eq!(find_linear(&numbers), Some(0));
        assert_eq!(straight_forward(&numbers), 1);
    }

    #[test]
    fn straight_forward_empty() {
        assert_eq!(find_linear::<i32>(&[]), None);
        assert_eq!(straight_forward(&[]), NOT_FOUND);
    }

    #[test]
    fn straight_forward_long_ascending_sequence() {
        let numbers = ascending(100_000);
        assert_eq!(straight_forward(&numbers), 99_999);
    }

    #[test]
    fn straight_forward_accepts_last_index_without_left_check() {
        // The scan only reaches the last index when no earlier position was a
        // peak, so the left neighbor is never larger in practice.
        let numbers = [1, 2, 3, 4];
        assert_eq!(find_linear(&numbers), Some(3));
    }

    #[test]
    fn divide_and_conquer_empty() {
        assert_eq!(find_divide_and_conquer::<i32>(&[]), None);
        assert_eq!(divide_and_conquer(&[]), NOT_FOUND);
    }

    #[test]
    fn divide_and_conquer_single_number() {
        assert_eq!(divide_and_conquer(&[2]), 2);
    }

    #[test]
    fn divide_and_conquer_two_numbers() {
        assert_eq!(divide_and_conquer(&[3, 2]), 3);
        assert_eq!(divide_and_conquer(&[2, 3]), 3);
    }

    #[test]
    fn divide_and_conquer_three_numbers() {
        assert_eq!(divide_and_conquer(&[1, 3, 2]), 3);
        assert_eq!(divide_and_conquer(&[1, 2, 3]), 3);
    }

    #[test]
    fn divide_and_conquer_multiple_peaks() {
        assert_eq!(divide_and_conquer(&[1, 2, 3, 2, 3, 1]), 3);
    }

    #[test]
    fn divide_and_conquer_moves_left() {
        let numbers = [1, 9, 8, 7, 6, 5, 4];
        assert_eq!(find_divide_and_conquer(&numbers), Some(1));
    }

    #[test]
    fn divide_and_conquer_flat_sequence() {
        let numbers = [1; 9];
        assert_eq!(find_divide_and_conquer(&numbers), Some(4));
        assert_eq!(divide_and_conquer(&numbers), 1);
    }

    #[test]
    fn divide_and_conquer_long_ascending_sequence() {
        let numbers = ascending(100_000);
        assert_eq!(divide_and_conquer(&numbers), 99_999);
    }

    #[test]
    fn algorithms_may_pick_different_peaks() {
        let numbers = [5, 1, 2, 3, 4, 1, 0];
        assert_eq!(find_linear(&numbers), Some(0));
        assert_eq!(find_divide_and_conquer(&numbers), Some(4));
    }

    #[test]
    fn is_peak_checks_both_neighbors() {
        let numbers = [1, 3, 2, 2, 0];
        assert!(!is_peak(&numbers, 0));
        assert!(is_peak(&numbers, 1));
        assert!(!is_peak(&numbers, 2));
        assert!(is_peak(&numbers, 3));
        assert!(!is_peak(&numbers, 4));
        assert!(!is_peak(&numbers, 5));
    }

    #[test]
    fn maximum_finds_largest() {
        assert_eq!(maximum(&[3, 7, 4, 9, 5]), 9);
        assert_eq!(maximum(&[-4, -2, -8]), -2);
    }

    #[test]
    fn maximum_edge_cases() {
        assert_eq!(maximum(&[]), NOT_FOUND);
        assert_eq!(maximum(&[5]), 5);
    }
}
