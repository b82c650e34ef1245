//! Iterative quickselect for order statistics.
//!
//! ## Purpose
//!
//! This module isolates the element of a given rank in a mutable buffer
//! without fully sorting it. It is the computational core behind every
//! median, rank, quantile, and scale query in the crate.
//!
//! ## Design notes
//!
//! * **Iterative**: A single loop over a shrinking [`PartitionWindow`]; no recursion.
//! * **In-place**: O(1) extra space; the buffer is rearranged by swaps only.
//! * **Pivoting**: Median-of-three of the window's low, middle, and high elements.
//! * **Partitioning**: Hoare-style, scanning inward from both ends and swapping stuck pairs.
//! * **Generics**: Generic over `Float` types; comparisons use `PartialOrd`.
//!
//! ## Key concepts
//!
//! ### Sentinels
//! After median-of-three ordering the element at `low + 1` is no greater than
//! the pivot and the element at `high` is no smaller, so neither inward scan
//! can leave the window. The same holds when NaNs are present because every
//! comparison against NaN is false, which stops a scan.
//!
//! ### Window narrowing
//! Once the pivot lands at `hh`, the window keeps only the side that contains
//! the target rank. When `hh` equals the rank both sides are cut and the
//! window collapses.
//!
//! ## Invariants
//!
//! * Every index left of the window holds a value `<=` the target value.
//! * Every index right of the window holds a value `>=` the target value.
//! * The window strictly shrinks on every iteration.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see the engine layer).
//! * This module does not preserve the relative order of equal elements.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::PartitionWindow;

// ============================================================================
// Selection
// ============================================================================

/// Rearrange `buf` so that `buf[rank]` holds the value of that rank under a
/// full ascending order, and return it.
///
/// Afterwards every element before `rank` is `<=` the returned value and
/// every element after it is `>=`.
///
/// # Panics
///
/// Panics if `buf` is empty or `rank >= buf.len()`. Callers validate these
/// preconditions first.
pub fn quick_select<T: Float>(buf: &mut [T], rank: usize) -> T {
    assert!(
        rank < buf.len(),
        "quick_select: rank {} out of bounds for length {}",
        rank,
        buf.len()
    );

    let mut window = PartitionWindow::new(buf.len());

    loop {
        let (low, high) = (window.low, window.high);

        // One element left
        if window.is_resolved() {
            return buf[rank];
        }

        // Two elements left
        if window.len() == 2 {
            if buf[low] > buf[high] {
                buf.swap(low, high);
            }
            return buf[rank];
        }

        order_pivot(buf, low, window.middle(), high);

        let (next, pivot) = nibble(buf, low, high);

        // Drop the pivot into its final place
        buf.swap(low, pivot);

        window.narrow(pivot, next, rank);
    }
}

/// Median-of-three: leave `buf[middle] <= buf[low] <= buf[high]`, then move
/// the middle sample to `low + 1` so it bounds the downward scan.
#[inline]
fn order_pivot<T: Float>(buf: &mut [T], low: usize, middle: usize, high: usize) {
    if buf[middle] > buf[high] {
        buf.swap(middle, high);
    }
    if buf[low] > buf[high] {
        buf.swap(low, high);
    }
    if buf[middle] > buf[low] {
        buf.swap(middle, low);
    }
    buf.swap(middle, low + 1);
}

/// Partition `(low + 1, high)` around the pivot held at `low`.
///
/// Returns `(ll, hh)` after the scans cross: `hh` is where the pivot belongs
/// and `ll` is the first index of the upper partition.
#[inline]
fn nibble<T: Float>(buf: &mut [T], low: usize, high: usize) -> (usize, usize) {
    let pivot = buf[low];
    let mut ll = low + 1;
    let mut hh = high;

    loop {
        ll += 1;
        while pivot > buf[ll] {
            ll += 1;
        }

        hh -= 1;
        while buf[hh] > pivot {
            hh -= 1;
        }

        if hh < ll {
            return (ll, hh);
        }
        buf.swap(ll, hh);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Smallest value of a slice under `PartialOrd`, or `None` if it is empty.
///
/// Used to read the next order statistic out of the upper partition left by
/// [`quick_select`]: after selecting rank `r`, the value of rank `r + 1` is
/// the minimum of `buf[r + 1..]`.
#[inline]
pub fn min_of<T: Float>(vals: &[T]) -> Option<T> {
    let (&first, rest) = vals.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc }))
}
