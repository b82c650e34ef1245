//! Partition window for iterative selection.
//!
//! This module provides the inclusive index range `[low, high]` that is still
//! under consideration while a rank is being isolated. The window only ever
//! shrinks.

// Inclusive window bounds `[low, high]` of the unresolved part of a buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionWindow {
    // Low boundary index (inclusive).
    pub low: usize,

    // High boundary index (inclusive).
    pub high: usize,
}

impl PartitionWindow {
    // Window covering a whole buffer of length `n`.
    #[inline]
    pub fn new(n: usize) -> Self {
        debug_assert!(n >= 1, "PartitionWindow::new: buffer must not be empty");

        Self {
            low: 0,
            high: n - 1,
        }
    }

    // Index halfway between the bounds (rounded down).
    #[inline]
    pub fn middle(&self) -> usize {
        self.low + (self.high - self.low) / 2
    }

    // Discard the side(s) of a partition that cannot contain `rank`.
    //
    // `pivot` is the final position of the pivot and `next` the first index
    // past the lower partition. Both sides are cut when `pivot == rank`.
    #[inline]
    pub fn narrow(&mut self, pivot: usize, next: usize, rank: usize) {
        debug_assert!(pivot >= 1, "narrow: pivot cannot sit at index 0");

        if pivot <= rank {
            self.low = next;
        }
        if pivot >= rank {
            self.high = pivot - 1;
        }
    }

    // At most one element remains.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.high <= self.low
    }

    // Number of elements in the window (zero once the bounds cross).
    #[inline]
    pub fn len(&self) -> usize {
        (self.high + 1).saturating_sub(self.low)
    }
}
