#![cfg(feature = "dev")]
//! Tests for the partition window.
//!
//! These tests verify the bookkeeping of the `[low, high]` range that
//! quickselect shrinks while isolating a rank:
//! - Initial bounds and midpoint
//! - Narrowing from either or both sides
//! - Resolution and length once the bounds cross
//!
//! ## Test Organization
//!
//! 1. **Construction** - Initial bounds and middle index
//! 2. **Narrowing** - One-sided and two-sided cuts
//! 3. **Length** - Length and crossing

use quickselect::internals::primitives::window::PartitionWindow;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that a new window covers the whole buffer.
#[test]
fn test_window_new_covers_buffer() {
    let window = PartitionWindow::new(5);

    assert_eq!(window.low, 0);
    assert_eq!(window.high, 4);
    assert_eq!(window.len(), 5);
    assert!(!window.is_resolved());
}

/// Test that a single-element buffer starts resolved.
#[test]
fn test_window_single_element_is_resolved() {
    let window = PartitionWindow::new(1);

    assert!(window.is_resolved());
    assert_eq!(window.len(), 1);
}

/// Test middle index rounding.
///
/// Verifies that the middle rounds down and stays inside the bounds.
#[test]
fn test_window_middle() {
    assert_eq!(PartitionWindow::new(5).middle(), 2);
    assert_eq!(PartitionWindow::new(4).middle(), 1);

    let window = PartitionWindow { low: 3, high: 4 };
    assert_eq!(window.middle(), 3);

    let window = PartitionWindow { low: 6, high: 12 };
    assert_eq!(window.middle(), 9);
}

// ============================================================================
// Narrowing Tests
// ============================================================================

/// Test narrowing when the pivot lands left of the rank.
///
/// Verifies that only the low bound moves.
#[test]
fn test_window_narrow_pivot_left_of_rank() {
    let mut window = PartitionWindow::new(10);
    window.narrow(3, 4, 7);

    assert_eq!(window, PartitionWindow { low: 4, high: 9 });
}

/// Test narrowing when the pivot lands right of the rank.
///
/// Verifies that only the high bound moves.
#[test]
fn test_window_narrow_pivot_right_of_rank() {
    let mut window = PartitionWindow::new(10);
    window.narrow(6, 7, 2);

    assert_eq!(window, PartitionWindow { low: 0, high: 5 });
}

/// Test narrowing when the pivot lands exactly on the rank.
///
/// Verifies that both sides are cut and the window collapses.
#[test]
fn test_window_narrow_pivot_on_rank() {
    let mut window = PartitionWindow::new(10);
    window.narrow(5, 6, 5);

    assert_eq!(window, PartitionWindow { low: 6, high: 4 });
    assert!(window.is_resolved());
    assert_eq!(window.len(), 0);
}

// ============================================================================
// Length Tests
// ============================================================================

/// Test length of a crossed window.
///
/// Verifies that length saturates at zero instead of underflowing.
#[test]
fn test_window_len_after_crossing() {
    let window = PartitionWindow { low: 7, high: 3 };

    assert_eq!(window.len(), 0);
    assert!(window.is_resolved());
}

/// Test length of a two-element window.
#[test]
fn test_window_len_two_elements() {
    let window = PartitionWindow { low: 2, high: 3 };

    assert_eq!(window.len(), 2);
    assert!(!window.is_resolved());
}
