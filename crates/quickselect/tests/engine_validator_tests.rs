#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the precondition checks run before any selection:
//! - Buffer emptiness
//! - Rank bounds
//! - Quantile bounds
//! - NaN detection
//! - Builder duplicate detection
//!
//! ## Test Organization
//!
//! 1. **Buffer Validation** - Empty buffers and NaN scans
//! 2. **Parameter Validation** - Rank and quantile bounds
//! 3. **Builder Validation** - Duplicate parameters

use quickselect::internals::engine::validator::Validator;
use quickselect::internals::primitives::errors::SelectError;

// ============================================================================
// Buffer Validation Tests
// ============================================================================

/// Test validation rejects an empty buffer.
#[test]
fn test_validate_empty_buffer() {
    let buf: Vec<f64> = vec![];

    assert_eq!(Validator::validate_buffer(&buf), Err(SelectError::EmptyInput));
}

/// Test validation accepts a single-element buffer.
#[test]
fn test_validate_single_element_buffer() {
    assert!(Validator::validate_buffer(&[1.0]).is_ok());
}

/// Test NaN scan reports the first offending index.
#[test]
fn test_validate_nan_reports_first_index() {
    let buf = [1.0, 2.0, f64::NAN, 4.0, f64::NAN];

    assert_eq!(
        Validator::validate_no_nan(&buf),
        Err(SelectError::InvalidNumericValue { index: 2 })
    );
}

/// Test NaN scan accepts infinities and signed zeros.
#[test]
fn test_validate_nan_accepts_infinities() {
    let buf = [f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0];

    assert!(Validator::validate_no_nan(&buf).is_ok());
}

/// Test NaN scan on single precision.
#[test]
fn test_validate_nan_f32() {
    let buf = [f32::NAN];

    assert_eq!(
        Validator::validate_no_nan(&buf),
        Err(SelectError::InvalidNumericValue { index: 0 })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test rank bounds.
///
/// Verifies that ranks in `[0, len)` pass and `len` fails.
#[test]
fn test_validate_rank_bounds() {
    assert!(Validator::validate_rank(0, 1).is_ok());
    assert!(Validator::validate_rank(4, 5).is_ok());
    assert_eq!(
        Validator::validate_rank(5, 5),
        Err(SelectError::RankOutOfRange { rank: 5, len: 5 })
    );
    assert_eq!(
        Validator::validate_rank(usize::MAX, 3),
        Err(SelectError::RankOutOfRange {
            rank: usize::MAX,
            len: 3
        })
    );
}

/// Test rank validation on an empty buffer reports emptiness first.
#[test]
fn test_validate_rank_empty() {
    assert_eq!(Validator::validate_rank(0, 0), Err(SelectError::EmptyInput));
}

/// Test quantile bounds.
///
/// Verifies that the closed interval `[0, 1]` is accepted.
#[test]
fn test_validate_quantile_bounds() {
    assert!(Validator::validate_quantile(0.0).is_ok());
    assert!(Validator::validate_quantile(0.5).is_ok());
    assert!(Validator::validate_quantile(1.0).is_ok());

    assert_eq!(
        Validator::validate_quantile(-0.1),
        Err(SelectError::InvalidQuantile(-0.1))
    );
    assert_eq!(
        Validator::validate_quantile(1.5),
        Err(SelectError::InvalidQuantile(1.5))
    );
    assert!(matches!(
        Validator::validate_quantile(f64::NAN),
        Err(SelectError::InvalidQuantile(q)) if q.is_nan()
    ));
    assert!(Validator::validate_quantile(f64::INFINITY).is_err());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("nan_policy")),
        Err(SelectError::DuplicateParameter {
            parameter: "nan_policy"
        })
    );
}
