//! Input validation for selection operations.
//!
//! ## Purpose
//!
//! This module checks the preconditions of every selection entry point
//! before the buffer is touched: a non-empty buffer, a rank inside it, a
//! quantile inside `[0, 1]`, and (when requested) the absence of NaN.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Read-only**: No check mutates the buffer, so a rejected call leaves it untouched.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the NaN scan is last.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A buffer and rank that pass validation can be handed to `quick_select`
//!   without any out-of-bounds access.
//!
//! ## Non-goals
//!
//! * This module does not reorder, filter, or repair input data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SelectError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for selection inputs.
///
/// Provides static methods that return `Result<(), SelectError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Buffer Validation
    // ========================================================================

    /// Validate that the buffer holds at least one element.
    pub fn validate_buffer<T>(buf: &[T]) -> Result<(), SelectError> {
        if buf.is_empty() {
            return Err(SelectError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that the buffer contains no NaN.
    ///
    /// Infinities and signed zeros are accepted as ordinary values.
    pub fn validate_no_nan<T: Float>(buf: &[T]) -> Result<(), SelectError> {
        match buf.iter().position(|v| v.is_nan()) {
            Some(index) => Err(SelectError::InvalidNumericValue { index }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a zero-based rank against a buffer length.
    pub fn validate_rank(rank: usize, len: usize) -> Result<(), SelectError> {
        if len == 0 {
            return Err(SelectError::EmptyInput);
        }
        if rank >= len {
            return Err(SelectError::RankOutOfRange { rank, len });
        }
        Ok(())
    }

    /// Validate a quantile level.
    pub fn validate_quantile<T: Float>(q: T) -> Result<(), SelectError> {
        if !q.is_finite() || q < T::zero() || q > T::one() {
            return Err(SelectError::InvalidQuantile(
                q.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no builder parameter was configured twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SelectError> {
        if let Some(parameter) = duplicate_param {
            return Err(SelectError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
