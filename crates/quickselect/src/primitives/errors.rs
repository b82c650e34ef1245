//! Error types for selection operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when selecting an
//! order statistic: invalid buffers, invalid ranks or quantiles, rejected
//! numeric values, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (rank vs. length, index of a NaN).
//! * **Allocation-free**: No variant owns heap data, so the type works without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every error is raised before the buffer is mutated.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for selection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    /// The buffer is empty; selection requires at least one element.
    EmptyInput,

    /// The requested rank lies outside `[0, len)`.
    RankOutOfRange {
        /// Rank that was requested.
        rank: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// The buffer contains a NaN and the NaN policy rejects it.
    InvalidNumericValue {
        /// Index of the first NaN found.
        index: usize,
    },

    /// Quantile must be finite and within `[0, 1]`.
    InvalidQuantile(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input buffer is empty"),
            Self::RankOutOfRange { rank, len } => {
                write!(f, "Rank out of range: {rank} (must be less than {len})")
            }
            Self::InvalidNumericValue { index } => {
                write!(f, "Invalid numeric value: NaN at index {index}")
            }
            Self::InvalidQuantile(q) => {
                write!(f, "Invalid quantile: {q} (must be >= 0 and <= 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SelectError {}
