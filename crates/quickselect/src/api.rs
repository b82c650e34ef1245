//! High-level API for in-place selection.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: free functions for the
//! common queries and a fluent builder producing a reusable [`Selector`] with
//! non-default policies.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Free functions cover the defaults; the builder covers everything else.
//! * **Validated**: Every entry point validates before it mutates the buffer.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Buffers
//! A buffer is any `&mut [T]`; its length is `n`. To select within the first
//! `n` elements of a larger buffer, pass `&mut buffer[..n]`. The buffer is
//! rearranged by every successful call: elements before the selected rank
//! are `<=` the result and elements after it are `>=`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SelectorBuilder`] via `Selector::builder()` or `SelectorBuilder::new()`.
//! 2. Chain configuration methods (`.nan_policy()`, `.median_convention()`, etc.).
//! 3. Call `.build()` to obtain a [`Selector`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SelectionExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::NanPolicy;
pub use crate::math::quantile::{MedianConvention, QuantileMethod};
pub use crate::math::scaling::ScalingMethod;
pub use crate::primitives::errors::SelectError;

// ============================================================================
// Free Functions
// ============================================================================

/// Select the lower median, the value at rank `(n - 1) / 2`.
///
/// NaN values are rejected.
///
/// # Errors
///
/// * [`SelectError::EmptyInput`] if `buffer` is empty.
/// * [`SelectError::InvalidNumericValue`] if `buffer` contains NaN.
///
/// # Example
///
/// ```rust
/// use quickselect::prelude::*;
///
/// let mut data = vec![9.0, 3.0, 7.0, 1.0, 5.0];
/// assert_eq!(select_median(&mut data)?, 5.0);
/// # Result::<(), SelectError>::Ok(())
/// ```
pub fn select_median<T: Float>(buffer: &mut [T]) -> Result<T, SelectError> {
    SelectionExecutor::new().run_median(buffer)
}

/// Select the value at zero-based `rank` of the fully sorted buffer.
///
/// NaN values are rejected.
///
/// # Errors
///
/// * [`SelectError::EmptyInput`] if `buffer` is empty.
/// * [`SelectError::RankOutOfRange`] if `rank >= buffer.len()`.
/// * [`SelectError::InvalidNumericValue`] if `buffer` contains NaN.
///
/// # Example
///
/// ```rust
/// use quickselect::prelude::*;
///
/// let mut data = vec![5.0, 3.0];
/// assert_eq!(select_rank(&mut data, 0)?, 3.0);
/// assert_eq!(select_rank(&mut data, 1)?, 5.0);
/// # Result::<(), SelectError>::Ok(())
/// ```
pub fn select_rank<T: Float>(buffer: &mut [T], rank: usize) -> Result<T, SelectError> {
    SelectionExecutor::new().run_rank(buffer, rank)
}

/// Select quantile `q` in `[0, 1]`, the value at rank `floor(q * (n - 1))`.
///
/// NaN values are rejected.
///
/// # Errors
///
/// * [`SelectError::EmptyInput`] if `buffer` is empty.
/// * [`SelectError::InvalidQuantile`] if `q` is not a finite value in `[0, 1]`.
/// * [`SelectError::InvalidNumericValue`] if `buffer` contains NaN.
pub fn select_quantile<T: Float>(buffer: &mut [T], q: T) -> Result<T, SelectError> {
    SelectionExecutor::new().run_quantile(buffer, q)
}

// ============================================================================
// Selector
// ============================================================================

/// Reusable selection configuration produced by [`SelectorBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    executor: SelectionExecutor,
}

impl Selector {
    /// Start configuring a selector.
    pub fn builder() -> SelectorBuilder {
        SelectorBuilder::new()
    }

    /// Select the median under the configured convention.
    pub fn median<T: Float>(&self, buffer: &mut [T]) -> Result<T, SelectError> {
        self.executor.run_median(buffer)
    }

    /// Select the value at zero-based `rank`.
    pub fn rank<T: Float>(&self, buffer: &mut [T], rank: usize) -> Result<T, SelectError> {
        self.executor.run_rank(buffer, rank)
    }

    /// Select quantile `q` under the configured method.
    pub fn quantile<T: Float>(&self, buffer: &mut [T], q: T) -> Result<T, SelectError> {
        self.executor.run_quantile(buffer, q)
    }

    /// Compute the robust scale under the configured method.
    ///
    /// The buffer is overwritten with absolute deviations.
    pub fn scale<T: Float>(&self, buffer: &mut [T]) -> Result<T, SelectError> {
        self.executor.run_scale(buffer)
    }

    /// The configured NaN policy.
    pub fn nan_policy(&self) -> NanPolicy {
        self.executor.nan_policy
    }

    /// The configured median convention.
    pub fn median_convention(&self) -> MedianConvention {
        self.executor.median_convention
    }

    /// The configured quantile method.
    pub fn quantile_method(&self) -> QuantileMethod {
        self.executor.quantile_method
    }

    /// The configured scaling method.
    pub fn scaling_method(&self) -> ScalingMethod {
        self.executor.scaling_method
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Selector`].
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    /// NaN handling (default: Reject).
    pub nan_policy: Option<NanPolicy>,

    /// Median convention for even lengths (default: Lower).
    pub median_convention: Option<MedianConvention>,

    /// Quantile resolution (default: Lower).
    pub quantile_method: Option<QuantileMethod>,

    /// Robust scale estimator (default: MAD).
    pub scaling_method: Option<ScalingMethod>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SelectorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            nan_policy: None,
            median_convention: None,
            quantile_method: None,
            scaling_method: None,
            duplicate_param: None,
        }
    }

    /// Set the NaN handling policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        if self.nan_policy.is_some() {
            self.duplicate_param = Some("nan_policy");
        }
        self.nan_policy = Some(policy);
        self
    }

    /// Set the median convention for even-length buffers.
    pub fn median_convention(mut self, convention: MedianConvention) -> Self {
        if self.median_convention.is_some() {
            self.duplicate_param = Some("median_convention");
        }
        self.median_convention = Some(convention);
        self
    }

    /// Set how quantiles between two ranks are resolved.
    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        if self.quantile_method.is_some() {
            self.duplicate_param = Some("quantile_method");
        }
        self.quantile_method = Some(method);
        self
    }

    /// Set the robust scale estimator.
    pub fn scaling_method(mut self, method: ScalingMethod) -> Self {
        if self.scaling_method.is_some() {
            self.duplicate_param = Some("scaling_method");
        }
        self.scaling_method = Some(method);
        self
    }

    /// Validate the configuration and build a [`Selector`].
    pub fn build(self) -> Result<Selector, SelectError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let executor = SelectionExecutor::new()
            .nan_policy(self.nan_policy.unwrap_or_default())
            .median_convention(self.median_convention.unwrap_or_default())
            .quantile_method(self.quantile_method.unwrap_or_default())
            .scaling_method(self.scaling_method.unwrap_or_default());

        Ok(Selector { executor })
    }
}
