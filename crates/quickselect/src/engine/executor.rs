//! Execution engine for selection queries.
//!
//! ## Purpose
//!
//! This module ties validation to computation. Every query runs the same
//! sequence: validate the buffer and parameters, apply the NaN policy, then
//! hand the buffer to the selection-based statistic.
//!
//! ## Design notes
//!
//! * All checks complete before the first swap, so an `Err` leaves the buffer untouched.
//! * The executor is `Copy`; it carries policies only and never owns data.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Non-goals
//!
//! * This module does not provide the fluent builder (see the API layer).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::select::quick_select;
use crate::engine::validator::Validator;
use crate::math::quantile::{MedianConvention, QuantileMethod};
use crate::math::scaling::ScalingMethod;
use crate::primitives::errors::SelectError;

// ============================================================================
// NaN Policy
// ============================================================================

/// Treatment of NaN values in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Scan the buffer first and fail with `InvalidNumericValue` on any NaN.
    #[default]
    Reject,

    /// Skip the scan and compare with native `PartialOrd` semantics.
    ///
    /// Selection still terminates without out-of-bounds access, but the
    /// returned value is unspecified when NaNs are present.
    Propagate,
}

// ============================================================================
// Executor
// ============================================================================

/// Resolved configuration for selection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionExecutor {
    /// NaN handling.
    pub nan_policy: NanPolicy,

    /// Median convention for even lengths.
    pub median_convention: MedianConvention,

    /// Quantile resolution method.
    pub quantile_method: QuantileMethod,

    /// Robust scale estimator.
    pub scaling_method: ScalingMethod,
}

impl SelectionExecutor {
    /// Create an executor with default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the NaN policy.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        self.nan_policy = policy;
        self
    }

    /// Set the median convention.
    pub fn median_convention(mut self, convention: MedianConvention) -> Self {
        self.median_convention = convention;
        self
    }

    /// Set the quantile method.
    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        self.quantile_method = method;
        self
    }

    /// Set the scaling method.
    pub fn scaling_method(mut self, method: ScalingMethod) -> Self {
        self.scaling_method = method;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Select the value of `rank` under a full ascending order.
    pub fn run_rank<T: Float>(&self, buf: &mut [T], rank: usize) -> Result<T, SelectError> {
        Validator::validate_rank(rank, buf.len())?;
        self.check_values(buf)?;
        Ok(quick_select(buf, rank))
    }

    /// Select the median under the configured convention.
    pub fn run_median<T: Float>(&self, buf: &mut [T]) -> Result<T, SelectError> {
        Validator::validate_buffer(buf)?;
        self.check_values(buf)?;
        Ok(self.median_convention.compute(buf))
    }

    /// Select quantile `q` under the configured method.
    pub fn run_quantile<T: Float>(&self, buf: &mut [T], q: T) -> Result<T, SelectError> {
        Validator::validate_buffer(buf)?;
        Validator::validate_quantile(q)?;
        self.check_values(buf)?;
        Ok(self.quantile_method.compute(buf, q))
    }

    /// Compute the robust scale under the configured method.
    pub fn run_scale<T: Float>(&self, buf: &mut [T]) -> Result<T, SelectError> {
        Validator::validate_buffer(buf)?;
        self.check_values(buf)?;
        Ok(self.scaling_method.compute(buf))
    }

    // Apply the NaN policy.
    #[inline]
    fn check_values<T: Float>(&self, buf: &[T]) -> Result<(), SelectError> {
        match self.nan_policy {
            NanPolicy::Reject => Validator::validate_no_nan(buf),
            NanPolicy::Propagate => Ok(()),
        }
    }
}
