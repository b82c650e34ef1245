//! Median conventions and quantile rank arithmetic.
//!
//! ## Purpose
//!
//! This module maps statistical questions ("the median", "the 90th
//! percentile") onto one or two order statistics and evaluates them with
//! in-place selection.
//!
//! ## Design notes
//!
//! * **Single pass**: Statistics needing two adjacent ranks select the lower
//!   rank once and read the upper one as the minimum of the right partition.
//! * **Lower by default**: The lower median `(n - 1) / 2` and the lower
//!   quantile rank `floor(q * (n - 1))` are the defaults.
//!
//! ## Invariants
//!
//! * Every computed rank lies in `[0, n)` for `n >= 1` and `q` in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not validate buffers or quantiles (see the engine layer).
//! * This module does not provide weighted quantiles.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::select::{min_of, quick_select};

// ============================================================================
// Median Convention
// ============================================================================

/// Which middle element is reported as the median of an even-length buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedianConvention {
    /// Value at rank `(n - 1) / 2`.
    #[default]
    Lower,

    /// Value at rank `n / 2`.
    Upper,

    /// Mean of the lower and upper medians.
    Midpoint,
}

impl MedianConvention {
    /// Compute the median of a non-empty buffer, rearranging it.
    pub fn compute<T: Float>(&self, vals: &mut [T]) -> T {
        let n = vals.len();
        match self {
            Self::Lower => quick_select(vals, lower_median_rank(n)),
            Self::Upper => quick_select(vals, n / 2),
            Self::Midpoint => {
                let rank = lower_median_rank(n);
                let lower = quick_select(vals, rank);
                if n.is_multiple_of(2) {
                    let upper = min_of(&vals[rank + 1..]).unwrap_or(lower);
                    midpoint(lower, upper)
                } else {
                    lower
                }
            }
        }
    }
}

/// Rank of the lower median of `n` elements.
#[inline]
pub fn lower_median_rank(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

// ============================================================================
// Quantile Method
// ============================================================================

/// How a quantile falling between two ranks is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileMethod {
    /// Rank `floor(q * (n - 1))`.
    #[default]
    Lower,

    /// Rank `ceil(q * (n - 1))`.
    Higher,

    /// Rank `round(q * (n - 1))`, ties away from zero.
    Nearest,

    /// Linear interpolation between the two surrounding ranks.
    ///
    /// Equal neighbours (including equal infinities) are returned as is;
    /// neighbours `-inf` and `+inf` interpolate to NaN.
    Linear,
}

impl QuantileMethod {
    /// Compute quantile `q` of a non-empty buffer, rearranging it.
    ///
    /// `q` must already be known to lie in `[0, 1]`.
    pub fn compute<T: Float>(&self, vals: &mut [T], q: T) -> T {
        let n = vals.len();
        let h = position(n, q);
        let last = n - 1;

        match self {
            Self::Lower => quick_select(vals, to_rank(h.floor(), last)),
            Self::Higher => quick_select(vals, to_rank(h.ceil(), last)),
            Self::Nearest => quick_select(vals, to_rank(h.round(), last)),
            Self::Linear => {
                let rank = to_rank(h.floor(), last);
                let lower = quick_select(vals, rank);
                let frac = h - h.floor();
                if rank == last || frac <= T::zero() {
                    return lower;
                }
                let upper = min_of(&vals[rank + 1..]).unwrap_or(lower);
                if upper == lower {
                    return lower;
                }
                // Weighted sum keeps infinities and opposite-sign extremes finite
                lower * (T::one() - frac) + upper * frac
            }
        }
    }
}

/// Fractional position `q * (n - 1)` of quantile `q` among `n` ranks.
#[inline]
pub fn position<T: Float>(n: usize, q: T) -> T {
    let span = T::from(n.saturating_sub(1)).unwrap_or(T::zero());
    q * span
}

// Convert an integral-valued position into a rank clamped to `last`.
#[inline]
fn to_rank<T: Float>(h: T, last: usize) -> usize {
    h.to_usize().unwrap_or(0).min(last)
}

// Mean of two values without overflowing for large magnitudes.
#[inline]
fn midpoint<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    a / two + b / two
}
