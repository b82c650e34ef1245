//! Robust scale estimation using MAD or MAR.
//!
//! This module provides outlier-resistant scale estimates computed entirely
//! with in-place selection, so no temporary buffer is allocated.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::quantile::MedianConvention;

// Method for measuring the spread of a buffer.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMethod {
    // Median Absolute Deviation: `median(|x - median(x)|)`.
    #[default]
    MAD,

    // Median Absolute Residual: `median(|x|)`.
    MAR,
}

impl ScalingMethod {
    // Compute the scale of a non-empty buffer, overwriting it with the
    // absolute deviations.
    pub fn compute<T: Float>(&self, vals: &mut [T]) -> T {
        match self {
            Self::MAD => Self::compute_mad(vals),
            Self::MAR => Self::compute_mar(vals),
        }
    }

    // Compute the Median Absolute Deviation (MAD).
    #[inline]
    fn compute_mad<T: Float>(vals: &mut [T]) -> T {
        // Step 1: Center
        let center = MedianConvention::Midpoint.compute(vals);

        // Step 2: Absolute deviations from the center
        for val in vals.iter_mut() {
            *val = (*val - center).abs();
        }

        // Step 3: Median of absolute deviations
        MedianConvention::Midpoint.compute(vals)
    }

    // Compute the Median Absolute Residual (uncentered).
    #[inline]
    fn compute_mar<T: Float>(vals: &mut [T]) -> T {
        for val in vals.iter_mut() {
            *val = val.abs();
        }

        MedianConvention::Midpoint.compute(vals)
    }
}
