//! # quickselect — In-place order statistics for Rust
//!
//! Find the median, any rank, or any quantile of an unsorted floating-point
//! slice in expected O(n) time and O(1) extra space, without sorting it.
//!
//! ## How it works
//!
//! Selection is an iterative quickselect: the unresolved part of the buffer
//! is a shrinking window, each pass picks a median-of-three pivot, partitions
//! the window Hoare-style by scanning inward from both ends, and keeps only
//! the side that contains the requested rank. Expected running time is linear;
//! the worst case is quadratic on adversarial input (median-of-three makes
//! sorted and reverse-sorted input cheap).
//!
//! ## Quick Start
//!
//! ```rust
//! use quickselect::prelude::*;
//!
//! let mut data = vec![9.0, 3.0, 7.0, 1.0, 5.0];
//!
//! // Lower median: rank (n - 1) / 2
//! assert_eq!(select_median(&mut data)?, 5.0);
//!
//! // Any rank
//! assert_eq!(select_rank(&mut data, 0)?, 1.0);
//! assert_eq!(select_rank(&mut data, 4)?, 9.0);
//!
//! // Quantiles in [0, 1]
//! assert_eq!(select_quantile(&mut data, 0.75)?, 7.0);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! The slice is rearranged by every successful call. Afterwards every element
//! before the selected rank is `<=` the result and every element after it is
//! `>=`; neither side is sorted. Copy the data first if the original order
//! matters.
//!
//! ### Configured selection
//!
//! ```rust
//! use quickselect::prelude::*;
//!
//! let selector = Selector::builder()
//!     .median_convention(Midpoint)   // average the two middle values
//!     .quantile_method(Linear)       // interpolate between ranks
//!     .nan_policy(Reject)            // fail on NaN before touching the data
//!     .build()?;
//!
//! let mut data = vec![4.0, 1.0, 3.0, 2.0];
//! assert_eq!(selector.median(&mut data)?, 2.5);
//! assert_eq!(selector.quantile(&mut data, 0.5)?, 2.5);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<T, SelectError>` and validates before it
//! mutates anything:
//!
//! - **`EmptyInput`**: the slice is empty.
//! - **`RankOutOfRange`**: the rank is not below the slice length.
//! - **`InvalidNumericValue`**: the slice contains NaN (under `NanPolicy::Reject`).
//! - **`InvalidQuantile`**: the quantile is not a finite value in `[0, 1]`.
//!
//! ```rust
//! use quickselect::prelude::*;
//!
//! let mut empty: Vec<f64> = vec![];
//! assert_eq!(select_median(&mut empty), Err(SelectError::EmptyInput));
//!
//! let mut data = vec![1.0, 2.0];
//! assert_eq!(
//!     select_rank(&mut data, 2),
//!     Err(SelectError::RankOutOfRange { rank: 2, len: 2 })
//! );
//! ```
//!
//! ## no_std
//!
//! Disable default features to drop the standard library. No allocation is
//! performed anywhere in the crate.
//!
//! ```toml
//! [dependencies]
//! quickselect = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Press, W. H. et al. (1992). *Numerical Recipes in C*, 2nd ed., Section 8.5.
//! - Hoare, C. A. R. (1961). "Algorithm 65: Find".

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Algorithms - in-place quickselect.
mod algorithms;

// Layer 3: Math - medians, quantiles, and robust scale.
mod math;

// Layer 4: Engine - validation and orchestration.
mod engine;

// High-level API for selection.
mod api;

// Standard quickselect prelude.
pub mod prelude {
    pub use crate::api::{
        MedianConvention::Lower as LowerMedian,
        MedianConvention::Midpoint,
        MedianConvention::Upper as UpperMedian,
        MedianConvention,
        NanPolicy::Propagate,
        NanPolicy::Reject,
        NanPolicy,
        QuantileMethod::Higher,
        QuantileMethod::Linear,
        QuantileMethod::Lower,
        QuantileMethod::Nearest,
        QuantileMethod,
        ScalingMethod::MAD,
        ScalingMethod::MAR,
        ScalingMethod,
        SelectError, Selector, SelectorBuilder, select_median, select_quantile, select_rank,
    };
}

pub use api::{
    MedianConvention, NanPolicy, QuantileMethod, ScalingMethod, SelectError, Selector,
    SelectorBuilder, select_median, select_quantile, select_rank,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
