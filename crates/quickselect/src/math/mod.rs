//! Layer 3: Math
//!
//! # Purpose
//!
//! This layer builds statistics on top of single order statistics:
//! - Median conventions and quantile methods
//! - Robust scale (MAD/MAR)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Math ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median conventions and quantile methods.
pub mod quantile;

/// Robust scale estimation (MAD/MAR).
pub mod scaling;
