//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the selection algorithm itself: the iterative
//! median-of-three quickselect that isolates one order statistic in place.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-place quickselect.
pub mod select;
