//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and orchestrates selection queries under the
//! configured policies.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validate-then-select orchestration.
pub mod executor;

/// Precondition checks.
pub mod validator;
