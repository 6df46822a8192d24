//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical pieces used to size a sieve:
//! the Prime Number Theorem estimate of where the nth prime lies.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Limit estimation for the nth prime.
pub mod estimate;
