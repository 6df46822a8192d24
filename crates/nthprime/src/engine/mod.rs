//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a lookup by coordinating the estimator (math) and
//! the sieves (algorithms). It owns the ordinal resolution, the recovery loop,
//! and configuration validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lookup execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for lookups.
pub mod output;
