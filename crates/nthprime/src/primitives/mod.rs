//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive types shared throughout the crate: the
//! error enum, the ordinal conventions, and the `PrimeSource` capability
//! trait. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Zero- and one-based ordinal conventions.
pub mod ordinal;

/// The `PrimeSource` capability trait.
pub mod source;
