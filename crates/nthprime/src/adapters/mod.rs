//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing finders that adapt the engine layer to a
//! specific sieve algorithm:
//!
//! - **Classic**: Full-table sieve, the default
//! - **Segmented**: Windowed sieve with O(sqrt(limit)) memory
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Classic full-table finder.
pub mod classic;

/// Segmented finder for large ordinals.
pub mod segmented;
