//! High-level API for nth prime lookups.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements a
//! fluent builder for configuring lookups and choosing a sieve adapter
//! (Classic or Segmented), plus convenience functions for one-off queries.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to adapter-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the
//!   adapter builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SieveBuilder`] via `Sieve::new()`.
//! 2. Chain configuration methods (`.ordinal()`, `.recovery()`, etc.).
//! 3. Select an adapter via `.adapter(Classic)` to get an execution builder.
//! 4. Call `.build()` and query the finder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::adapters::classic::ClassicBuilder;
use crate::adapters::segmented::SegmentedBuilder;
use crate::algorithms::{eratosthenes, segmented};
use crate::engine::executor::SelectPassFn;

// Publicly re-exported types
pub use crate::adapters::classic::ClassicFinder;
pub use crate::adapters::segmented::SegmentedFinder;
pub use crate::algorithms::Algorithm;
pub use crate::engine::executor::{PrimeConfig, RecoveryPolicy};
pub use crate::engine::output::PrimeResult;
pub use crate::math::estimate::LimitEstimator;
pub use crate::primitives::errors::PrimeError;
pub use crate::primitives::ordinal::Ordinal;
pub use crate::primitives::source::{FnSource, PrimeSource};

/// Marker types for selecting sieve adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Classic, Segmented};
}

/// Fluent builder for configuring lookups and sieve adapters.
#[derive(Debug, Clone, Default)]
pub struct SieveBuilder {
    /// Ordinal convention (default: zero-based).
    pub ordinal: Option<Ordinal>,

    /// Shortfall recovery policy (default: Report).
    pub recovery: Option<RecoveryPolicy>,

    /// Index below which the fixed small limit is used.
    pub small_threshold: Option<usize>,

    /// Fixed limit for small indices.
    pub small_limit: Option<usize>,

    /// Upper bound on any sieve limit.
    pub max_limit: Option<usize>,

    /// Window width (Segmented only).
    pub segment_size: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sieve pass function.
    #[doc(hidden)]
    pub custom_select_pass: Option<SelectPassFn>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SieveBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a sieve adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SieveAdapter,
    {
        A::convert(self)
    }

    /// Set the ordinal convention.
    pub fn ordinal(mut self, ordinal: Ordinal) -> Self {
        if self.ordinal.is_some() {
            self.duplicate_param = Some("ordinal");
        }
        self.ordinal = Some(ordinal);
        self
    }

    /// Set the recovery policy for estimates that fall short.
    pub fn recovery(mut self, policy: RecoveryPolicy) -> Self {
        if self.recovery.is_some() {
            self.duplicate_param = Some("recovery");
        }
        self.recovery = Some(policy);
        self
    }

    /// Set the index below which the fixed small limit is used.
    pub fn small_threshold(mut self, threshold: usize) -> Self {
        if self.small_threshold.is_some() {
            self.duplicate_param = Some("small_threshold");
        }
        self.small_threshold = Some(threshold);
        self
    }

    /// Set the fixed limit used for small indices.
    pub fn small_limit(mut self, limit: usize) -> Self {
        if self.small_limit.is_some() {
            self.duplicate_param = Some("small_limit");
        }
        self.small_limit = Some(limit);
        self
    }

    /// Set the upper bound on any sieve limit.
    pub fn max_limit(mut self, limit: usize) -> Self {
        if self.max_limit.is_some() {
            self.duplicate_param = Some("max_limit");
        }
        self.max_limit = Some(limit);
        self
    }

    /// Set the window width (Segmented only).
    pub fn segment_size(mut self, size: usize) -> Self {
        if self.segment_size.is_some() {
            self.duplicate_param = Some("segment_size");
        }
        self.segment_size = Some(size);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom sieve pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_select_pass(mut self, pass: SelectPassFn) -> Self {
        self.custom_select_pass = Some(pass);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SieveAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SieveBuilder`] into a specialized execution builder.
    fn convert(builder: SieveBuilder) -> Self::Output;
}

/// Marker for the classic full-table sieve.
#[derive(Debug, Clone, Copy)]
pub struct Classic;

impl SieveAdapter for Classic {
    type Output = ClassicBuilder;

    fn convert(builder: SieveBuilder) -> Self::Output {
        let mut result = ClassicBuilder::default();

        if let Some(ordinal) = builder.ordinal {
            result.ordinal = ordinal;
        }
        if let Some(recovery) = builder.recovery {
            result.recovery = recovery;
        }
        if let Some(threshold) = builder.small_threshold {
            result.small_threshold = threshold;
        }
        if let Some(limit) = builder.small_limit {
            result.small_limit = limit;
        }
        if let Some(limit) = builder.max_limit {
            result.max_limit = limit;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_select_pass {
            result.custom_select_pass = Some(pass);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for the segmented sieve.
#[derive(Debug, Clone, Copy)]
pub struct Segmented;

impl SieveAdapter for Segmented {
    type Output = SegmentedBuilder;

    fn convert(builder: SieveBuilder) -> Self::Output {
        let mut result = SegmentedBuilder::default();

        if let Some(ordinal) = builder.ordinal {
            result.ordinal = ordinal;
        }
        if let Some(recovery) = builder.recovery {
            result.recovery = recovery;
        }
        if let Some(threshold) = builder.small_threshold {
            result.small_threshold = threshold;
        }
        if let Some(limit) = builder.small_limit {
            result.small_limit = limit;
        }
        if let Some(limit) = builder.max_limit {
            result.max_limit = limit;
        }
        if let Some(size) = builder.segment_size {
            result.segment_size = size;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pass) = builder.custom_select_pass {
            result.custom_select_pass = Some(pass);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Prime at zero-based ordinal `n`, using the default classic finder.
///
/// `nth_prime(0) == Ok(2)`; negative ordinals fail with
/// [`PrimeError::InvalidArgument`].
pub fn nth_prime(n: i64) -> Result<u64, PrimeError> {
    ClassicFinder::default().nth_prime(n)
}

/// All primes in `[2, limit]`, ascending.
///
/// Allocates `limit + 1` bytes for the primality table.
///
/// # Panics
///
/// Panics if `limit` exceeds `isize::MAX - 1`, the largest table that can be
/// allocated.
pub fn primes_up_to(limit: usize) -> Vec<usize> {
    eratosthenes::sieve(limit)
}

/// Number of primes in `[2, limit]`, counted with the segmented sieve.
pub fn prime_count(limit: usize) -> usize {
    segmented::count(limit, segmented::DEFAULT_SEGMENT_SIZE)
}
