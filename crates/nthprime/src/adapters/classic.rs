//! Classic adapter for nth prime lookups.
//!
//! ## Purpose
//!
//! This module provides the default finder, backed by the full-table Sieve
//! of Eratosthenes. It is the fastest choice whenever a table of
//! `limit + 1` booleans fits comfortably in memory.
//!
//! ## Design notes
//!
//! * **Processing**: One table per sieve pass, discarded afterwards.
//! * **Delegation**: Delegates the estimate/sieve/recover loop to the engine.
//! * **Reusable**: A built finder is immutable and may be shared across
//!   threads.
//!
//! ## Invariants
//!
//! * Configuration is validated once, in `build()`.
//! * Every lookup follows the same ordinal convention and recovery policy.
//!
//! ## Non-goals
//!
//! * This adapter does not bound memory below O(limit) (use the segmented
//!   adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::algorithms::segmented::DEFAULT_SEGMENT_SIZE;
use crate::engine::executor::{
    DEFAULT_MAX_LIMIT, PrimeConfig, PrimeExecutor, RecoveryPolicy, SelectPassFn,
};
use crate::engine::output::PrimeResult;
use crate::engine::validator::Validator;
use crate::math::estimate::{DEFAULT_SMALL_LIMIT, DEFAULT_SMALL_THRESHOLD, LimitEstimator};
use crate::primitives::errors::PrimeError;
use crate::primitives::ordinal::Ordinal;
use crate::primitives::source::PrimeSource;

// ============================================================================
// Classic Builder
// ============================================================================

/// Builder for the classic finder.
#[derive(Debug, Clone)]
pub struct ClassicBuilder {
    /// Ordinal convention
    pub ordinal: Ordinal,

    /// Shortfall recovery policy
    pub recovery: RecoveryPolicy,

    /// Index below which `small_limit` is used
    pub small_threshold: usize,

    /// Fixed limit for small indices
    pub small_limit: usize,

    /// Upper bound on any sieve limit
    pub max_limit: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom sieve pass function.
    #[doc(hidden)]
    pub custom_select_pass: Option<SelectPassFn>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for ClassicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicBuilder {
    /// Create a new classic builder with default parameters.
    fn new() -> Self {
        Self {
            ordinal: Ordinal::default(),
            recovery: RecoveryPolicy::default(),
            small_threshold: DEFAULT_SMALL_THRESHOLD,
            small_limit: DEFAULT_SMALL_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            custom_select_pass: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the ordinal convention.
    pub fn ordinal(mut self, ordinal: Ordinal) -> Self {
        self.ordinal = ordinal;
        self
    }

    /// Set the shortfall recovery policy.
    pub fn recovery(mut self, policy: RecoveryPolicy) -> Self {
        self.recovery = policy;
        self
    }

    /// Set the index below which the fixed small limit is used.
    pub fn small_threshold(mut self, threshold: usize) -> Self {
        self.small_threshold = threshold;
        self
    }

    /// Set the fixed limit used for small indices.
    pub fn small_limit(mut self, limit: usize) -> Self {
        self.small_limit = limit;
        self
    }

    /// Set the upper bound on any sieve limit.
    pub fn max_limit(mut self, limit: usize) -> Self {
        self.max_limit = limit;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom sieve pass function.
    #[doc(hidden)]
    pub fn custom_select_pass(mut self, pass: SelectPassFn) -> Self {
        self.custom_select_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the classic finder.
    pub fn build(self) -> Result<ClassicFinder, PrimeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_threshold(self.small_threshold)?;
        Validator::validate_small_limit(self.small_limit)?;
        Validator::validate_max_limit(self.max_limit, self.small_limit)?;

        Ok(ClassicFinder {
            config: PrimeConfig {
                ordinal: self.ordinal,
                recovery: self.recovery,
                estimator: LimitEstimator::new(self.small_threshold, self.small_limit),
                max_limit: self.max_limit,
                algorithm: Algorithm::Classic,
                segment_size: DEFAULT_SEGMENT_SIZE,
                custom_select_pass: self.custom_select_pass,
            },
        })
    }
}

// ============================================================================
// Classic Finder
// ============================================================================

/// Finder backed by the classic Sieve of Eratosthenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicFinder {
    config: PrimeConfig,
}

impl ClassicFinder {
    /// Resolved configuration.
    pub fn config(&self) -> &PrimeConfig {
        &self.config
    }

    /// Resolve ordinal `n`, reporting how the prime was found.
    pub fn lookup(&self, n: i64) -> Result<PrimeResult, PrimeError> {
        let output = PrimeExecutor::run_with_config(n, &self.config)?;
        Ok(PrimeResult::from_output(
            output,
            n,
            self.config.ordinal,
            Algorithm::Classic,
        ))
    }

    /// Prime at ordinal `n`.
    pub fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        PrimeExecutor::run_with_config(n, &self.config).map(|output| output.prime as u64)
    }

    /// Primes at each of `ordinals`, in the same order, from a single sieve.
    pub fn nth_primes(&self, ordinals: &[i64]) -> Result<Vec<u64>, PrimeError> {
        PrimeExecutor::run_batch(ordinals, &self.config)
    }
}

impl PrimeSource for ClassicFinder {
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        ClassicFinder::nth_prime(self, n)
    }
}
