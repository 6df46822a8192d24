//! Segmented adapter for nth prime lookups.
//!
//! ## Purpose
//!
//! This module provides a finder backed by the segmented sieve. Each pass
//! holds only the base primes up to `sqrt(limit)` and one window of
//! `segment_size` flags, so very large ordinals can be resolved without an
//! O(limit) table.
//!
//! ## Design notes
//!
//! * **Early exit**: A pass stops at the window holding the requested index.
//! * **Batch lookups**: `nth_primes` walks the range once and keeps only the
//!   requested primes, so batches share the memory bound.
//!
//! ## Invariants
//!
//! * `segment_size >= 1`.
//! * Results agree with the classic finder for every ordinal.

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
// Segmented Builder
// ============================================================================

/// Builder for the segmented finder.
#[derive(Debug, Clone)]
pub struct SegmentedBuilder {
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

    /// Window width in integers
    pub segment_size: usize,

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

impl Default for SegmentedBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentedBuilder {
    /// Create a new segmented builder with default parameters.
    fn new() -> Self {
        Self {
            ordinal: Ordinal::default(),
            recovery: RecoveryPolicy::default(),
            small_threshold: DEFAULT_SMALL_THRESHOLD,
            small_limit: DEFAULT_SMALL_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            segment_size: DEFAULT_SEGMENT_SIZE,
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

    // ========================================================================
    // Segmented-Specific Setters
    // ========================================================================

    /// Set the window width in integers.
    pub fn segment_size(mut self, size: usize) -> Self {
        self.segment_size = size;
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

    /// Build the segmented finder.
    pub fn build(self) -> Result<SegmentedFinder, PrimeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_threshold(self.small_threshold)?;
        Validator::validate_small_limit(self.small_limit)?;
        Validator::validate_max_limit(self.max_limit, self.small_limit)?;
        Validator::validate_segment_size(self.segment_size)?;

        Ok(SegmentedFinder {
            config: PrimeConfig {
                ordinal: self.ordinal,
                recovery: self.recovery,
                estimator: LimitEstimator::new(self.small_threshold, self.small_limit),
                max_limit: self.max_limit,
                algorithm: Algorithm::Segmented,
                segment_size: self.segment_size,
                custom_select_pass: self.custom_select_pass,
            },
        })
    }
}

// ============================================================================
// Segmented Finder
// ============================================================================

/// Finder backed by the segmented sieve.
#[derive(Debug, Clone, Copy)]
pub struct SegmentedFinder {
    config: PrimeConfig,
}

impl Default for SegmentedFinder {
    fn default() -> Self {
        Self {
            config: PrimeConfig {
                algorithm: Algorithm::Segmented,
                ..PrimeConfig::default()
            },
        }
    }
}

impl SegmentedFinder {
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
            Algorithm::Segmented,
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

impl PrimeSource for SegmentedFinder {
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        SegmentedFinder::nth_prime(self, n)
    }
}
