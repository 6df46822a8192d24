//! Execution engine for nth prime lookups.
//!
//! ## Purpose
//!
//! This module drives a lookup from ordinal to prime: it resolves the ordinal
//! to an index, estimates a sieve limit, runs sieve passes, and applies the
//! configured recovery policy when a pass falls short.
//!
//! ## Design notes
//!
//! * **States**: `Validating → Estimating/Sieving → Done | Failed`.
//! * **Short-circuit**: Index 0 returns 2 without sieving.
//! * **Bounded growth**: The `Grow` policy doubles the limit but never past
//!   `max_limit`; the final pass runs at exactly `max_limit`.
//! * **Batch**: Several ordinals are answered by one pass sized for the
//!   largest of them, keeping the memory bound of the configured algorithm.
//!
//! ## Invariants
//!
//! * Every sieve pass uses a limit `<= max_limit`.
//! * A policy is fixed per configuration; `Report` never retries.
//! * Errors carry the ordinal exactly as supplied.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not cache primes between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use tracing::{debug, trace, warn};

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::algorithms::eratosthenes::{MAX_SIEVE_LIMIT, sieve};
use crate::algorithms::segmented::{self, DEFAULT_SEGMENT_SIZE};
use crate::math::estimate::LimitEstimator;
use crate::primitives::errors::PrimeError;
use crate::primitives::ordinal::Ordinal;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom sieve pass.
///
/// Returns the prime at the index, or the number of primes up to the limit.
#[doc(hidden)]
pub type SelectPassFn = fn(
    usize, // limit
    u64,   // index
) -> Result<usize, usize>;

/// Default upper bound on a sieve limit.
pub const DEFAULT_MAX_LIMIT: usize = if (u32::MAX as usize) < MAX_SIEVE_LIMIT {
    u32::MAX as usize
} else {
    MAX_SIEVE_LIMIT
};

/// Policy applied when the estimated limit holds too few primes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Fail with [`PrimeError::InsufficientRange`].
    #[default]
    Report,

    /// Double the limit and sieve again, up to `max_limit`.
    Grow,
}

/// Output from a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorOutput {
    /// The prime found.
    pub prime: usize,

    /// Zero-based index of the prime.
    pub index: u64,

    /// Limit of the final (successful) pass.
    pub limit: usize,

    /// Number of sieve passes run; 0 for the short-circuit.
    pub passes: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for the executor.
#[derive(Debug, Clone, Copy)]
pub struct PrimeConfig {
    /// Ordinal convention.
    pub ordinal: Ordinal,

    /// Shortfall recovery policy.
    pub recovery: RecoveryPolicy,

    /// Sieve limit estimator.
    pub estimator: LimitEstimator,

    /// Upper bound on any sieve limit.
    pub max_limit: usize,

    /// Sieve algorithm.
    pub algorithm: Algorithm,

    /// Window width for the segmented sieve.
    pub segment_size: usize,

    /// Custom sieve pass, replacing `algorithm` when set.
    #[doc(hidden)]
    pub custom_select_pass: Option<SelectPassFn>,
}

impl Default for PrimeConfig {
    fn default() -> Self {
        Self {
            ordinal: Ordinal::default(),
            recovery: RecoveryPolicy::default(),
            estimator: LimitEstimator::default(),
            max_limit: DEFAULT_MAX_LIMIT,
            algorithm: Algorithm::default(),
            segment_size: DEFAULT_SEGMENT_SIZE,
            custom_select_pass: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Lookup engine.
pub struct PrimeExecutor;

impl PrimeExecutor {
    /// Resolve `ordinal` to a prime under `config`.
    pub fn run_with_config(
        ordinal: i64,
        config: &PrimeConfig,
    ) -> Result<ExecutorOutput, PrimeError> {
        let index = config.ordinal.to_index(ordinal)?;

        if index == 0 {
            debug!(ordinal, "first prime requested, skipping sieve");
            return Ok(ExecutorOutput {
                prime: 2,
                index,
                limit: 2,
                passes: 0,
            });
        }

        let (prime, limit, passes) =
            Self::resolve(ordinal, index, config, |limit| match config.custom_select_pass {
                Some(pass) => pass(limit, index),
                None => config.algorithm.select(limit, index, config.segment_size),
            })?;

        Ok(ExecutorOutput {
            prime,
            index,
            limit,
            passes,
        })
    }

    /// Resolve several ordinals with a single sieve pass per limit.
    ///
    /// Fails on the first invalid ordinal. The classic algorithm indexes one
    /// prime list; the segmented algorithm walks once and keeps only the
    /// requested primes. A custom sieve pass is not used for batches.
    pub fn run_batch(ordinals: &[i64], config: &PrimeConfig) -> Result<Vec<u64>, PrimeError> {
        let indices = ordinals
            .iter()
            .map(|&ordinal| config.ordinal.to_index(ordinal))
            .collect::<Result<Vec<u64>, PrimeError>>()?;

        // Positions of `indices`, ordered by index
        let mut order: Vec<usize> = (0..indices.len()).collect();
        order.sort_unstable_by_key(|&pos| indices[pos]);
        let sorted: Vec<u64> = order.iter().map(|&pos| indices[pos]).collect();

        let (Some(&last), Some(&max_index)) = (order.last(), sorted.last()) else {
            return Ok(Vec::new());
        };
        let ordinal = ordinals[last];

        let selected: Vec<usize> = match config.algorithm {
            Algorithm::Classic => {
                let (primes, _, _) = Self::resolve(ordinal, max_index, config, |limit| {
                    let primes = sieve(limit);
                    if primes.len() as u64 > max_index {
                        Ok(primes)
                    } else {
                        Err(primes.len())
                    }
                })?;
                sorted.iter().map(|&i| primes[i as usize]).collect()
            }
            Algorithm::Segmented => {
                let (primes, _, _) = Self::resolve(ordinal, max_index, config, |limit| {
                    segmented::select_many(limit, &sorted, config.segment_size)
                })?;
                primes
            }
        };

        let mut primes = vec![0u64; indices.len()];
        for (&pos, &prime) in order.iter().zip(selected.iter()) {
            primes[pos] = prime as u64;
        }
        Ok(primes)
    }

    /// Estimate, sieve, and recover until `pass` succeeds or the policy gives
    /// up. Returns the pass result, the final limit, and the pass count.
    fn resolve<R, F>(
        ordinal: i64,
        index: u64,
        config: &PrimeConfig,
        mut pass: F,
    ) -> Result<(R, usize, usize), PrimeError>
    where
        F: FnMut(usize) -> Result<R, usize>,
    {
        let max_limit = config.max_limit;
        let mut limit = config.estimator.estimate(index);
        debug!(ordinal, index, limit, "estimated sieve limit");

        if limit > max_limit {
            return Err(PrimeError::LimitExceeded {
                ordinal,
                limit,
                max_limit,
            });
        }

        let mut passes = 0usize;
        loop {
            passes += 1;
            let found = match pass(limit) {
                Ok(value) => {
                    trace!(limit, passes, "sieve pass resolved");
                    return Ok((value, limit, passes));
                }
                Err(found) => found,
            };
            trace!(limit, found, "sieve pass fell short");

            match config.recovery {
                RecoveryPolicy::Report => {
                    return Err(PrimeError::InsufficientRange {
                        limit,
                        ordinal,
                        found,
                    });
                }
                RecoveryPolicy::Grow => {
                    let doubled = limit.saturating_mul(2);
                    if limit >= max_limit {
                        return Err(PrimeError::LimitExceeded {
                            ordinal,
                            limit: doubled,
                            max_limit,
                        });
                    }
                    let next = doubled.min(max_limit);
                    warn!(ordinal, limit, next, found, "estimate fell short, growing limit");
                    limit = next;
                }
            }
        }
    }
}
