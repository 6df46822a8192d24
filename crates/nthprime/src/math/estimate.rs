//! Sieve limit estimation from the Prime Number Theorem.
//!
//! ## Purpose
//!
//! This module sizes the sieve for a requested zero-based index. Small indices
//! use a fixed limit; larger ones use the asymptotic bound
//! `n · (ln n + ln ln n)` on the magnitude of the nth prime.
//!
//! ## Design notes
//!
//! * **Heuristic**: The bound is not a guarantee. With the default threshold
//!   it holds for every index that has been checked, but lowering the
//!   threshold exposes shortfalls at indices 3 through 12 (except 10).
//! * **Saturating**: Magnitudes beyond `usize::MAX` saturate; the executor
//!   rejects them against the configured maximum limit.
//! * **No-std**: Logarithms go through `num_traits::Float` (backed by `libm`
//!   without `std`).
//!
//! ## Invariants
//!
//! * `estimate` never returns less than `small_limit` for indices below the
//!   threshold.
//! * The asymptotic branch is only taken for indices `>= 3`, where
//!   `ln ln n > 0`.
//!
//! ## Non-goals
//!
//! * This module does not verify that the estimate is sufficient.
//! * This module does not allocate or sieve.

// External dependencies
use num_traits::Float;

/// Default index below which the fixed small limit is used.
pub const DEFAULT_SMALL_THRESHOLD: usize = 100;

/// Default fixed limit for small indices (168 primes lie below 1000).
pub const DEFAULT_SMALL_LIMIT: usize = 1000;

/// Smallest threshold for which the asymptotic formula is well-defined.
pub const MIN_SMALL_THRESHOLD: usize = 3;

/// Computes an upper bound on the location of the prime at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitEstimator {
    /// Indices below this value use `small_limit`.
    pub small_threshold: usize,

    /// Fixed limit used below the threshold.
    pub small_limit: usize,
}

impl Default for LimitEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SMALL_THRESHOLD, DEFAULT_SMALL_LIMIT)
    }
}

impl LimitEstimator {
    /// Create an estimator with an explicit threshold and small limit.
    pub const fn new(small_threshold: usize, small_limit: usize) -> Self {
        Self {
            small_threshold,
            small_limit,
        }
    }

    /// Raw `n · (ln n + ln ln n)` for `n = index`.
    ///
    /// Only meaningful for `index >= 3`; smaller indices produce non-positive
    /// or non-finite values.
    #[inline]
    pub fn magnitude(index: u64) -> f64 {
        let n = index as f64;
        let ln_n = Float::ln(n);
        n * (ln_n + Float::ln(ln_n))
    }

    /// Sieve limit expected to contain at least `index + 1` primes.
    pub fn estimate(&self, index: u64) -> usize {
        let threshold = self.small_threshold.max(MIN_SMALL_THRESHOLD) as u64;
        if index < threshold {
            return self.small_limit;
        }

        // `as` saturates at usize::MAX
        Self::magnitude(index) as usize
    }
}
