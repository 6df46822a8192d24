//! Layer 3: Algorithms
//!
//! This layer implements the sieves themselves: the classic table-based
//! Sieve of Eratosthenes and a segmented variant with bounded memory. Both
//! answer the same question for the engine layer: which prime sits at a given
//! index below a given limit, or how many primes the limit holds when it is
//! too short.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Classic full-table sieve.
pub mod eratosthenes;

// Windowed sieve with O(sqrt(limit)) base primes.
pub mod segmented;

/// Sieve algorithm used by a finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Full primality table up to the limit.
    #[default]
    Classic,

    /// Fixed-width windows slid across the range.
    Segmented,
}

impl Algorithm {
    /// Prime at zero-based `index` within `[2, limit]`, or the number of
    /// primes found when the range is too short.
    #[inline]
    pub fn select(
        self,
        limit: usize,
        index: u64,
        segment_size: usize,
    ) -> core::result::Result<usize, usize> {
        match self {
            Self::Classic => eratosthenes::select(limit, index),
            Self::Segmented => segmented::select(limit, index, segment_size),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Classic => f.write_str("Classic"),
            Self::Segmented => f.write_str("Segmented"),
        }
    }
}
