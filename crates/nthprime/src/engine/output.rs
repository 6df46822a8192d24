//! Output types for prime lookups.
//!
//! ## Purpose
//!
//! This module defines [`PrimeResult`], the detailed outcome of one lookup:
//! the prime itself plus the index, limit, and pass count that produced it.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Plain data**: All fields are public and `Copy`.
//!
//! ## Invariants
//!
//! * `prime <= limit as u64`.
//! * `passes == 0` only for the short-circuited first prime.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::engine::executor::ExecutorOutput;
use crate::primitives::ordinal::Ordinal;

/// Detailed outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeResult {
    /// The prime found.
    pub prime: u64,

    /// Ordinal as supplied by the caller.
    pub ordinal: i64,

    /// Convention the ordinal was read under.
    pub convention: Ordinal,

    /// Zero-based index of the prime.
    pub index: u64,

    /// Limit of the final sieve pass.
    pub limit: usize,

    /// Number of sieve passes run.
    pub passes: usize,

    /// Algorithm that produced the prime.
    pub algorithm: Algorithm,
}

impl PrimeResult {
    pub(crate) fn from_output(
        output: ExecutorOutput,
        ordinal: i64,
        convention: Ordinal,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            prime: output.prime as u64,
            ordinal,
            convention,
            index: output.index,
            limit: output.limit,
            passes: output.passes,
            algorithm,
        }
    }

    /// Whether the estimate was grown beyond its first pass.
    pub fn was_grown(&self) -> bool {
        self.passes > 1
    }
}

impl Display for PrimeResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Ordinal:      {} ({})", self.ordinal, self.convention)?;
        writeln!(f, "  Prime:        {}", self.prime)?;
        writeln!(f, "  Algorithm:    {}", self.algorithm)?;
        writeln!(f, "  Sieve limit:  {}", self.limit)?;
        write!(f, "  Sieve passes: {}", self.passes)
    }
}
