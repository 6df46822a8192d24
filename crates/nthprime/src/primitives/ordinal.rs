//! Ordinal conventions for prime lookups.
//!
//! ## Purpose
//!
//! This module maps a caller-supplied ordinal onto the zero-based index used
//! internally by the sieve. Callers pick the convention once, when they
//! configure a finder, and every lookup through that finder follows it.
//!
//! ## Key concepts
//!
//! * **ZeroBased**: ordinal 0 is the prime 2 (the default).
//! * **OneBased**: ordinal 1 is the prime 2; ordinal 0 is invalid.
//!
//! ## Invariants
//!
//! * Ordinals below [`Ordinal::min`] are rejected, never clamped.
//! * The resolved index is always non-negative.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::PrimeError;

/// Convention used to interpret the ordinal passed to a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordinal {
    /// `nth_prime(0) == 2`.
    #[default]
    ZeroBased,

    /// `nth_prime(1) == 2`.
    OneBased,
}

impl Ordinal {
    /// Smallest ordinal accepted under this convention.
    #[inline]
    pub const fn min(self) -> i64 {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }

    /// Resolve `ordinal` into a zero-based index.
    #[inline]
    pub fn to_index(self, ordinal: i64) -> core::result::Result<u64, PrimeError> {
        let min = self.min();
        if ordinal < min {
            return Err(PrimeError::InvalidArgument { ordinal, min });
        }
        Ok(ordinal.abs_diff(min))
    }

    /// Short name used in summaries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZeroBased => "zero-based",
            Self::OneBased => "one-based",
        }
    }
}

impl Display for Ordinal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
