//! Error types for prime lookup operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while resolving an
//! ordinal to a prime, including input validation, sieve range shortfalls,
//! and builder configuration constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the ordinal, limits, and counts involved.
//! * **Deferred**: Configuration errors are collected by the builder and
//!   surfaced from `build()`.
//! * **No-std**: Only `core` formatting is required.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Ordinals below the smallest valid position.
//! 2. **Range shortfall**: The estimated sieve holds too few primes.
//! 3. **Resource bound**: A required limit exceeds the configured maximum.
//! 4. **Parameter validation**: Invalid thresholds, limits, or segment sizes.
//!
//! ## Invariants
//!
//! * A failed lookup never yields a partial prime alongside the error.
//! * Ordinals are reported exactly as the caller supplied them.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for prime lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// The ordinal is below the smallest valid ordinal of the convention.
    InvalidArgument {
        /// Ordinal supplied by the caller.
        ordinal: i64,
        /// Smallest ordinal accepted by the configured convention.
        min: i64,
    },

    /// The sieve up to the estimated limit holds too few primes.
    InsufficientRange {
        /// Limit that was sieved.
        limit: usize,
        /// Ordinal supplied by the caller.
        ordinal: i64,
        /// Number of primes found up to `limit`.
        found: usize,
    },

    /// The lookup needs a sieve larger than the configured maximum.
    LimitExceeded {
        /// Ordinal supplied by the caller.
        ordinal: i64,
        /// Limit that would have been required next.
        limit: usize,
        /// Configured maximum limit.
        max_limit: usize,
    },

    /// The small-ordinal threshold must be at least 3.
    InvalidThreshold(usize),

    /// The fixed limit used below the threshold must be at least 2.
    InvalidSmallLimit(usize),

    /// The maximum limit must lie between the small-ordinal limit and the
    /// largest allocatable sieve.
    InvalidMaxLimit {
        /// The max_limit provided.
        max_limit: usize,
        /// Minimum accepted value.
        min: usize,
        /// Maximum accepted value.
        max: usize,
    },

    /// Segment size for the segmented sieve must be non-zero.
    InvalidSegmentSize(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { ordinal, min } => {
                write!(f, "Invalid ordinal: {ordinal} (must be >= {min})")
            }
            Self::InsufficientRange {
                limit,
                ordinal,
                found,
            } => {
                write!(
                    f,
                    "Insufficient range: limit {limit} holds {found} primes, not enough for ordinal {ordinal}"
                )
            }
            Self::LimitExceeded {
                ordinal,
                limit,
                max_limit,
            } => {
                write!(
                    f,
                    "Limit exceeded: ordinal {ordinal} needs limit {limit} (max_limit is {max_limit})"
                )
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "Invalid small_threshold: {threshold} (must be >= 3)")
            }
            Self::InvalidSmallLimit(limit) => {
                write!(f, "Invalid small_limit: {limit} (must be >= 2)")
            }
            Self::InvalidMaxLimit {
                max_limit,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid max_limit: {max_limit} (must be between {min} and {max})"
                )
            }
            Self::InvalidSegmentSize(size) => {
                write!(f, "Invalid segment_size: {size} (must be > 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimeError {}
