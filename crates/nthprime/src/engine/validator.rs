//! Validation of finder configuration.
//!
//! ## Purpose
//!
//! This module checks builder parameters before a finder is constructed, so
//! that lookups only ever see a consistent configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: All checks are associated functions on [`Validator`].
//!
//! ## Invariants
//!
//! * A validated threshold is at least 3, so `ln ln n` is positive.
//! * A validated `max_limit` covers the small limit and fits an allocation.
//!
//! ## Non-goals
//!
//! * This module does not validate ordinals (see `primitives::ordinal`).
//! * This module does not correct invalid parameters.

// Internal dependencies
use crate::algorithms::eratosthenes::MAX_SIEVE_LIMIT;
use crate::math::estimate::MIN_SMALL_THRESHOLD;
use crate::primitives::errors::PrimeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for finder configuration.
pub struct Validator;

impl Validator {
    /// Validate the index below which the fixed small limit applies.
    pub fn validate_threshold(threshold: usize) -> Result<(), PrimeError> {
        if threshold < MIN_SMALL_THRESHOLD {
            return Err(PrimeError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate the fixed limit used for small indices.
    pub fn validate_small_limit(small_limit: usize) -> Result<(), PrimeError> {
        if small_limit < 2 {
            return Err(PrimeError::InvalidSmallLimit(small_limit));
        }
        Ok(())
    }

    /// Validate the upper bound on any sieve limit.
    pub fn validate_max_limit(max_limit: usize, small_limit: usize) -> Result<(), PrimeError> {
        if max_limit < small_limit || max_limit > MAX_SIEVE_LIMIT {
            return Err(PrimeError::InvalidMaxLimit {
                max_limit,
                min: small_limit,
                max: MAX_SIEVE_LIMIT,
            });
        }
        Ok(())
    }

    /// Validate the window width of the segmented sieve.
    pub fn validate_segment_size(segment_size: usize) -> Result<(), PrimeError> {
        if segment_size == 0 {
            return Err(PrimeError::InvalidSegmentSize(segment_size));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PrimeError> {
        if let Some(param) = duplicate_param {
            return Err(PrimeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
