//! Classic Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module generates the ascending list of all primes in `[2, limit]`
//! from a full primality table, and selects the prime at a given index from
//! that list.
//!
//! ## Design notes
//!
//! * **Square start**: Striking for `p` starts at `p * p`; smaller multiples
//!   were already struck by smaller prime factors.
//! * **Bounded outer loop**: Candidates are only scanned up to
//!   `floor(sqrt(limit))`.
//! * **Transient**: The table and the resulting list are owned by the caller
//!   and discarded after use.
//!
//! ## Invariants
//!
//! * The output is strictly ascending.
//! * `limit < 2` yields an empty list.
//!
//! ## Non-goals
//!
//! * This module does not pick or bound the limit (handled by the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Largest limit whose primality table can be allocated.
pub const MAX_SIEVE_LIMIT: usize = isize::MAX as usize - 1;

/// Build the primality table for `0..=limit`.
///
/// `table[i]` is `true` iff `i` is prime.
///
/// # Panics
///
/// Panics if `limit > MAX_SIEVE_LIMIT`.
pub fn primality_table(limit: usize) -> Vec<bool> {
    assert!(
        limit <= MAX_SIEVE_LIMIT,
        "sieve limit {limit} exceeds MAX_SIEVE_LIMIT ({MAX_SIEVE_LIMIT})"
    );

    let mut table = vec![true; limit + 1];
    table[0] = false;
    if limit >= 1 {
        table[1] = false;
    }

    for p in 2..=limit.isqrt() {
        if table[p] {
            for multiple in (p * p..=limit).step_by(p) {
                table[multiple] = false;
            }
        }
    }

    table
}

/// All primes in `[2, limit]`, ascending.
///
/// # Panics
///
/// Panics if `limit > MAX_SIEVE_LIMIT`.
pub fn sieve(limit: usize) -> Vec<usize> {
    primality_table(limit)
        .iter()
        .enumerate()
        .filter_map(|(i, &is_prime)| is_prime.then_some(i))
        .collect()
}

/// Prime at zero-based `index` within `[2, limit]`.
///
/// Returns `Err(found)` with the number of primes up to `limit` when the
/// range is too short.
pub fn select(limit: usize, index: u64) -> Result<usize, usize> {
    let primes = sieve(limit);
    match usize::try_from(index).ok().and_then(|i| primes.get(i)) {
        Some(&prime) => Ok(prime),
        None => Err(primes.len()),
    }
}
