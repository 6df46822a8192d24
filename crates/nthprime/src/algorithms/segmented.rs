//! Segmented Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module locates the prime at a given index (or counts primes) in
//! `[2, limit]` without materialising a table of `limit + 1` entries. Base
//! primes up to `floor(sqrt(limit))` strike a fixed-size window that slides
//! across the range.
//!
//! ## Design notes
//!
//! * **Memory**: O(sqrt(limit) + segment_size) instead of O(limit).
//! * **Early exit**: The walk stops at the segment holding the requested
//!   index (or the last of several requested indices).
//! * **Reuse**: A single window buffer is refilled for every segment.
//!
//! ## Invariants
//!
//! * Segments are contiguous, ascending and cover `[2, limit]` exactly once.
//! * Base primes never strike themselves (striking starts at `p * p`).
//!
//! ## Non-goals
//!
//! * This module does not expose primes incrementally to callers.

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
use core::ops::ControlFlow;

// Internal dependencies
use crate::algorithms::eratosthenes::sieve;

/// Default window width, in integers.
pub const DEFAULT_SEGMENT_SIZE: usize = 32 * 1024;

/// Walk `[2, limit]` segment by segment, handing each struck window to
/// `visit` along with the integer its first slot represents.
fn walk<B, F>(limit: usize, segment_size: usize, mut visit: F) -> Option<B>
where
    F: FnMut(usize, &[bool]) -> ControlFlow<B>,
{
    if limit < 2 {
        return None;
    }

    let segment_size = segment_size.clamp(1, limit - 1);
    let base = sieve(limit.isqrt());
    let mut window = vec![true; segment_size];
    let mut low = 2usize;

    loop {
        let high = low.saturating_add(segment_size - 1).min(limit);
        let marks = &mut window[..high - low + 1];
        marks.fill(true);

        for &p in &base {
            let square = p * p;
            if square > high {
                break;
            }
            let start = if square >= low {
                square
            } else {
                low.div_ceil(p) * p
            };
            for multiple in (start..=high).step_by(p) {
                marks[multiple - low] = false;
            }
        }

        if let ControlFlow::Break(value) = visit(low, marks) {
            return Some(value);
        }
        if high == limit {
            return None;
        }
        low = high + 1;
    }
}

/// Prime at zero-based `index` within `[2, limit]`.
///
/// Returns `Err(found)` with the number of primes up to `limit` when the
/// range is too short.
pub fn select(limit: usize, index: u64, segment_size: usize) -> Result<usize, usize> {
    let mut found = 0u64;
    let hit = walk(limit, segment_size, |low, marks| {
        for (offset, &is_prime) in marks.iter().enumerate() {
            if !is_prime {
                continue;
            }
            if found == index {
                return ControlFlow::Break(low + offset);
            }
            found += 1;
        }
        ControlFlow::Continue(())
    });

    hit.ok_or(found as usize)
}

/// Primes at each of the zero-based `indices` within `[2, limit]`, in one
/// walk.
///
/// `indices` must be ascending; repeats are allowed. Only the selected primes
/// are held. Returns `Err(found)` with the number of primes up to `limit`
/// when the range is too short for the last index.
pub fn select_many(
    limit: usize,
    indices: &[u64],
    segment_size: usize,
) -> Result<Vec<usize>, usize> {
    let mut primes = Vec::with_capacity(indices.len());
    if indices.is_empty() {
        return Ok(primes);
    }

    let mut found = 0u64;
    let done = walk(limit, segment_size, |low, marks| {
        for (offset, &is_prime) in marks.iter().enumerate() {
            if !is_prime {
                continue;
            }
            while primes.len() < indices.len() && indices[primes.len()] == found {
                primes.push(low + offset);
            }
            if primes.len() == indices.len() {
                return ControlFlow::Break(());
            }
            found += 1;
        }
        ControlFlow::Continue(())
    });

    match done {
        Some(()) => Ok(primes),
        None => Err(found as usize),
    }
}

/// Number of primes in `[2, limit]`.
pub fn count(limit: usize, segment_size: usize) -> usize {
    let mut total = 0usize;
    let _ = walk::<(), _>(limit, segment_size, |_, marks| {
        total += marks.iter().filter(|&&is_prime| is_prime).count();
        ControlFlow::Continue(())
    });
    total
}
