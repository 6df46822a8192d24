//! Capability interface for nth prime lookups.
//!
//! ## Purpose
//!
//! This module defines [`PrimeSource`], the single-operation trait every
//! finder implements, so callers can depend on the capability instead of a
//! concrete sieve. Alternate algorithms and test doubles plug in without
//! touching call sites.
//!
//! ## Key concepts
//!
//! * **Finders**: Built finders implement the trait directly.
//! * **Functions**: [`FnSource`] lifts any `Fn(i64) -> Result<u64, PrimeError>`
//!   into a source.
//! * **Forwarding**: References and boxes forward to the inner source.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

// External dependencies
use core::fmt::{Debug, Formatter};

// Internal dependencies
use crate::primitives::errors::PrimeError;

/// Anything that can resolve an ordinal to a prime.
pub trait PrimeSource {
    /// Return the prime at ordinal `n`.
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError>;
}

impl<S: PrimeSource + ?Sized> PrimeSource for &S {
    #[inline]
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        (**self).nth_prime(n)
    }
}

impl<S: PrimeSource + ?Sized> PrimeSource for Box<S> {
    #[inline]
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        (**self).nth_prime(n)
    }
}

/// A function or closure acting as a [`PrimeSource`].
#[derive(Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F> FnSource<F>
where
    F: Fn(i64) -> Result<u64, PrimeError>,
{
    /// Wrap `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> PrimeSource for FnSource<F>
where
    F: Fn(i64) -> Result<u64, PrimeError>,
{
    #[inline]
    fn nth_prime(&self, n: i64) -> Result<u64, PrimeError> {
        (self.0)(n)
    }
}

impl<F> Debug for FnSource<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnSource(..)")
    }
}
