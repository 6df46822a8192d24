//! # nthprime — nth prime lookup for Rust
//!
//! Find the nth prime with a bounded Sieve of Eratosthenes whose search limit
//! is estimated from the Prime Number Theorem.
//!
//! ## How it works
//!
//! A lookup resolves the requested ordinal to a zero-based index, sizes a
//! sieve with `n · (ln n + ln ln n)` (or a fixed limit for small indices),
//! sieves once, and indexes into the primes found. If the estimate falls
//! short, the configured recovery policy either reports the shortfall or
//! doubles the limit and sieves again, never past a configured maximum.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! assert_eq!(nth_prime(0)?, 2);
//! assert_eq!(nth_prime(10)?, 31);
//! assert_eq!(nth_prime(99)?, 541);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! let finder = Sieve::new()
//!     .ordinal(OneBased)          // nth_prime(1) == 2
//!     .recovery(Grow)             // double the limit when the estimate falls short
//!     .small_threshold(100)       // indices below 100 use the small limit
//!     .small_limit(1000)          // 168 primes lie below 1000
//!     .max_limit(1 << 30)         // never sieve past 2^30
//!     .adapter(Classic)           // full-table sieve
//!     .build()?;
//!
//! let result = finder.lookup(100)?;
//! assert_eq!(result.prime, 541);
//! println!("{}", result);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Ordinal:      100 (one-based)
//!   Prime:        541
//!   Algorithm:    Classic
//!   Sieve limit:  1000
//!   Sieve passes: 1
//! ```
//!
//! ### Result and Error Handling
//!
//! Lookups return `Result<u64, PrimeError>`:
//!
//! - **`Ok(u64)`**: The prime at the requested ordinal.
//! - **`Err(PrimeError)`**: An invalid ordinal, an estimate that fell short
//!   under the `Report` policy, or a limit above `max_limit`.
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! match nth_prime(-1) {
//!     Ok(prime) => println!("prime: {}", prime),
//!     Err(e) => eprintln!("lookup failed: {}", e),
//! }
//! ```
//!
//! ### Swapping Algorithms
//!
//! Every finder implements [`PrimeSource`](prelude::PrimeSource), and so does
//! any function wrapped in [`FnSource`](prelude::FnSource):
//!
//! ```rust
//! use nthprime::prelude::*;
//!
//! fn tenth(source: &impl PrimeSource) -> Result<u64, PrimeError> {
//!     source.nth_prime(10)
//! }
//!
//! let segmented = Sieve::new().segment_size(4096).adapter(Segmented).build()?;
//! assert_eq!(tenth(&segmented)?, 31);
//! assert_eq!(tenth(&FnSource::new(nth_prime))?, 31);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! nthprime = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Lookups emit `tracing` events (`debug` for estimates, `trace` per sieve
//! pass, `warn` when a limit is grown). Install any subscriber to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, ordinals, the PrimeSource trait.
mod primitives;

// Layer 2: Math - limit estimation.
mod math;

// Layer 3: Algorithms - classic and segmented sieves.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
mod engine;

// Layer 5: Adapters - algorithm-specific finders.
mod adapters;

// High-level fluent API.
mod api;

// Standard nthprime prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Classic, Segmented},
        Algorithm, ClassicFinder, FnSource, LimitEstimator, Ordinal,
        Ordinal::OneBased,
        Ordinal::ZeroBased,
        PrimeConfig, PrimeError, PrimeResult, PrimeSource, RecoveryPolicy,
        RecoveryPolicy::Grow,
        RecoveryPolicy::Report,
        SegmentedFinder, SieveBuilder as Sieve, nth_prime, prime_count, primes_up_to,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
