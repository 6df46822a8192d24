//! nth Prime Lookup Examples
//!
//! This example demonstrates the main ways to look up primes:
//! - Quick lookups through the convenience function
//! - Configured finders with a detailed summary
//! - Recovering from a low estimate by growing the limit
//! - Batch lookups and swapping finders behind `PrimeSource`
//!
//! Set `RUST_LOG=nthprime=debug` (or `trace`) to watch estimates and sieve
//! passes as they happen.

#[cfg(feature = "std")]
use nthprime::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;
#[cfg(feature = "std")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "std")]
fn main() -> Result<(), PrimeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(80));
    println!("nth Prime Lookup - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_quick_lookup()?;
    example_2_configured_finder()?;
    example_3_growing_limit()?;
    example_4_batch_and_sources()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Quick Lookup
fn example_1_quick_lookup() -> Result<(), PrimeError> {
    println!("Example 1: Quick Lookup");
    println!("{}", "-".repeat(80));

    for n in [0, 1, 10, 99, 10_000] {
        println!("  nth_prime({:>6}) = {}", n, nth_prime(n)?);
    }

    match nth_prime(-1) {
        Ok(prime) => println!("  nth_prime(-1) = {}", prime),
        Err(e) => println!("  nth_prime(-1) failed: {}", e),
    }

    // Expected output:
    //   nth_prime(     0) = 2
    //   nth_prime(     1) = 3
    //   nth_prime(    10) = 31
    //   nth_prime(    99) = 541
    //   nth_prime( 10000) = 104743
    //   nth_prime(-1) failed: Invalid ordinal: -1 (must be >= 0)

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Configured Finder
/// One-based ordinals with the segmented sieve, reporting a summary
fn example_2_configured_finder() -> Result<(), PrimeError> {
    println!("Example 2: Configured Finder");
    println!("{}", "-".repeat(80));

    let finder = Sieve::new()
        .ordinal(OneBased)
        .segment_size(64 * 1024)
        .adapter(Segmented)
        .build()?;

    let start = Instant::now();
    let result = finder.lookup(1_000_000)?;
    let elapsed = start.elapsed();

    println!("{}", result);
    println!("  Elapsed:      {:?}", elapsed);

    // Expected output:
    // Summary:
    //   Ordinal:      1000000 (one-based)
    //   Prime:        15485863
    //   Algorithm:    Segmented
    //   Sieve limit:  16441284
    //   Sieve passes: 1

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Growing the Limit
/// A lowered threshold makes the estimate undershoot for small indices
fn example_3_growing_limit() -> Result<(), PrimeError> {
    println!("Example 3: Growing the Limit");
    println!("{}", "-".repeat(80));

    let strict = Sieve::new().small_threshold(3).adapter(Classic).build()?;
    let growing = Sieve::new()
        .small_threshold(3)
        .recovery(Grow)
        .adapter(Classic)
        .build()?;

    match strict.nth_prime(5) {
        Ok(prime) => println!("  Report: {}", prime),
        Err(e) => println!("  Report: {}", e),
    }

    let result = growing.lookup(5)?;
    println!(
        "  Grow:   {} (limit {}, {} passes)",
        result.prime, result.limit, result.passes
    );

    // Expected output:
    //   Report: Insufficient range: limit 10 holds 4 primes, not enough for ordinal 5
    //   Grow:   13 (limit 20, 2 passes)

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Batch Lookups and Prime Sources
fn example_4_batch_and_sources() -> Result<(), PrimeError> {
    println!("Example 4: Batch Lookups and Prime Sources");
    println!("{}", "-".repeat(80));

    let classic = Sieve::new().adapter(Classic).build()?;
    let primes = classic.nth_primes(&[100, 0, 50, 25])?;
    println!("  nth_primes([100, 0, 50, 25]) = {:?}", primes);

    let segmented = Sieve::new().adapter(Segmented).build()?;
    let sources: [(&str, &dyn PrimeSource); 3] = [
        ("classic", &classic),
        ("segmented", &segmented),
        ("function", &FnSource::new(nth_prime)),
    ];

    for (name, source) in &sources {
        println!("  {:<10} 5000th = {}", name, source.nth_prime(5000)?);
    }

    println!("  primes up to 30: {:?}", primes_up_to(30));
    println!("  primes below 10^6: {}", prime_count(1_000_000));

    // Expected output:
    //   nth_primes([100, 0, 50, 25]) = [547, 2, 233, 101]
    //   classic    5000th = 48619
    //   segmented  5000th = 48619
    //   function   5000th = 48619
    //   primes up to 30: [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    //   primes below 10^6: 78498

    println!();
    Ok(())
}
