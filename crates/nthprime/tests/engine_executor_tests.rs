#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify how a lookup is driven from ordinal to prime:
//! - Ordinal resolution and the first-prime short-circuit
//! - The `Report` and `Grow` recovery policies
//! - The `max_limit` bound, both up front and while growing
//! - Batch resolution with one pass per limit for either algorithm
//!
//! ## Test Organization
//!
//! 1. **Resolution** - Plain lookups and the short-circuit
//! 2. **Report Policy** - Shortfalls surface as errors
//! 3. **Grow Policy** - Doubling, clamping and exhaustion
//! 4. **Limit Bound** - Estimates above `max_limit`
//! 5. **Batch** - Several ordinals per sieve
//! 6. **Logging** - Lookups under an installed subscriber

use nthprime::internals::algorithms::Algorithm;
use nthprime::internals::engine::executor::{
    DEFAULT_MAX_LIMIT, ExecutorOutput, PrimeConfig, PrimeExecutor, RecoveryPolicy,
};
use nthprime::internals::math::estimate::{DEFAULT_SMALL_LIMIT, LimitEstimator};
use nthprime::internals::primitives::errors::PrimeError;
use nthprime::internals::primitives::ordinal::Ordinal;

// ============================================================================
// Helper Functions
// ============================================================================

/// Configuration whose estimate undershoots for indices 3 through 12.
fn lowered_threshold(recovery: RecoveryPolicy) -> PrimeConfig {
    PrimeConfig {
        recovery,
        estimator: LimitEstimator::new(3, DEFAULT_SMALL_LIMIT),
        ..PrimeConfig::default()
    }
}

/// Sieve pass that never finds enough primes.
fn always_short(_limit: usize, _index: u64) -> Result<usize, usize> {
    Err(0)
}

/// Sieve pass that reports the limit it was handed.
fn echo_limit(limit: usize, _index: u64) -> Result<usize, usize> {
    Ok(limit)
}

// ============================================================================
// Resolution Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_default_config() {
    let config = PrimeConfig::default();

    assert_eq!(config.ordinal, Ordinal::ZeroBased);
    assert_eq!(config.recovery, RecoveryPolicy::Report);
    assert_eq!(config.algorithm, Algorithm::Classic);
    assert_eq!(config.max_limit, DEFAULT_MAX_LIMIT);
    assert!(config.custom_select_pass.is_none());
}

/// Test a plain lookup within the small limit.
#[test]
fn test_run_small_index() {
    let output = PrimeExecutor::run_with_config(10, &PrimeConfig::default()).unwrap();

    assert_eq!(
        output,
        ExecutorOutput {
            prime: 31,
            index: 10,
            limit: 1000,
            passes: 1,
        }
    );
}

/// Test a lookup sized by the asymptotic estimate.
#[test]
fn test_run_estimated_index() {
    let output = PrimeExecutor::run_with_config(1000, &PrimeConfig::default()).unwrap();

    assert_eq!(output.prime, 7927);
    assert_eq!(output.limit, 8840);
    assert_eq!(output.passes, 1);
}

/// Test both algorithms resolve identically.
#[test]
fn test_run_segmented_matches_classic() {
    let segmented = PrimeConfig {
        algorithm: Algorithm::Segmented,
        segment_size: 100,
        ..PrimeConfig::default()
    };

    for n in [1, 2, 50, 99, 100, 101, 2500] {
        assert_eq!(
            PrimeExecutor::run_with_config(n, &segmented),
            PrimeExecutor::run_with_config(n, &PrimeConfig::default()),
            "ordinal {}",
            n
        );
    }
}

/// Test the first prime is returned without a sieve pass.
#[test]
fn test_run_short_circuit() {
    let config = PrimeConfig {
        custom_select_pass: Some(always_short),
        ..PrimeConfig::default()
    };
    let output = PrimeExecutor::run_with_config(0, &config).unwrap();

    assert_eq!(output.prime, 2);
    assert_eq!(output.limit, 2);
    assert_eq!(output.passes, 0);
}

/// Test the one-based convention shifts the index.
#[test]
fn test_run_one_based() {
    let config = PrimeConfig {
        ordinal: Ordinal::OneBased,
        ..PrimeConfig::default()
    };

    let output = PrimeExecutor::run_with_config(1, &config).unwrap();
    assert_eq!((output.prime, output.index, output.passes), (2, 0, 0));

    let output = PrimeExecutor::run_with_config(11, &config).unwrap();
    assert_eq!((output.prime, output.index), (31, 10));
}

/// Test invalid ordinals are rejected before any sieving.
#[test]
fn test_run_invalid_ordinal() {
    let config = PrimeConfig {
        custom_select_pass: Some(always_short),
        ..PrimeConfig::default()
    };

    assert_eq!(
        PrimeExecutor::run_with_config(-3, &config),
        Err(PrimeError::InvalidArgument { ordinal: -3, min: 0 })
    );
}

/// Test the custom pass receives the estimated limit.
#[test]
fn test_custom_pass_receives_estimate() {
    let config = PrimeConfig {
        custom_select_pass: Some(echo_limit),
        ..PrimeConfig::default()
    };

    assert_eq!(PrimeExecutor::run_with_config(50, &config).unwrap().prime, 1000);
    assert_eq!(PrimeExecutor::run_with_config(1000, &config).unwrap().prime, 8840);
}

// ============================================================================
// Report Policy Tests
// ============================================================================

/// Test a shortfall is reported with the primes found.
#[test]
fn test_report_shortfall() {
    let config = lowered_threshold(RecoveryPolicy::Report);

    assert_eq!(
        PrimeExecutor::run_with_config(5, &config),
        Err(PrimeError::InsufficientRange {
            limit: 10,
            ordinal: 5,
            found: 4,
        })
    );
}

/// Test the error carries the ordinal as supplied, not the index.
#[test]
fn test_report_shortfall_one_based() {
    let config = PrimeConfig {
        ordinal: Ordinal::OneBased,
        ..lowered_threshold(RecoveryPolicy::Report)
    };

    assert_eq!(
        PrimeExecutor::run_with_config(6, &config),
        Err(PrimeError::InsufficientRange {
            limit: 10,
            ordinal: 6,
            found: 4,
        })
    );
}

/// Test that an index of 10 lands exactly on its estimate.
#[test]
fn test_report_exact_estimate() {
    let config = lowered_threshold(RecoveryPolicy::Report);
    let output = PrimeExecutor::run_with_config(10, &config).unwrap();

    assert_eq!((output.prime, output.limit), (31, 31));
}

// ============================================================================
// Grow Policy Tests
// ============================================================================

/// Test a single doubling recovers the shortfall.
#[test]
fn test_grow_doubles_once() {
    let config = lowered_threshold(RecoveryPolicy::Grow);
    let output = PrimeExecutor::run_with_config(5, &config).unwrap();

    assert_eq!(output.prime, 13);
    assert_eq!(output.limit, 20);
    assert_eq!(output.passes, 2);
}

/// Test repeated doubling.
#[test]
fn test_grow_doubles_twice() {
    let config = lowered_threshold(RecoveryPolicy::Grow);
    let output = PrimeExecutor::run_with_config(3, &config).unwrap();

    // 3 -> 6 -> 12
    assert_eq!(output.prime, 7);
    assert_eq!(output.limit, 12);
    assert_eq!(output.passes, 3);
}

/// Test every shortfall index recovers under growth.
#[test]
fn test_grow_recovers_all_shortfalls() {
    let config = lowered_threshold(RecoveryPolicy::Grow);
    let expected = [7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

    for (n, &prime) in (3..=12).zip(expected.iter()) {
        assert_eq!(
            PrimeExecutor::run_with_config(n, &config).map(|o| o.prime),
            Ok(prime),
            "ordinal {}",
            n
        );
    }
}

/// Test growth gives up once `max_limit` has been sieved.
#[test]
fn test_grow_exhausted() {
    let config = PrimeConfig {
        recovery: RecoveryPolicy::Grow,
        max_limit: 4000,
        custom_select_pass: Some(always_short),
        ..PrimeConfig::default()
    };

    // 1000 -> 2000 -> 4000, then the next doubling is refused
    assert_eq!(
        PrimeExecutor::run_with_config(5, &config),
        Err(PrimeError::LimitExceeded {
            ordinal: 5,
            limit: 8000,
            max_limit: 4000,
        })
    );
}

/// Test the last doubling is clamped to `max_limit`.
#[test]
fn test_grow_clamped_to_max_limit() {
    let config = PrimeConfig {
        recovery: RecoveryPolicy::Grow,
        max_limit: 3000,
        custom_select_pass: Some(always_short),
        ..PrimeConfig::default()
    };

    // 1000 -> 2000 -> 3000 (clamped), then refused
    assert_eq!(
        PrimeExecutor::run_with_config(5, &config),
        Err(PrimeError::LimitExceeded {
            ordinal: 5,
            limit: 6000,
            max_limit: 3000,
        })
    );
}

/// Test the custom pass under the report policy.
#[test]
fn test_report_with_custom_pass() {
    let config = PrimeConfig {
        custom_select_pass: Some(always_short),
        ..PrimeConfig::default()
    };

    assert_eq!(
        PrimeExecutor::run_with_config(5, &config),
        Err(PrimeError::InsufficientRange {
            limit: 1000,
            ordinal: 5,
            found: 0,
        })
    );
}

// ============================================================================
// Limit Bound Tests
// ============================================================================

/// Test an estimate above `max_limit` is refused before sieving.
#[test]
fn test_estimate_above_max_limit() {
    let config = PrimeConfig {
        max_limit: 1000,
        custom_select_pass: Some(echo_limit),
        ..PrimeConfig::default()
    };

    assert_eq!(
        PrimeExecutor::run_with_config(200, &config),
        Err(PrimeError::LimitExceeded {
            ordinal: 200,
            limit: 1393,
            max_limit: 1000,
        })
    );
    // The small limit itself is still allowed
    assert!(PrimeExecutor::run_with_config(99, &config).is_ok());
}

/// Test astronomically large ordinals are refused under the default bound.
#[test]
fn test_huge_ordinal_exceeds_default_bound() {
    let result = PrimeExecutor::run_with_config(i64::MAX, &PrimeConfig::default());

    assert!(matches!(
        result,
        Err(PrimeError::LimitExceeded { ordinal: i64::MAX, max_limit, .. }) if max_limit == DEFAULT_MAX_LIMIT
    ));
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test a batch is answered in caller order.
#[test]
fn test_batch_order() {
    let primes = PrimeExecutor::run_batch(&[99, 0, 10, 0], &PrimeConfig::default()).unwrap();
    assert_eq!(primes, vec![541, 2, 31, 2]);
}

/// Test an empty batch.
#[test]
fn test_batch_empty() {
    assert_eq!(PrimeExecutor::run_batch(&[], &PrimeConfig::default()), Ok(Vec::new()));
}

/// Test the batch is sized for its largest index and recovers like a lookup.
#[test]
fn test_batch_grow() {
    let config = lowered_threshold(RecoveryPolicy::Grow);
    assert_eq!(PrimeExecutor::run_batch(&[5, 1, 3], &config), Ok(vec![13, 3, 7]));

    let config = lowered_threshold(RecoveryPolicy::Report);
    assert_eq!(
        PrimeExecutor::run_batch(&[5, 1, 3], &config),
        Err(PrimeError::InsufficientRange {
            limit: 10,
            ordinal: 5,
            found: 4,
        })
    );
}

/// Test a batch under the one-based convention.
#[test]
fn test_batch_one_based() {
    let config = PrimeConfig {
        ordinal: Ordinal::OneBased,
        ..PrimeConfig::default()
    };

    assert_eq!(PrimeExecutor::run_batch(&[1, 2, 100], &config), Ok(vec![2, 3, 541]));
    assert_eq!(
        PrimeExecutor::run_batch(&[1, 0], &config),
        Err(PrimeError::InvalidArgument { ordinal: 0, min: 1 })
    );
}

/// Test batches ignore the custom sieve pass.
#[test]
fn test_batch_ignores_custom_pass() {
    for algorithm in [Algorithm::Classic, Algorithm::Segmented] {
        let config = PrimeConfig {
            algorithm,
            custom_select_pass: Some(always_short),
            ..PrimeConfig::default()
        };

        assert_eq!(PrimeExecutor::run_batch(&[25], &config), Ok(vec![101]));
    }
}

/// Test the segmented batch agrees with the classic batch.
#[test]
fn test_batch_segmented_matches_classic() {
    let segmented = PrimeConfig {
        algorithm: Algorithm::Segmented,
        segment_size: 97,
        ..PrimeConfig::default()
    };
    let ordinals = [10_000, 0, 99, 5, 99, 1, 2500, 100, 0, 7777];

    let expected = PrimeExecutor::run_batch(&ordinals, &PrimeConfig::default()).unwrap();
    assert_eq!(PrimeExecutor::run_batch(&ordinals, &segmented), Ok(expected.clone()));
    assert_eq!(expected[0], 104_743);
    assert_eq!(&expected[1..5], &[2, 541, 13, 541]);
}

/// Test the segmented batch recovers and reports like the classic batch.
#[test]
fn test_batch_segmented_policies() {
    let grow = PrimeConfig {
        algorithm: Algorithm::Segmented,
        segment_size: 4,
        ..lowered_threshold(RecoveryPolicy::Grow)
    };
    assert_eq!(PrimeExecutor::run_batch(&[5, 1, 3], &grow), Ok(vec![13, 3, 7]));

    let report = PrimeConfig {
        recovery: RecoveryPolicy::Report,
        ..grow
    };
    assert_eq!(
        PrimeExecutor::run_batch(&[5, 1, 3], &report),
        Err(PrimeError::InsufficientRange {
            limit: 10,
            ordinal: 5,
            found: 4,
        })
    );
}

/// Test the segmented batch is bounded by `max_limit` like single lookups.
#[test]
fn test_batch_segmented_bounded() {
    let config = PrimeConfig {
        algorithm: Algorithm::Segmented,
        max_limit: 1 << 20,
        ..PrimeConfig::default()
    };

    assert!(matches!(
        PrimeExecutor::run_batch(&[3, 80_000], &config),
        Err(PrimeError::LimitExceeded { ordinal: 80_000, max_limit: 1_048_576, .. })
    ));
}

// ============================================================================
// Logging Tests
// ============================================================================

/// Test lookups behave identically with every event enabled.
#[test]
fn test_lookups_under_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = lowered_threshold(RecoveryPolicy::Grow);
        assert_eq!(PrimeExecutor::run_with_config(0, &config).map(|o| o.prime), Ok(2));
        assert_eq!(PrimeExecutor::run_with_config(5, &config).map(|o| o.prime), Ok(13));
    });
}
