//! Shared workloads for the nthprime benchmarks.
//!
//! Each workload names a zero-based ordinal whose lookup is timed. Classic
//! lookups allocate one byte per integer up to the limit, so the largest
//! ordinals are only run against the segmented finder.

/// A named benchmark workload.
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    /// Display name used as the benchmark id.
    pub name: &'static str,

    /// Zero-based ordinal to look up.
    pub ordinal: i64,

    /// Whether the classic finder should run this workload.
    pub classic: bool,
}

/// Ordinals from the 10th to the 100,000,000th prime.
pub const WORKLOADS: &[Workload] = &[
    Workload {
        name: "10th",
        ordinal: 10,
        classic: true,
    },
    Workload {
        name: "100th",
        ordinal: 100,
        classic: true,
    },
    Workload {
        name: "1000th",
        ordinal: 1_000,
        classic: true,
    },
    Workload {
        name: "10000th",
        ordinal: 10_000,
        classic: true,
    },
    Workload {
        name: "100000th",
        ordinal: 100_000,
        classic: true,
    },
    Workload {
        name: "1000000th",
        ordinal: 1_000_000,
        classic: true,
    },
    Workload {
        name: "10000000th",
        ordinal: 10_000_000,
        classic: true,
    },
    Workload {
        name: "100000000th",
        ordinal: 100_000_000,
        classic: false,
    },
];

/// Workloads the classic finder runs.
pub fn classic_workloads() -> impl Iterator<Item = &'static Workload> {
    WORKLOADS.iter().filter(|w| w.classic)
}
