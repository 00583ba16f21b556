//! Dataset module - Measurements from the node-scaling query benchmark
//!
//! Each entry is the mean of three benchmark runs against a cluster of
//! `12 + 2*i` nodes.

use crate::series::{Series, Unit};

/// Mean query latency in milliseconds, clusters of 12..=68 nodes.
pub const LATENCY_MS: [f64; 29] = [
    123.393271, 383.285463, 301.800395, 310.348577, 315.4075,
    343.081597, 312.701977, 378.671791, 395.70084, 302.75321,
    310.421, 338.821303, 350.164212, 310.77975,
    394.191789, 353.653292, 336.113327, 325.113341, 300.932112,
    353.427951, 388.393776, 377.907071, 312.439214, 355.439214,
    450.12341, 338.70762, 367.640503, 348.393725, 521.838569,
];

/// Query throughput in requests per second, clusters of 12..=72 nodes.
pub const THROUGHPUT_REQS: [f64; 31] = [
    9553.56, 7516.23, 7210.23, 7531.64, 7547.30, 8520.80, 7251.02, 7597.24,
    7257.96, 7215.21, 8430.12, 7214.99, 6752.122, 7455.67, 7542.67, 7222.71,
    7322.71, 7302.52, 8404.52, 7160.65, 7169.42, 7318.27, 7133.02, 7300.08,
    6173.10, 6273.10, 6309.91, 5160.48, 5512.63, 6312.87, 6300.42,
];

pub fn latency_series() -> Series {
    Series::new("Latency", Unit::Milliseconds, LATENCY_MS.to_vec())
}

pub fn throughput_series() -> Series {
    Series::new("Throughput", Unit::RequestsPerSecond, THROUGHPUT_REQS.to_vec())
}
