use serde::{Deserialize, Serialize};

/// One timed run of the dithering workload at a specific thread count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Number of worker threads used for the run.
    pub threads: u32,
    /// Average wall-clock time across repetitions, in seconds.
    pub average_time_sec: f64,
    /// Speedup relative to the single-threaded baseline. Only meaningful
    /// when `threads > 1`.
    pub speedup: f64,
}

/// Benchmark records in the order they were read, one per tested thread
/// count. The harness writes unique thread counts; nothing here enforces
/// that.
pub type Dataset = Vec<BenchmarkRecord>;
