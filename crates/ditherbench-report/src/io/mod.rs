//! IO utilities for loading benchmark result files.

pub mod benchmark_csv;

pub use benchmark_csv::{
    read_benchmark_csv, SPEEDUP_COLUMN, THREADS_COLUMN, TIME_COLUMN,
};
