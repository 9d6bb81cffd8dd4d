//! Benchmark results CSV reader.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::dataset::{BenchmarkRecord, Dataset};
use crate::error::LoadError;

/// Column holding the worker thread count for each run.
pub const THREADS_COLUMN: &str = "Threads";
/// Column holding the average wall-clock time in seconds.
pub const TIME_COLUMN: &str = "Average_Time_sec";
/// Column holding the speedup over the single-threaded baseline.
pub const SPEEDUP_COLUMN: &str = "Speedup";

/// Read a benchmark results CSV file into an ordered dataset.
///
/// The header row is resolved by case-insensitive column name, so the
/// three expected columns may appear in any order and alongside extra
/// columns. Row order is preserved as read.
pub fn read_benchmark_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| LoadError::Parse(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Parse(format!("Failed to read header row: {}", e)))?
        .clone();

    let threads_idx = require_column(&headers, THREADS_COLUMN)?;
    let time_idx = require_column(&headers, TIME_COLUMN)?;
    let speedup_idx = require_column(&headers, SPEEDUP_COLUMN)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| LoadError::Parse(format!("Failed to read row {}: {}", row_idx + 1, e)))?;

        let threads: u32 = parse_field(&record, threads_idx, THREADS_COLUMN, row_idx)?;
        let average_time_sec: f64 = parse_field(&record, time_idx, TIME_COLUMN, row_idx)?;
        let speedup: f64 = parse_field(&record, speedup_idx, SPEEDUP_COLUMN, row_idx)?;

        records.push(BenchmarkRecord {
            threads,
            average_time_sec,
            speedup,
        });
    }

    log::debug!(
        "Read {} benchmark records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize, LoadError> {
    find_column(headers, name)
        .ok_or_else(|| LoadError::Parse(format!("Missing column '{}'", name)))
}

fn parse_field<T>(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row_idx: usize,
) -> Result<T, LoadError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = record.get(idx).ok_or_else(|| {
        LoadError::Parse(format!("Missing '{}' value at row {}", column, row_idx + 1))
    })?;
    raw.trim().parse().map_err(|e| {
        LoadError::Parse(format!(
            "Invalid '{}' value '{}' at row {}: {}",
            column,
            raw,
            row_idx + 1,
            e
        ))
    })
}
