use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Custom error type for benchmark results loading failures
#[derive(Debug)]
pub enum LoadError {
    /// No file exists at the given path.
    FileNotFound(PathBuf),
    /// The file exists but could not be read as a benchmark results table.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::FileNotFound(path) => {
                write!(f, "Benchmark results file not found: {}", path.display())
            }
            LoadError::Parse(detail) => {
                write!(f, "Failed to parse benchmark results: {}", detail)
            }
        }
    }
}

impl Error for LoadError {}
