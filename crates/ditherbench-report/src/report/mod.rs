//! Reporting and plotting helpers.
//!
//! This module wraps plotting helpers (Plotly) and the pure chart-geometry
//! math they are built from. Plots are intentionally small helper functions
//! converting benchmark records into `plotly::Plot`.
pub mod axes;
pub mod plots;

use std::path::Path;

use anyhow::{Context, Result};
use plotly::Plot;

/// Write a rendered plot to disk as a standalone HTML report.
pub fn write_report<P: AsRef<Path>>(plot: &Plot, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, plot.to_html())
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
