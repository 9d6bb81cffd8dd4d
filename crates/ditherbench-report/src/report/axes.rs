//! Pure chart-geometry helpers.
//!
//! Everything here is plain math over the dataset so it can be unit tested
//! without touching the Plotly drawing calls.
use crate::dataset::BenchmarkRecord;

/// Vertical headroom above the tallest bar, reserving space for the text
/// labels stacked over it.
pub const Y_AXIS_HEADROOM: f64 = 1.25;
/// Offset of the time label above its bar, as a fraction of the tallest bar.
pub const TIME_LABEL_OFFSET: f64 = 0.03;
/// Offset of the speedup label above its bar, as a fraction of the tallest bar.
pub const SPEEDUP_LABEL_OFFSET: f64 = 0.10;

/// Axis geometry derived once per rendering call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// X tick positions, one per record at its thread count, in row order.
    pub tick_values: Vec<f64>,
    /// Fixed y range `(0, headroom * max time)`. `None` when the dataset is
    /// empty; the axis is then left to auto-range a bar-less chart.
    pub y_range: Option<(f64, f64)>,
}

/// Compute tick positions and the y range for a dataset.
pub fn chart_geometry(records: &[BenchmarkRecord]) -> ChartGeometry {
    let tick_values = records.iter().map(|r| f64::from(r.threads)).collect();
    let y_range = max_time(records).map(|max| (0.0, max * Y_AXIS_HEADROOM));
    ChartGeometry {
        tick_values,
        y_range,
    }
}

/// Which of the two per-bar labels a `BarLabel` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Time,
    Speedup,
}

/// A positioned text label to be drawn above a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub kind: LabelKind,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Build the per-bar labels: the measured time above every bar, plus the
/// speedup for multi-threaded runs. Single-threaded runs are the baseline
/// and get no speedup label. Empty dataset yields no labels.
pub fn bar_labels(records: &[BenchmarkRecord]) -> Vec<BarLabel> {
    let max = match max_time(records) {
        Some(max) => max,
        None => return Vec::new(),
    };

    let mut labels = Vec::with_capacity(records.len() * 2);
    for record in records {
        let x = f64::from(record.threads);
        labels.push(BarLabel {
            kind: LabelKind::Time,
            x,
            y: record.average_time_sec + max * TIME_LABEL_OFFSET,
            text: format!("{:.3}s", record.average_time_sec),
        });
        if record.threads > 1 {
            labels.push(BarLabel {
                kind: LabelKind::Speedup,
                x,
                y: record.average_time_sec + max * SPEEDUP_LABEL_OFFSET,
                text: format!("(+{:.2}x)", record.speedup),
            });
        }
    }
    labels
}

fn max_time(records: &[BenchmarkRecord]) -> Option<f64> {
    records.iter().map(|r| r.average_time_sec).reduce(f64::max)
}
