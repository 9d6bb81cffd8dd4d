use plotly::common::{Anchor, Font, Marker};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{Bar, Plot};

use crate::dataset::BenchmarkRecord;

use super::axes::{bar_labels, chart_geometry, BarLabel, LabelKind};

const BAR_COLOR: &str = "#007BFF";
const BAR_OPACITY: f64 = 0.9;
const TIME_LABEL_COLOR: &str = "black";
const TIME_LABEL_SIZE: usize = 10;
const SPEEDUP_LABEL_COLOR: &str = "red";
const SPEEDUP_LABEL_SIZE: usize = 9;

/// Build the execution-time bar chart for a set of benchmark records.
///
/// One bar per record at its thread count, ticks exactly at the measured
/// thread counts, y range fixed to leave headroom for the labels. This is
/// a pure function of the records and the styling constants; rendering the
/// same dataset twice produces identical plots.
pub fn plot_execution_time(records: &[BenchmarkRecord], title: &str) -> Plot {
    let threads: Vec<f64> = records.iter().map(|r| f64::from(r.threads)).collect();
    let times: Vec<f64> = records.iter().map(|r| r.average_time_sec).collect();

    let trace = Bar::new(threads, times)
        .name("Execution Time (s)")
        .marker(Marker::new().color(BAR_COLOR))
        .opacity(BAR_OPACITY);

    let geometry = chart_geometry(records);

    let x_axis = Axis::new()
        .title("Number of Threads (CPU Cores)")
        .tick_values(geometry.tick_values);

    let mut y_axis = Axis::new().title("Average Execution Time (seconds)");
    if let Some((lower, upper)) = geometry.y_range {
        y_axis = y_axis.range(vec![lower, upper]);
    }

    let annotations = bar_labels(records).into_iter().map(annotation).collect();

    let layout = Layout::new()
        .title(title)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .annotations(annotations);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    plot
}

fn annotation(label: BarLabel) -> Annotation {
    let (size, color) = match label.kind {
        LabelKind::Time => (TIME_LABEL_SIZE, TIME_LABEL_COLOR),
        LabelKind::Speedup => (SPEEDUP_LABEL_SIZE, SPEEDUP_LABEL_COLOR),
    };
    Annotation::new()
        .x(label.x)
        .y(label.y)
        .text(label.text)
        .show_arrow(false)
        .x_anchor(Anchor::Center)
        .y_anchor(Anchor::Bottom)
        .font(Font::new().size(size).color(color))
}
