//! Common test utilities: dataset builders and recorder helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use ringchart::render::{render_chart, CommandRecorder, DrawCommand};
use ringchart::types::{ChartOptions, ChartType, Dataset, Point, Rgba, Series};

pub const BLUE: Rgba = Rgba::new(33, 150, 243);
pub const GREEN: Rgba = Rgba::new(76, 175, 80);
pub const ORANGE: Rgba = Rgba::new(255, 152, 0);
pub const PURPLE: Rgba = Rgba::new(156, 39, 176);

pub const PALETTE: [Rgba; 4] = [BLUE, GREEN, ORANGE, PURPLE];

/// Surface size used unless a test needs something else.
pub const WIDTH: f64 = 400.0;
pub const HEIGHT: f64 = 300.0;

/// `n` category labels: `C1`, `C2`, ...
pub fn categories(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("C{i}")).collect()
}

/// One series per value list, colored from [`PALETTE`].
pub fn dataset(chart_type: ChartType, series: &[&[f64]]) -> Dataset {
    let count = series.first().map_or(0, |s| s.len());
    let series = series
        .iter()
        .enumerate()
        .map(|(i, values)| {
            Series::new(
                format!("Series {}", i + 1),
                values.to_vec(),
                PALETTE[i % PALETTE.len()],
            )
        })
        .collect();
    Dataset::new(chart_type, categories(count), series)
}

pub fn donut(values: &[f64]) -> Dataset {
    dataset(ChartType::Donut, &[values])
}

pub fn bar(values: &[f64]) -> Dataset {
    dataset(ChartType::Bar, &[values])
}

/// Render onto a fresh recorder with default options.
pub fn record(dataset: &Dataset) -> CommandRecorder {
    record_with(dataset, WIDTH, HEIGHT, &ChartOptions::default())
}

pub fn record_with(
    dataset: &Dataset,
    width: f64,
    height: f64,
    options: &ChartOptions,
) -> CommandRecorder {
    let mut surface = CommandRecorder::new(width, height);
    render_chart(dataset, &mut surface, options).expect("render should succeed");
    surface
}

/// A recorded arc, flattened for assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCall {
    pub center: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

pub fn arc_calls(surface: &CommandRecorder) -> Vec<ArcCall> {
    surface
        .arcs()
        .filter_map(|c| match c {
            DrawCommand::Arc {
                center,
                radius,
                start,
                end,
                ..
            } => Some(ArcCall {
                center: *center,
                radius: *radius,
                start: *start,
                end: *end,
            }),
            _ => None,
        })
        .collect()
}

pub fn count_paths(surface: &CommandRecorder) -> usize {
    surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Path { .. }))
        .count()
}

pub fn count_lines(surface: &CommandRecorder) -> usize {
    surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
