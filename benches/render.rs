//! Benchmarks for a full chart render pass.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_precision_loss
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringchart::render::{render_chart, CommandRecorder, SvgSurface};
use ringchart::types::{ChartOptions, ChartType, Dataset, Rgba, Series};

const PALETTE: [Rgba; 4] = [
    Rgba::new(33, 150, 243),
    Rgba::new(76, 175, 80),
    Rgba::new(255, 152, 0),
    Rgba::new(156, 39, 176),
];

fn dataset(chart_type: ChartType, categories: usize, series: usize) -> Dataset {
    let labels = (0..categories).map(|i| format!("Day {}", i + 1)).collect();
    let series = (0..series)
        .map(|s| {
            let values = (0..categories)
                .map(|i| 1_000.0 + ((i * 37 + s * 101) % 500) as f64 * 10.0)
                .collect();
            Series::new(format!("Series {}", s + 1), values, PALETTE[s % PALETTE.len()])
        })
        .collect();
    Dataset::new(chart_type, labels, series)
}

/// One pass per chart type onto the command recorder
fn bench_chart_types(c: &mut Criterion) {
    let options = ChartOptions::default();
    let cases = [
        ("line", dataset(ChartType::Line, 30, 3)),
        ("bar", dataset(ChartType::Bar, 12, 1)),
        ("grouped_bar", dataset(ChartType::GroupedBar, 12, 4)),
        ("donut", dataset(ChartType::Donut, 6, 1)),
    ];

    let mut group = c.benchmark_group("render_pass");
    for (name, data) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), data, |b, data| {
            let mut surface = CommandRecorder::new(800.0, 400.0);
            b.iter(|| render_chart(black_box(data), &mut surface, &options).expect("render"));
        });
    }
    group.finish();
}

/// Line chart cost as the category count grows
fn bench_line_scaling(c: &mut Criterion) {
    let options = ChartOptions::default();
    let mut group = c.benchmark_group("line_categories");
    for categories in [10_usize, 100, 1_000] {
        let data = dataset(ChartType::Line, categories, 2);
        group.throughput(Throughput::Elements(categories as u64));
        group.bench_with_input(BenchmarkId::from_parameter(categories), &data, |b, data| {
            let mut surface = CommandRecorder::new(1200.0, 400.0);
            b.iter(|| render_chart(black_box(data), &mut surface, &options).expect("render"));
        });
    }
    group.finish();
}

/// Full SVG document generation
fn bench_svg(c: &mut Criterion) {
    let options = ChartOptions::default();
    let data = dataset(ChartType::GroupedBar, 12, 3);
    c.bench_function("svg_grouped_bar", |b| {
        b.iter(|| {
            let mut surface = SvgSurface::new(800.0, 400.0);
            render_chart(black_box(&data), &mut surface, &options).expect("render");
            surface.finish()
        });
    });
}

criterion_group!(benches, bench_chart_types, bench_line_scaling, bench_svg);
criterion_main!(benches);
