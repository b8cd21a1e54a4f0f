//! Donut chart rendering tests.
//!
//! Sector angles, percentage labels, the hole, and legend placement below the
//! ring, asserted against the recorded draw commands.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use common::*;
use ringchart::error::{ChartError, DataError};
use ringchart::render::{render_chart, CommandRecorder, DrawCommand};
use ringchart::types::{ChartOptions, ChartType, Color, Paint, Series};
use test_case::test_case;

#[test_case(&[65.0, 35.0] ; "two slices")]
#[test_case(&[1.0, 1.0, 1.0] ; "thirds")]
#[test_case(&[3.0, 0.1, 17.25, 0.0, 42.0] ; "uneven with a zero")]
#[test_case(&[1e-6, 1e9] ; "extreme ratio")]
#[test_case(&[1e308, 1e308] ; "sum beyond f64 range")]
fn test_sector_angles_close_the_ring(values: &[f64]) {
    let surface = record(&donut(values));
    let arcs = arc_calls(&surface);
    let sectors = &arcs[..values.len()];

    let total: f64 = sectors.iter().map(|a| a.end - a.start).sum();
    assert_close(total, TAU, 1e-9);
    assert_close(sectors[0].start, -FRAC_PI_2, 0.0);
    for pair in sectors.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_sixty_five_thirty_five() {
    let surface = record(&donut(&[65.0, 35.0]));
    let arcs = arc_calls(&surface);

    assert_close(arcs[0].start, -FRAC_PI_2, 1e-12);
    assert_close(arcs[0].end, -FRAC_PI_2 + 1.3 * PI, 1e-12);
    assert_close(arcs[1].start, -FRAC_PI_2 + 1.3 * PI, 1e-12);
    assert_close(arcs[1].end, -FRAC_PI_2 + TAU, 1e-12);

    let texts: Vec<&str> = surface.texts().collect();
    assert!(texts.contains(&"65%"));
    assert!(texts.contains(&"35%"));
}

#[test]
fn test_hole_is_drawn_after_sectors() {
    let options = ChartOptions::default();
    let surface = record(&donut(&[2.0, 1.0, 1.0]));

    let arcs: Vec<&DrawCommand> = surface.arcs().collect();
    assert_eq!(arcs.len(), 4);
    let DrawCommand::Arc {
        radius: outer,
        paint: first_paint,
        ..
    } = arcs[0]
    else {
        panic!("expected arc");
    };
    let DrawCommand::Arc {
        radius,
        start,
        end,
        paint,
        ..
    } = arcs[3]
    else {
        panic!("expected arc");
    };
    assert_eq!(*radius, outer * 0.5);
    assert_eq!((*start, *end), (0.0, TAU));
    assert_eq!(*paint, Paint::Solid(options.background));
    assert_eq!(*first_paint, Paint::Solid(BLUE));
}

#[test]
fn test_labels_sit_on_slice_bisector() {
    let surface = record(&donut(&[1.0, 1.0]));
    let ring = arc_calls(&surface)[0];

    let positions: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } if text.ends_with('%') => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(positions.len(), 2);

    // Halves: bisectors point straight right (0) and straight left (pi).
    let r = 0.7 * ring.radius;
    assert_close(positions[0].x, ring.center.x + r, 1e-9);
    assert_close(positions[0].y, ring.center.y, 1e-9);
    assert_close(positions[1].x, ring.center.x - r, 1e-9);
    assert_close(positions[1].y, ring.center.y, 1e-9);
}

#[test]
fn test_percentages_round_independently() {
    let surface = record(&donut(&[1.0, 1.0, 1.0]));
    let labels: Vec<&str> = surface.texts().filter(|t| t.ends_with('%')).collect();
    assert_eq!(labels, vec!["33%", "33%", "33%"]);
}

#[test]
fn test_huge_values_split_evenly() {
    let surface = record(&donut(&[1e308, 1e308]));
    let arcs = arc_calls(&surface);
    assert_close(arcs[0].end - arcs[0].start, PI, 1e-12);
    assert_close(arcs[1].end - arcs[1].start, PI, 1e-12);

    let labels: Vec<&str> = surface.texts().filter(|t| t.ends_with('%')).collect();
    assert_eq!(labels, vec!["50%", "50%"]);
}

#[test]
fn test_zero_slice_still_labelled() {
    let surface = record(&donut(&[5.0, 0.0]));
    let labels: Vec<&str> = surface.texts().filter(|t| t.ends_with('%')).collect();
    assert_eq!(labels, vec!["100%", "0%"]);
}

#[test_case(&[0.0, 0.0] ; "all zero")]
#[test_case(&[0.0] ; "single zero")]
fn test_zero_sum_is_error_without_sectors(values: &[f64]) {
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    let err = render_chart(&donut(values), &mut surface, &ChartOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Data(DataError::ZeroSumDonut { .. })
    ));
    assert_eq!(surface.arcs().count(), 0);
}

#[test]
fn test_negative_slice_is_error() {
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    let err = render_chart(&donut(&[5.0, -2.0]), &mut surface, &ChartOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Data(DataError::NegativeSlice { index: 1, .. })
    ));
    assert!(surface.is_empty());
}

#[test]
fn test_donut_requires_one_series() {
    let data = dataset(ChartType::Donut, &[&[1.0, 2.0], &[3.0, 4.0]]);
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    let err = render_chart(&data, &mut surface, &ChartOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Data(DataError::SeriesCount {
            expected: 1,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_per_slice_colors() {
    let mut data = donut(&[1.0, 2.0, 3.0]);
    data.series[0] = Series::new("Share", vec![1.0, 2.0, 3.0], BLUE).with_colors(vec![
        Color::from(GREEN),
        Color::from(ORANGE),
    ]);
    let surface = record(&data);

    let paints: Vec<Paint> = surface
        .arcs()
        .take(3)
        .filter_map(|c| match c {
            DrawCommand::Arc { paint, .. } => Some(*paint),
            _ => None,
        })
        .collect();
    // The third slice has no entry of its own and falls back to the series color.
    assert_eq!(
        paints,
        vec![Paint::Solid(GREEN), Paint::Solid(ORANGE), Paint::Solid(BLUE)]
    );
}

#[test_case(400.0, 300.0 ; "landscape")]
#[test_case(300.0, 400.0 ; "portrait")]
#[test_case(200.0, 130.0 ; "cramped")]
fn test_legend_never_overlaps_ring(width: f64, height: f64) {
    let data = donut(&[10.0, 20.0, 30.0]);
    let surface = record_with(&data, width, height, &ChartOptions::default());
    let ring = arc_calls(&surface)[0];
    let ring_bottom = ring.center.y + ring.radius;

    let swatches: Vec<_> = surface.rects().collect();
    assert_eq!(swatches.len(), 3);
    for swatch in swatches {
        assert!(
            swatch.y >= ring_bottom,
            "swatch top {} overlaps ring bottom {ring_bottom}",
            swatch.y
        );
    }

    let legend_labels: Vec<&str> = surface.texts().filter(|t| t.starts_with('C')).collect();
    assert_eq!(legend_labels, vec!["C1", "C2", "C3"]);
}

#[test]
fn test_legend_hidden_gives_ring_full_height() {
    let data = donut(&[1.0, 1.0]);
    let with_legend = record(&data);
    let options = ChartOptions {
        show_legend: false,
        ..ChartOptions::default()
    };
    let without_legend = record_with(&data, WIDTH, HEIGHT, &options);

    assert_eq!(without_legend.rects().count(), 0);
    assert!(arc_calls(&without_legend)[0].radius > arc_calls(&with_legend)[0].radius);
}
