//! Line/area chart rendering tests.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::f64::consts::TAU;

use common::*;
use ringchart::render::{CommandRecorder, DrawCommand, Stroke};
use ringchart::types::{ChartOptions, ChartType, Paint, Point, Rect};
use test_case::test_case;

/// (fill polygons, stroked polylines) in draw order.
fn paths(surface: &CommandRecorder) -> (Vec<(Vec<Point>, Paint)>, Vec<(Vec<Point>, Stroke)>) {
    let mut fills = Vec::new();
    let mut strokes = Vec::new();
    for command in surface.commands() {
        if let DrawCommand::Path {
            points,
            fill,
            stroke,
        } = command
        {
            if let Some(paint) = fill {
                fills.push((points.clone(), *paint));
            }
            if let Some(stroke) = stroke {
                strokes.push((points.clone(), *stroke));
            }
        }
    }
    (fills, strokes)
}

#[test]
fn test_points_span_plot_width() {
    let surface = record(&dataset(ChartType::Line, &[&[10.0, 40.0, 20.0, 30.0]]));
    let (_, strokes) = paths(&surface);
    assert_eq!(strokes.len(), 1);

    let (points, stroke) = &strokes[0];
    let padding = ChartOptions::default().padding;
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].x, padding);
    assert_close(points[3].x, WIDTH - padding, 1e-9);
    assert_eq!(stroke.color, BLUE);
    assert_eq!(stroke.width, ChartOptions::default().line_width);

    // Higher values sit higher on screen.
    assert!(points[1].y < points[3].y);
    assert!(points[3].y < points[2].y);
    assert!(points[2].y < points[0].y);
}

#[test]
fn test_area_closes_along_plot_bottom() {
    let options = ChartOptions::default();
    let surface = record(&dataset(ChartType::Line, &[&[5.0, 15.0, 10.0]]));
    let (fills, strokes) = paths(&surface);
    assert_eq!(fills.len(), 1);

    let (area, paint) = &fills[0];
    let line = &strokes[0].0;
    let bottom = HEIGHT - options.padding;
    assert_eq!(area.len(), line.len() + 2);
    assert_eq!(&area[..line.len()], line.as_slice());
    assert_eq!(area[3], Point::new(line[2].x, bottom));
    assert_eq!(area[4], Point::new(line[0].x, bottom));

    let Paint::Solid(fill) = paint else {
        panic!("solid series gives a solid area, got {paint:?}");
    };
    assert_close(fill.a, options.area_alpha, 1e-12);
}

#[test]
fn test_area_drawn_before_line_and_markers() {
    let surface = record(&dataset(ChartType::Line, &[&[1.0, 2.0, 3.0]]));
    let kinds: Vec<&str> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Path { fill: Some(_), .. } => Some("area"),
            DrawCommand::Path {
                stroke: Some(_), ..
            } => Some("line"),
            DrawCommand::Arc { .. } => Some("marker"),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec!["area", "line", "marker", "marker", "marker"]);
}

#[test]
fn test_markers_at_every_point() {
    let options = ChartOptions::default();
    let surface = record(&dataset(ChartType::Line, &[&[3.0, 1.0, 4.0, 1.0, 5.0]]));
    let (_, strokes) = paths(&surface);
    let markers = arc_calls(&surface);

    assert_eq!(markers.len(), 5);
    for (marker, point) in markers.iter().zip(&strokes[0].0) {
        assert_eq!(marker.center, *point);
        assert_eq!(marker.radius, options.marker_radius);
        assert_eq!((marker.start, marker.end), (0.0, TAU));
    }
}

#[test]
fn test_negative_values_clamp_to_baseline() {
    let surface = record(&dataset(ChartType::Line, &[&[-10.0, 10.0]]));
    let (_, strokes) = paths(&surface);
    let bottom = HEIGHT - ChartOptions::default().padding;
    assert_eq!(strokes[0].0[0].y, bottom);
}

#[test]
fn test_grid_lines_and_category_labels() {
    let options = ChartOptions::default();
    let surface = record(&dataset(ChartType::Line, &[&[1.0, 2.0, 3.0]]));

    // Horizontal gridlines per tick plus one vertical line per category.
    assert_eq!(count_lines(&surface), options.tick_count + 1 + 3);
    let texts: Vec<&str> = surface.texts().collect();
    for label in ["C1", "C2", "C3"] {
        assert!(texts.contains(&label));
    }
}

#[test]
fn test_single_category_draws_grid_only() {
    let options = ChartOptions::default();
    let surface = record(&dataset(ChartType::Line, &[&[42.0]]));

    assert_eq!(count_paths(&surface), 0);
    assert_eq!(surface.arcs().count(), 0);
    assert_eq!(count_lines(&surface), options.tick_count + 1);
}

#[test]
fn test_multi_series_line_with_legend() {
    let surface = record(&dataset(ChartType::Line, &[&[1.0, 2.0], &[2.0, 1.0], &[1.5, 1.5]]));
    let (fills, strokes) = paths(&surface);
    assert_eq!(fills.len(), 3);
    assert_eq!(strokes.len(), 3);
    let colors: Vec<_> = strokes.iter().map(|(_, s)| s.color).collect();
    assert_eq!(colors, vec![BLUE, GREEN, ORANGE]);

    // Legend swatches fit in the top padding band, clear of the plot.
    let padding = ChartOptions::default().padding;
    let plot = Rect::new(padding, padding, WIDTH - 2.0 * padding, HEIGHT - 2.0 * padding);
    let swatches: Vec<_> = surface.rects().collect();
    assert_eq!(swatches.len(), 3);
    for swatch in swatches {
        assert!(swatch.y >= 0.0 && swatch.bottom() <= padding);
        assert!(!swatch.intersects(&plot));
    }
}

#[test_case(10.0 ; "padding under legend row")]
#[test_case(23.5 ; "padding just short of legend row")]
fn test_legend_skipped_when_padding_cannot_hold_it(padding: f64) {
    let options = ChartOptions {
        padding,
        ..ChartOptions::default()
    };
    let data = dataset(ChartType::Line, &[&[1.0, 2.0], &[2.0, 1.0]]);
    let surface = record_with(&data, WIDTH, HEIGHT, &options);

    assert_eq!(surface.rects().count(), 0);
    assert!(!surface.texts().any(|t| t == "Series 1"));
    // The chart body is still drawn.
    assert_eq!(paths(&surface).1.len(), 2);
}

#[test]
fn test_legend_fits_exactly_in_padding() {
    let options = ChartOptions {
        padding: 24.0,
        ..ChartOptions::default()
    };
    let data = dataset(ChartType::Line, &[&[1.0, 2.0], &[2.0, 1.0]]);
    let surface = record_with(&data, WIDTH, HEIGHT, &options);

    let swatches: Vec<_> = surface.rects().collect();
    assert_eq!(swatches.len(), 2);
    for swatch in swatches {
        assert!(swatch.y >= 0.0 && swatch.bottom() <= options.padding);
    }
}

#[test]
fn test_single_series_line_has_no_legend() {
    let surface = record(&dataset(ChartType::Line, &[&[1.0, 2.0]]));
    assert_eq!(surface.rects().count(), 0);
    assert!(!surface.texts().any(|t| t == "Series 1"));
}
