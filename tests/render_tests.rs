//! Full render pass tests: redraw contract, degenerate inputs, validation and
//! options, independent of chart type.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::*;
use ringchart::error::{ChartError, DataError};
use ringchart::format::ValueFormat;
use ringchart::render::{render_chart, CommandRecorder, DrawCommand, Surface};
use ringchart::types::{ChartOptions, ChartType, Color, Dataset, Gradient, Paint, Rgba, Series};
use ringchart::{ChartController, ControllerState};
use test_case::test_case;

fn sample(chart_type: ChartType) -> Dataset {
    match chart_type {
        ChartType::Bar | ChartType::Donut => dataset(chart_type, &[&[30.0, 50.0, 20.0]]),
        ChartType::Line | ChartType::GroupedBar => {
            dataset(chart_type, &[&[30.0, 50.0, 20.0], &[10.0, 60.0, 40.0]])
        }
    }
}

#[test_case(ChartType::Line ; "line")]
#[test_case(ChartType::Bar ; "bar")]
#[test_case(ChartType::GroupedBar ; "grouped bar")]
#[test_case(ChartType::Donut ; "donut")]
fn test_redraw_is_idempotent(chart_type: ChartType) {
    let data = sample(chart_type);
    let options = ChartOptions::default();
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);

    render_chart(&data, &mut surface, &options).unwrap();
    let first = surface.commands().to_vec();
    render_chart(&data, &mut surface, &options).unwrap();

    assert!(!first.is_empty());
    assert_eq!(surface.commands(), first.as_slice());
}

#[test_case(ChartType::Line ; "line")]
#[test_case(ChartType::Bar ; "bar")]
#[test_case(ChartType::GroupedBar ; "grouped bar")]
#[test_case(ChartType::Donut ; "donut")]
fn test_pass_starts_with_clear(chart_type: ChartType) {
    let surface = record(&sample(chart_type));
    assert_eq!(
        surface.commands().first(),
        Some(&DrawCommand::Clear {
            color: ChartOptions::default().background
        })
    );
    let clears = surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Clear { .. }))
        .count();
    assert_eq!(clears, 1);
}

#[test_case(ChartType::Line ; "line")]
#[test_case(ChartType::Bar ; "bar")]
#[test_case(ChartType::GroupedBar ; "grouped bar")]
#[test_case(ChartType::Donut ; "donut")]
fn test_empty_dataset_draws_nothing(chart_type: ChartType) {
    let data = Dataset::new(chart_type, Vec::new(), Vec::new());
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    render_chart(&data, &mut surface, &ChartOptions::default()).unwrap();
    assert!(surface.is_empty());
}

#[test]
fn test_series_without_values_is_empty() {
    let data = Dataset::new(
        ChartType::Line,
        Vec::new(),
        vec![Series::new("Visitors", Vec::new(), BLUE)],
    );
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    render_chart(&data, &mut surface, &ChartOptions::default()).unwrap();
    assert!(surface.is_empty());
}

#[test_case(60.0, 60.0 ; "smaller than padding")]
#[test_case(80.0, 300.0 ; "zero plot width")]
#[test_case(400.0, 0.0 ; "collapsed height")]
#[test_case(0.0, 0.0 ; "zero size")]
fn test_too_small_surface_draws_background_only(width: f64, height: f64) {
    for chart_type in [ChartType::Line, ChartType::Bar, ChartType::Donut] {
        let surface = record_with(&sample(chart_type), width, height, &ChartOptions::default());
        assert_eq!(surface.commands().len(), 1, "{chart_type:?}");
        assert!(matches!(
            surface.commands()[0],
            DrawCommand::Clear { .. }
        ));
    }
}

#[test]
fn test_non_finite_value_rejected_before_drawing() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut data = sample(ChartType::Line);
        data.series[1].values[2] = bad;
        let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
        let err = render_chart(&data, &mut surface, &ChartOptions::default()).unwrap_err();
        let ChartError::Data(DataError::NonFinite { series, index, .. }) = err else {
            panic!("expected NonFinite, got {err:?}");
        };
        assert_eq!(series, "Series 2");
        assert_eq!(index, 2);
        assert!(surface.is_empty());
    }
}

#[test]
fn test_length_mismatch_rejected() {
    let mut data = sample(ChartType::GroupedBar);
    data.series[0].values.pop();
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    let err = render_chart(&data, &mut surface, &ChartOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Data(DataError::LengthMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_failed_pass_keeps_previous_frame() {
    let mut surface = CommandRecorder::new(WIDTH, HEIGHT);
    let good = sample(ChartType::Bar);
    render_chart(&good, &mut surface, &ChartOptions::default()).unwrap();
    let frame = surface.commands().to_vec();

    let mut bad = good.clone();
    bad.series[0].values[0] = f64::NAN;
    assert!(render_chart(&bad, &mut surface, &ChartOptions::default()).is_err());
    assert_eq!(surface.commands(), frame.as_slice());
}

#[test]
fn test_grouped_value_format() {
    let options = ChartOptions {
        value_format: ValueFormat::Currency {
            symbol: "$".to_string(),
        },
        ..ChartOptions::default()
    };
    let surface = record_with(&bar(&[30_000.0, 60_000.0]), WIDTH, HEIGHT, &options);
    let texts: Vec<&str> = surface.texts().collect();
    assert!(texts.contains(&"$66,000"));
    assert!(texts.contains(&"$0"));
}

#[test]
fn test_options_from_json_drive_render() {
    let options = ChartOptions::from_json(
        r##"{ "padding": 20, "background": "#101010", "showLegend": false }"##,
    )
    .unwrap();
    let data = sample(ChartType::GroupedBar);
    let surface = record_with(&data, WIDTH, HEIGHT, &options);

    assert_eq!(
        surface.commands()[0],
        DrawCommand::Clear {
            color: Rgba::new(16, 16, 16)
        }
    );
    // No legend swatches, bars only.
    assert_eq!(surface.rects().count(), 6);
    let bottom = surface.rects().map(|r| r.bottom()).fold(0.0, f64::max);
    assert_close(bottom, HEIGHT - 20.0, 1e-9);
}

#[test]
fn test_gradient_series_color() {
    let gradient = Color::Gradient(Gradient {
        start: BLUE,
        end: BLUE.with_alpha(0.0),
        direction: Default::default(),
    });
    let data = Dataset::new(
        ChartType::Bar,
        categories(2),
        vec![Series::new("Revenue", vec![1.0, 2.0], gradient)],
    );
    let surface = record(&data);
    for command in surface.commands() {
        if let DrawCommand::Rect { rect, paint } = command {
            let Paint::Linear(g) = paint else {
                panic!("expected gradient paint");
            };
            assert_eq!(g.start, BLUE);
            assert_eq!(g.from.y, rect.y);
            assert_eq!(g.to.y, rect.bottom());
        }
    }
}

#[test]
fn test_dataset_json_round_trip_renders() {
    let json = r##"{
        "chartType": "donut",
        "categories": ["Active", "Idle"],
        "series": [{ "label": "Users", "values": [65, 35], "color": "#2196F3" }]
    }"##;
    let data = Dataset::from_json(json).unwrap();
    let surface = record(&data);
    let texts: Vec<&str> = surface.texts().collect();
    assert!(texts.contains(&"65%"));
    assert!(texts.contains(&"Active"));

    let commands: serde_json::Value = serde_json::from_str(&surface.to_json().unwrap()).unwrap();
    assert_eq!(commands[0]["op"], "clear");
    assert!(commands
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["op"] == "arc"));
}

#[test]
fn test_controller_redraws_on_every_trigger() {
    let mut controller = ChartController::new(ChartOptions::default());
    controller
        .mount(CommandRecorder::new(WIDTH, HEIGHT))
        .unwrap();
    assert_eq!(controller.state(), ControllerState::Mounted);

    controller.set_dataset(sample(ChartType::Donut)).unwrap();
    assert_eq!(controller.state(), ControllerState::Rendered);
    let small = controller.surface().unwrap().commands().to_vec();

    controller.resize(WIDTH * 2.0, HEIGHT * 2.0).unwrap();
    let large = controller.surface().unwrap().commands().to_vec();
    assert_eq!(small.len(), large.len());
    assert_ne!(small, large);

    controller
        .set_options(ChartOptions {
            show_legend: false,
            ..ChartOptions::default()
        })
        .unwrap();
    assert_eq!(controller.surface().unwrap().rects().count(), 0);

    let surface = controller.unmount().unwrap();
    assert_eq!(surface.size(), (WIDTH * 2.0, HEIGHT * 2.0));
    assert_eq!(controller.state(), ControllerState::Unmounted);
}
