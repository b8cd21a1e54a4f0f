//! Donut (ring pie) chart.
//!
//! Sectors start at 12 o'clock and run clockwise. The hole is punched by
//! painting a background-colored disc over the sectors, so it has to come after
//! all of them.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{DataError, Result};
use crate::format::percent_label;
use crate::layout::{slice_label_position, DonutGeometry, Layout, LegendMetrics};
use crate::render::backend::{Surface, TextAlign, TextBaseline};
use crate::scale::value_to_angle;
use crate::types::{ChartOptions, Color, Paint, Series};

use super::legend::render_legend;
use super::text_style;

/// Angle of the first slice's leading edge (12 o'clock).
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// One resolved ring slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub value: f64,
    pub start: f64,
    pub end: f64,
    /// Rounded percentage text, e.g. `"65%"`
    pub label: String,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Bisector of the slice.
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep() / 2.0
    }
}

/// Split a full turn among the values of `series`.
///
/// Fails when a value is non-finite or negative, or when the values sum to
/// zero or less.
pub fn donut_slices(series: &Series) -> std::result::Result<Vec<Slice>, DataError> {
    series.check_finite()?;
    if let Some((index, value)) = series
        .values
        .iter()
        .copied()
        .enumerate()
        .find(|(_, v)| *v < 0.0)
    {
        return Err(DataError::NegativeSlice { index, value });
    }

    // Shares are taken relative to the largest slice so the sum stays finite
    // for values near f64::MAX.
    let largest = series.values.iter().copied().fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return Err(DataError::ZeroSumDonut {
            total: series.values.iter().sum(),
        });
    }
    let shares: Vec<f64> = series.values.iter().map(|v| v / largest).collect();
    let total: f64 = shares.iter().sum();

    let mut start = START_ANGLE;
    Ok(series
        .values
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(index, (&value, &share))| {
            let end = start + value_to_angle(share, total);
            let slice = Slice {
                index,
                value,
                start,
                end,
                label: percent_label(share, total),
            };
            start = end;
            slice
        })
        .collect())
}

/// Draw a donut of a single series. `categories` label the legend entries.
///
/// Data errors are reported before anything is drawn.
pub fn render_donut<S: Surface + ?Sized>(
    series: &Series,
    categories: &[String],
    layout: &Layout,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<DonutGeometry> {
    let slices = donut_slices(series)?;

    let legend_band = if options.show_legend {
        LegendMetrics::for_font_size(options.font_size).row_height
    } else {
        0.0
    };
    let ring = layout.donut_geometry(options.outer_margin, legend_band);

    for slice in &slices {
        let paint = series.color_at(slice.index).paint(layout.plot_rect);
        surface.fill_arc(ring.center, ring.radius, slice.start, slice.end, &paint)?;
    }

    surface.fill_arc(
        ring.center,
        ring.inner_radius,
        0.0,
        TAU,
        &Paint::Solid(options.background),
    )?;

    let mut label_style = text_style(options, options.slice_label_color)
        .aligned(TextAlign::Center, TextBaseline::Middle);
    label_style.bold = true;
    for slice in &slices {
        let at = slice_label_position(ring.center, ring.radius, slice.mid_angle());
        surface.draw_text(&slice.label, at, &label_style)?;
    }

    if options.show_legend {
        let entries: Vec<(String, Color)> = slices
            .iter()
            .map(|slice| {
                let label = categories
                    .get(slice.index)
                    .cloned()
                    .unwrap_or_else(|| format!("{} {}", series.label, slice.index + 1));
                (label, series.color_at(slice.index))
            })
            .collect();
        let row_top = layout.plot_rect.bottom() - legend_band;
        render_legend(&entries, ring.center.x, row_top, options, surface)?;
    }

    Ok(ring)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    #[test]
    fn test_slices_close_the_ring() {
        let series = Series::new("share", vec![3.0, 1.0, 7.5, 0.25], Rgba::BLACK);
        let slices = donut_slices(&series).unwrap();
        let sum: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((sum - TAU).abs() < 1e-9);
        assert_eq!(slices[0].start, START_ANGLE);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_values_near_f64_max_stay_finite() {
        let series = Series::new("share", vec![f64::MAX, f64::MAX / 3.0], Rgba::BLACK);
        let slices = donut_slices(&series).unwrap();
        assert!(slices.iter().all(|s| s.start.is_finite() && s.end.is_finite()));
        assert!((slices[0].sweep() - 0.75 * TAU).abs() < 1e-9);
        assert_eq!(slices[0].label, "75%");
        assert_eq!(slices[1].label, "25%");
    }

    #[test]
    fn test_negative_slice_is_rejected() {
        let series = Series::new("share", vec![3.0, -1.0], Rgba::BLACK);
        assert_eq!(
            donut_slices(&series),
            Err(DataError::NegativeSlice {
                index: 1,
                value: -1.0
            })
        );
    }

    #[test]
    fn test_empty_series_is_zero_sum() {
        let series = Series::new("share", Vec::new(), Rgba::BLACK);
        assert!(matches!(
            donut_slices(&series),
            Err(DataError::ZeroSumDonut { .. })
        ));
    }
}
