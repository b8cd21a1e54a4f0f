//! Chart renderers.
//!
//! Each renderer takes its series, a [`Layout`] for the current pass and a
//! [`Surface`], and issues draw calls. [`render_chart`] is the single
//! recompute-and-draw entry point every redraw trigger goes through.

mod axes;
mod bars;
mod donut;
mod legend;
mod line;

pub use axes::{render_grid, CategoryAxis};
pub use bars::{bar_rects, render_bars};
pub use donut::{donut_slices, render_donut, Slice, START_ANGLE};
pub use legend::render_legend;
pub use line::{line_points, render_line};

use crate::error::Result;
use crate::layout::{compute_layout, Layout, LegendMetrics};
use crate::render::backend::{Surface, TextStyle};
use crate::scale::compute_scale;
use crate::types::{ChartOptions, ChartType, Color, Dataset, Rgba};

/// Base text style from the options, left/middle anchored.
pub(crate) fn text_style(options: &ChartOptions, color: Rgba) -> TextStyle {
    TextStyle {
        font_family: options.font_family.clone(),
        font_size: options.font_size,
        bold: false,
        color,
        align: Default::default(),
        baseline: Default::default(),
    }
}

/// Clear `surface` and draw `dataset` on it.
///
/// An empty dataset draws nothing at all. Invalid data fails before the
/// surface is touched. A surface too small for a plot only gets its
/// background.
pub fn render_chart<S: Surface + ?Sized>(
    dataset: &Dataset,
    surface: &mut S,
    options: &ChartOptions,
) -> Result<()> {
    if dataset.is_empty() {
        tracing::trace!("empty dataset, nothing to draw");
        return Ok(());
    }
    dataset.validate()?;
    if dataset.chart_type == ChartType::Donut {
        for series in &dataset.series {
            donut_slices(series)?;
        }
    }

    let (width, height) = surface.size();
    let layout = compute_layout(width, height, options.padding, dataset.category_count());

    surface.clear(options.background)?;
    if let Err(e) = layout.check_renderable() {
        tracing::debug!(error = %e, "skipping chart body");
        return Ok(());
    }

    match dataset.chart_type {
        ChartType::Line => {
            render_cartesian(dataset, layout, CategoryAxis::Points, options, surface)?;
        }
        ChartType::Bar | ChartType::GroupedBar => {
            render_cartesian(dataset, layout, CategoryAxis::Slots, options, surface)?;
        }
        ChartType::Donut => {
            if let Some(series) = dataset.series.first() {
                render_donut(series, &dataset.categories, &layout, options, surface)?;
            }
        }
    }

    tracing::trace!(
        chart_type = ?dataset.chart_type,
        width,
        height,
        series = dataset.series.len(),
        "chart rendered"
    );
    Ok(())
}

fn render_cartesian<S: Surface + ?Sized>(
    dataset: &Dataset,
    layout: Layout,
    axis: CategoryAxis,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<()> {
    let values: Vec<f64> = dataset.values().collect();
    let scale = compute_scale(&values, options.headroom, options.tick_count)?;
    let layout = layout.with_scale(scale);

    render_grid(&layout, &dataset.categories, axis, options, surface)?;
    match axis {
        CategoryAxis::Points => {
            for series in &dataset.series {
                render_line(series, &layout, options, surface)?;
            }
        }
        CategoryAxis::Slots => render_bars(&dataset.series, &layout, options, surface)?,
    }

    if options.show_legend && dataset.series.len() > 1 {
        let metrics = LegendMetrics::for_font_size(options.font_size);
        // The row lives in the top padding band and never spills into the plot
        if layout.padding < metrics.row_height {
            tracing::debug!(
                padding = layout.padding,
                row_height = metrics.row_height,
                "padding too small for legend, skipping it"
            );
            return Ok(());
        }
        let entries: Vec<(String, Color)> = dataset
            .series
            .iter()
            .map(|s| (s.label.clone(), s.color))
            .collect();
        let row_top = (layout.padding - metrics.row_height) / 2.0;
        render_legend(
            &entries,
            layout.plot_rect.center().x,
            row_top,
            options,
            surface,
        )?;
    }
    Ok(())
}
