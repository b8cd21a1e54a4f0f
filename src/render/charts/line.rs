//! Line chart with a translucent area fill and point markers.

use std::f64::consts::TAU;

use crate::error::Result;
use crate::layout::Layout;
use crate::render::backend::Surface;
use crate::types::{ChartOptions, Paint, Point, Series};

/// Pixel position of every value, in category order. Empty when the layout
/// has fewer than two categories.
pub fn line_points(series: &Series, layout: &Layout) -> Vec<Point> {
    series
        .values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let x = layout.point_x(index)?;
            Some(Point::new(x, layout.value_y(*value)))
        })
        .collect()
}

/// Draw one series: area under the curve, then the line, then the markers.
///
/// A series with fewer than two points draws nothing.
pub fn render_line<S: Surface + ?Sized>(
    series: &Series,
    layout: &Layout,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<()> {
    series.check_finite()?;

    let points = line_points(series, layout);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Ok(());
    };
    if points.len() < 2 {
        tracing::debug!(series = %series.label, "single-point line series, nothing to draw");
        return Ok(());
    }

    let plot = layout.plot_rect;
    let mut area = Vec::with_capacity(points.len() + 2);
    area.extend_from_slice(&points);
    area.push(Point::new(last.x, plot.bottom()));
    area.push(Point::new(first.x, plot.bottom()));
    let area_paint = series.color.faded(options.area_alpha).paint(plot);
    surface.fill_path(&area, &area_paint)?;

    let color = series.color.primary();
    surface.stroke_path(&points, color, options.line_width)?;

    let marker = Paint::Solid(color);
    for point in &points {
        surface.fill_arc(*point, options.marker_radius, 0.0, TAU, &marker)?;
    }

    Ok(())
}
