//! Single and grouped vertical bar charts.

use crate::error::Result;
use crate::layout::Layout;
use crate::render::backend::Surface;
use crate::types::{ChartOptions, Rect, Series};

/// Bar rectangles as `(category, series, rect)`, category-major.
///
/// Every (category, series) pair gets a rect, zero-height for zero values, so
/// intermittent zeros never shift the other bars.
pub fn bar_rects(
    series: &[Series],
    layout: &Layout,
    options: &ChartOptions,
) -> Vec<(usize, usize, Rect)> {
    let bars = layout.bar_geometry(series.len(), options.bar_gap);
    let plot_height = layout.plot_rect.height;

    let mut rects = Vec::with_capacity(layout.category_count * series.len());
    for category in 0..layout.category_count {
        for (index, s) in series.iter().enumerate() {
            let value = s.values.get(category).copied().unwrap_or(0.0);
            let height = layout.scale.bar_height(value, plot_height);
            rects.push((category, index, layout.bar_rect(&bars, category, index, height)));
        }
    }
    rects
}

/// Draw bars for one or more series sharing the category slots.
pub fn render_bars<S: Surface + ?Sized>(
    series: &[Series],
    layout: &Layout,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<()> {
    for s in series {
        s.check_finite()?;
    }

    for (_, index, rect) in bar_rects(series, layout, options) {
        let Some(s) = series.get(index) else {
            continue;
        };
        surface.fill_rect(rect, &s.color.bar_paint(rect))?;
    }
    Ok(())
}
