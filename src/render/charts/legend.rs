//! Legend drawing: a swatch and label per entry, one centered row.

use crate::error::Result;
use crate::layout::{place_legend, LegendItem, LegendMetrics};
use crate::render::backend::{Surface, TextAlign, TextBaseline};
use crate::types::{ChartOptions, Color};

use super::text_style;

/// Place and draw a legend row whose top edge is `row_top`, centered on
/// `center_x`. Returns the placed items.
pub fn render_legend<S: Surface + ?Sized>(
    entries: &[(String, Color)],
    center_x: f64,
    row_top: f64,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<Vec<LegendItem>> {
    let style = text_style(options, options.legend_text_color)
        .aligned(TextAlign::Left, TextBaseline::Middle);
    let widths: Vec<f64> = entries
        .iter()
        .map(|(label, _)| surface.measure_text(label, &style))
        .collect();

    let metrics = LegendMetrics::for_font_size(options.font_size);
    let items = place_legend(entries, &widths, center_x, row_top, &metrics);
    for item in &items {
        surface.fill_rect(item.swatch, &item.color.paint(item.swatch))?;
        surface.draw_text(&item.label, item.label_at, &style)?;
    }
    Ok(items)
}
