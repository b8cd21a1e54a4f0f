//! Gridlines and axis labels shared by the line and bar charts.

use crate::error::Result;
use crate::layout::Layout;
use crate::render::backend::{Surface, TextAlign, TextBaseline};
use crate::types::{ChartOptions, Point};

use super::text_style;

/// Gap between the plot edge and its axis labels.
const LABEL_OFFSET: f64 = 8.0;
const GRID_LINE_WIDTH: f64 = 1.0;

/// Where category labels sit on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAxis {
    /// Labels under each data point, with a vertical gridline per category
    Points,
    /// Labels under each slot center, no vertical gridlines
    Slots,
}

impl CategoryAxis {
    fn label_x(self, layout: &Layout, index: usize) -> Option<f64> {
        match self {
            Self::Points => layout.point_x(index),
            Self::Slots => Some(layout.slot_center_x(index)),
        }
    }
}

/// Draw gridlines, value labels and category labels. Must run before any
/// series so the data occludes the grid.
pub fn render_grid<S: Surface + ?Sized>(
    layout: &Layout,
    categories: &[String],
    axis: CategoryAxis,
    options: &ChartOptions,
    surface: &mut S,
) -> Result<()> {
    let plot = layout.plot_rect;

    for index in 0..=layout.tick_count() {
        let y = layout.tick_y(index);
        surface.stroke_line(
            Point::new(plot.x, y),
            Point::new(plot.right(), y),
            options.grid_color,
            GRID_LINE_WIDTH,
        )?;
    }

    if axis == CategoryAxis::Points {
        for index in 0..layout.category_count {
            let Some(x) = layout.point_x(index) else {
                break;
            };
            surface.stroke_line(
                Point::new(x, plot.y),
                Point::new(x, plot.bottom()),
                options.grid_color,
                GRID_LINE_WIDTH,
            )?;
        }
    }

    let value_style = text_style(options, options.axis_label_color)
        .aligned(TextAlign::Right, TextBaseline::Middle);
    for (index, tick) in layout.scale.ticks.iter().enumerate() {
        let label = options.value_format.format(*tick);
        let at = Point::new(plot.x - LABEL_OFFSET, layout.tick_y(index));
        surface.draw_text(&label, at, &value_style)?;
    }

    let category_style = text_style(options, options.axis_label_color)
        .aligned(TextAlign::Center, TextBaseline::Top);
    for (index, label) in categories.iter().enumerate() {
        let Some(x) = axis.label_x(layout, index) else {
            continue;
        };
        let at = Point::new(x, plot.bottom() + LABEL_OFFSET);
        surface.draw_text(label, at, &category_style)?;
    }

    Ok(())
}
