//! Plot rectangle and per-category geometry for one render pass.
//!
//! A [`Layout`] is rebuilt from the dataset and the surface size on every
//! render; nothing here is cached across passes.

use crate::error::LayoutError;
use crate::scale::Scale;
use crate::types::{Point, Rect};

/// Inner radius of the ring as a fraction of its outer radius.
pub const DONUT_HOLE_RATIO: f64 = 0.5;

/// Pixel geometry for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Area inside the padding where data is drawn
    pub plot_rect: Rect,
    pub padding: f64,
    /// Number of category slots on the horizontal axis
    pub category_count: usize,
    /// Value-axis scale (max value and ticks)
    pub scale: Scale,
    pub surface_width: f64,
    pub surface_height: f64,
}

/// Horizontal geometry of the bars in every category slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub slot_width: f64,
    pub bar_width: f64,
    /// Bars plus the inter-bar gap; never wider than the slot
    pub group_width: f64,
    pub gap: f64,
    /// Number of bars per category
    pub group_size: usize,
}

/// Center and radii of a donut ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
}

impl DonutGeometry {
    /// Lowest y covered by the ring.
    pub fn bottom(&self) -> f64 {
        self.center.y + self.radius
    }
}

/// Compute the plot rectangle for a surface.
///
/// A surface no larger than twice the padding in either dimension yields a
/// zero-area plot; [`Layout::check_renderable`] reports it.
pub fn compute_layout(
    surface_width: f64,
    surface_height: f64,
    padding: f64,
    category_count: usize,
) -> Layout {
    let plot_rect = Rect::new(
        padding,
        padding,
        (surface_width - 2.0 * padding).max(0.0),
        (surface_height - 2.0 * padding).max(0.0),
    );
    Layout {
        plot_rect,
        padding,
        category_count,
        scale: Scale::default(),
        surface_width,
        surface_height,
    }
}

impl Layout {
    /// Attach the value-axis scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn max_value(&self) -> f64 {
        self.scale.max
    }

    pub fn tick_count(&self) -> usize {
        self.scale.tick_count()
    }

    /// Err when the plot rectangle has no area.
    pub fn check_renderable(&self) -> Result<(), LayoutError> {
        if self.plot_rect.is_empty() {
            Err(LayoutError::TooSmall {
                width: self.surface_width,
                height: self.surface_height,
                padding: self.padding,
            })
        } else {
            Ok(())
        }
    }

    /// Surface y of `value`, clamped to the plot.
    pub fn value_y(&self, value: f64) -> f64 {
        let h = self.plot_rect.height;
        self.plot_rect.y + self.scale.pixel(value, h).clamp(0.0, h)
    }

    /// Surface y of horizontal gridline `index`, counted up from the bottom.
    pub fn tick_y(&self, index: usize) -> f64 {
        let n = self.tick_count().max(1) as f64;
        self.plot_rect.bottom() - self.plot_rect.height * index as f64 / n
    }

    /// Width of one category slot.
    pub fn slot_width(&self) -> f64 {
        if self.category_count == 0 {
            0.0
        } else {
            self.plot_rect.width / self.category_count as f64
        }
    }

    /// Center x of category slot `index`.
    pub fn slot_center_x(&self, index: usize) -> f64 {
        self.plot_rect.x + self.slot_width() * (index as f64 + 0.5)
    }

    /// Bar widths for `group_size` bars per category separated by `gap`.
    ///
    /// The gap shrinks to the slot width on narrow plots so bar widths never go
    /// negative.
    pub fn bar_geometry(&self, group_size: usize, gap: f64) -> BarGeometry {
        let slot_width = self.slot_width();
        let gap = gap.clamp(0.0, slot_width);
        let g = group_size.max(1) as f64;
        let bar_width = (slot_width - gap) / g;
        BarGeometry {
            slot_width,
            bar_width,
            group_width: bar_width * g + gap,
            gap,
            group_size: group_size.max(1),
        }
    }

    /// Left edge of the first bar in category `index`, with the bars centered
    /// in the slot.
    pub fn category_start_x(&self, bars: &BarGeometry, index: usize) -> f64 {
        let bars_width = bars.bar_width * bars.group_size as f64;
        self.plot_rect.x + bars.slot_width * index as f64 + (bars.slot_width - bars_width) / 2.0
    }

    /// Bar rectangle for category `index`, series `series`, `height` tall,
    /// standing on the plot bottom.
    pub fn bar_rect(&self, bars: &BarGeometry, index: usize, series: usize, height: f64) -> Rect {
        let x = self.category_start_x(bars, index) + series as f64 * bars.bar_width;
        Rect::new(
            x,
            self.plot_rect.bottom() - height,
            bars.bar_width,
            height,
        )
    }

    /// X of point `index` on a line chart. `None` with fewer than two
    /// categories, where no line can be drawn.
    pub fn point_x(&self, index: usize) -> Option<f64> {
        if self.category_count < 2 {
            return None;
        }
        let step = self.plot_rect.width / (self.category_count - 1) as f64;
        Some(self.plot_rect.x + index as f64 * step)
    }

    /// Ring geometry, leaving `legend_band` pixels free at the bottom of the
    /// plot so a legend below the ring never overlaps it.
    pub fn donut_geometry(&self, outer_margin: f64, legend_band: f64) -> DonutGeometry {
        let area = Rect::new(
            self.plot_rect.x,
            self.plot_rect.y,
            self.plot_rect.width,
            (self.plot_rect.height - legend_band).max(0.0),
        );
        let radius = (area.width.min(area.height) / 2.0 - outer_margin).max(0.0);
        DonutGeometry {
            center: area.center(),
            radius,
            inner_radius: radius * DONUT_HOLE_RATIO,
        }
    }
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

    #[test]
    fn test_plot_rect() {
        let layout = compute_layout(400.0, 300.0, 40.0, 4);
        assert_eq!(layout.plot_rect, Rect::new(40.0, 40.0, 320.0, 220.0));
        assert!(layout.check_renderable().is_ok());
    }

    #[test]
    fn test_too_small_is_degenerate() {
        let layout = compute_layout(80.0, 300.0, 40.0, 4);
        assert!(layout.plot_rect.is_empty());
        assert_eq!(
            layout.check_renderable(),
            Err(LayoutError::TooSmall {
                width: 80.0,
                height: 300.0,
                padding: 40.0
            })
        );
        assert!(compute_layout(0.0, 0.0, 40.0, 4).plot_rect.is_empty());
    }

    #[test]
    fn test_bar_geometry() {
        let layout = compute_layout(480.0, 300.0, 40.0, 4);
        let bars = layout.bar_geometry(2, 20.0);
        assert_eq!(bars.slot_width, 100.0);
        assert_eq!(bars.bar_width, 40.0);
        assert_eq!(bars.group_width, 100.0);
        assert_eq!(layout.category_start_x(&bars, 0), 50.0);
        assert_eq!(layout.bar_rect(&bars, 1, 1, 30.0), Rect::new(190.0, 230.0, 40.0, 30.0));
    }

    #[test]
    fn test_gap_never_exceeds_slot() {
        let layout = compute_layout(100.0, 100.0, 10.0, 40);
        let bars = layout.bar_geometry(3, 12.0);
        assert!(bars.bar_width >= 0.0);
        assert!(bars.group_width <= bars.slot_width + 1e-9);
    }

    #[test]
    fn test_point_x() {
        let layout = compute_layout(500.0, 300.0, 50.0, 5);
        assert_eq!(layout.point_x(0), Some(50.0));
        assert_eq!(layout.point_x(4), Some(450.0));
        assert_eq!(compute_layout(500.0, 300.0, 50.0, 1).point_x(0), None);
    }

    #[test]
    fn test_donut_geometry() {
        let layout = compute_layout(400.0, 300.0, 40.0, 2);
        let donut = layout.donut_geometry(10.0, 0.0);
        assert_eq!(donut.center, Point::new(200.0, 150.0));
        assert_eq!(donut.radius, 100.0);
        assert_eq!(donut.inner_radius, 50.0);

        let with_legend = layout.donut_geometry(10.0, 40.0);
        assert!(with_legend.bottom() <= layout.plot_rect.bottom() - 40.0);
    }

    #[test]
    fn test_tick_y() {
        let layout = compute_layout(400.0, 300.0, 50.0, 2);
        assert_eq!(layout.tick_y(0), 250.0);
        assert_eq!(layout.tick_y(5), 50.0);
    }
}
