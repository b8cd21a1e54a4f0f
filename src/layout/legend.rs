//! Legend and slice label placement.

use crate::types::{Color, Point, Rect};

/// Distance of a donut slice label from the center, as a fraction of the
/// outer radius. Sits inside the ring, clear of the hole.
pub const SLICE_LABEL_RADIUS_RATIO: f64 = 0.7;

/// Swatch and spacing metrics for a legend row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendMetrics {
    pub swatch_size: f64,
    /// Space between a swatch and its label
    pub label_gap: f64,
    /// Space between one entry's label and the next swatch
    pub item_gap: f64,
    pub row_height: f64,
}

impl LegendMetrics {
    /// Metrics scaled to a font size.
    pub fn for_font_size(font_size: f64) -> Self {
        Self {
            swatch_size: font_size,
            label_gap: font_size * 0.5,
            item_gap: font_size * 1.5,
            row_height: font_size * 2.0,
        }
    }
}

/// One placed legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    pub swatch: Rect,
    /// Left end of the label, vertically centered on the swatch
    pub label_at: Point,
}

/// Lay `entries` out left to right as one row centered on `center_x`, in the
/// row whose top edge is `row_top`. `label_widths[i]` is the measured width of
/// entry `i`'s label.
pub fn place_legend(
    entries: &[(String, Color)],
    label_widths: &[f64],
    center_x: f64,
    row_top: f64,
    metrics: &LegendMetrics,
) -> Vec<LegendItem> {
    let entry_width = |w: f64| metrics.swatch_size + metrics.label_gap + w;
    let total: f64 = label_widths.iter().map(|w| entry_width(*w)).sum::<f64>()
        + metrics.item_gap * entries.len().saturating_sub(1) as f64;

    let mid_y = row_top + metrics.row_height / 2.0;
    let mut x = center_x - total / 2.0;
    entries
        .iter()
        .zip(label_widths)
        .map(|((label, color), width)| {
            let swatch = Rect::new(
                x,
                mid_y - metrics.swatch_size / 2.0,
                metrics.swatch_size,
                metrics.swatch_size,
            );
            let item = LegendItem {
                label: label.clone(),
                color: *color,
                swatch,
                label_at: Point::new(swatch.right() + metrics.label_gap, mid_y),
            };
            x += entry_width(*width) + metrics.item_gap;
            item
        })
        .collect()
}

/// Where a donut slice's percentage label goes: on the bisector of the slice,
/// at [`SLICE_LABEL_RADIUS_RATIO`] of the radius.
pub fn slice_label_position(center: Point, radius: f64, mid_angle: f64) -> Point {
    center.polar(SLICE_LABEL_RADIUS_RATIO * radius, mid_angle)
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

    fn entries(n: usize) -> Vec<(String, Color)> {
        (0..n)
            .map(|i| (format!("S{i}"), Color::Solid(Rgba::BLACK)))
            .collect()
    }

    #[test]
    fn test_row_is_centered() {
        let metrics = LegendMetrics {
            swatch_size: 10.0,
            label_gap: 5.0,
            item_gap: 20.0,
            row_height: 20.0,
        };
        let items = place_legend(&entries(2), &[30.0, 50.0], 200.0, 100.0, &metrics);
        // 45 + 20 + 65 = 130 wide
        assert_eq!(items[0].swatch.x, 135.0);
        assert_eq!(items[0].swatch.y, 105.0);
        assert_eq!(items[0].label_at, Point::new(150.0, 110.0));
        assert_eq!(items[1].swatch.x, 200.0);
        let right = items[1].label_at.x + 50.0;
        assert_eq!(right, 265.0);
    }

    #[test]
    fn test_items_do_not_overlap() {
        let metrics = LegendMetrics::for_font_size(12.0);
        let items = place_legend(&entries(4), &[40.0; 4], 300.0, 0.0, &metrics);
        for pair in items.windows(2) {
            assert!(pair[0].label_at.x + 40.0 < pair[1].swatch.x);
        }
    }

    #[test]
    fn test_slice_label_position() {
        let p = slice_label_position(Point::new(100.0, 100.0), 50.0, 0.0);
        assert!((p.x - 135.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }
}
