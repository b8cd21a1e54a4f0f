use serde::{Deserialize, Serialize};

use super::color::Rgba;
use crate::format::ValueFormat;
use crate::scale::{DEFAULT_HEADROOM, DEFAULT_TICK_COUNT};

/// Rendering configuration shared by every chart type.
///
/// Every field has a default, so a JSON options file only needs the keys it
/// overrides.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    /// Space between the surface edge and the plot rectangle (axis labels and
    /// legends live here)
    pub padding: f64,
    /// Scale multiplier above the largest value
    pub headroom: f64,
    /// Number of intervals on the value axis (gridlines = ticks + 1)
    pub tick_count: usize,
    /// Horizontal gap shared by each category slot of a bar chart
    pub bar_gap: f64,
    /// Space between the donut ring and the plot edge
    pub outer_margin: f64,
    /// Radius of the point markers on line charts
    pub marker_radius: f64,
    pub line_width: f64,
    /// Opacity of the area under a line, relative to the stroke
    pub area_alpha: f64,
    pub background: Rgba,
    pub grid_color: Rgba,
    pub axis_label_color: Rgba,
    /// Color of the percentage labels inside donut slices
    pub slice_label_color: Rgba,
    pub legend_text_color: Rgba,
    pub font_family: String,
    pub font_size: f64,
    pub value_format: ValueFormat,
    pub show_legend: bool,
    /// Device pixel ratio applied by the canvas backend
    pub dpr: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            padding: 40.0,
            headroom: DEFAULT_HEADROOM,
            tick_count: DEFAULT_TICK_COUNT,
            bar_gap: 12.0,
            outer_margin: 10.0,
            marker_radius: 4.0,
            line_width: 2.0,
            area_alpha: 0.2,
            background: Rgba::WHITE,
            grid_color: Rgba::new(0xE0, 0xE0, 0xE0),
            axis_label_color: Rgba::new(0x60, 0x60, 0x60),
            slice_label_color: Rgba::WHITE,
            legend_text_color: Rgba::new(0x33, 0x33, 0x33),
            font_family: "Inter, Arial, sans-serif".to_string(),
            font_size: 12.0,
            value_format: ValueFormat::Plain,
            show_legend: true,
            dpr: 1.0,
        }
    }
}

impl ChartOptions {
    /// Decode options from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
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
    fn test_partial_json_keeps_defaults() {
        let opts = ChartOptions::from_json(
            r#"{"padding": 24, "valueFormat": {"kind": "currency", "symbol": "€"}}"#,
        )
        .unwrap();
        assert_eq!(opts.padding, 24.0);
        assert_eq!(opts.tick_count, 5);
        assert_eq!(opts.headroom, 1.1);
        assert_eq!(
            opts.value_format,
            ValueFormat::Currency {
                symbol: "€".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ChartOptions::from_json("{\"padding\": \"wide\"}").is_err());
    }
}
