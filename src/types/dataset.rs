use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::DataError;

/// Type of chart
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Line chart with a translucent fill under each series
    #[default]
    Line,
    /// Vertical bars, one series
    Bar,
    /// Side-by-side bars, one per series in every category
    GroupedBar,
    /// Ring pie chart of a single series
    Donut,
}

impl ChartType {
    /// Allowed series count as (minimum, maximum).
    fn series_bounds(self) -> (usize, Option<usize>) {
        match self {
            Self::Bar | Self::Donut => (1, Some(1)),
            Self::Line | Self::GroupedBar => (1, None),
        }
    }
}

/// A data series in a chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Series name, shown in legends
    pub label: String,
    /// One value per category
    pub values: Vec<f64>,
    /// Series color
    pub color: Color,
    /// Per-value colors; donut slices use these when present
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Color>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: impl Into<Color>) -> Self {
        Self {
            label: label.into(),
            values,
            color: color.into(),
            colors: Vec::new(),
        }
    }

    /// Attach per-value colors.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Color of the value at `index`.
    pub fn color_at(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(self.color)
    }

    /// Fail on the first NaN or infinite value.
    pub fn check_finite(&self) -> Result<(), DataError> {
        match self.values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(DataError::NonFinite {
                series: self.label.clone(),
                index,
                value: self.values.get(index).copied().unwrap_or(f64::NAN),
            }),
            None => Ok(()),
        }
    }
}

/// The full input to one chart render.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub series: Vec<Series>,
    /// Category axis labels, one per value index
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub chart_type: ChartType,
}

impl Dataset {
    pub fn new(chart_type: ChartType, categories: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            series,
            categories,
            chart_type,
        }
    }

    /// Decode a dataset from JSON.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Nothing to plot. Rendering an empty dataset is a no-op, not an error.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
            || (self.categories.is_empty() && self.series.iter().all(|s| s.values.is_empty()))
    }

    /// Number of value slots per series.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Every value of every series, in series order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }

    /// Check the invariants the renderers rely on: series count for the chart
    /// type, index alignment with the categories, finite values.
    pub fn validate(&self) -> Result<(), DataError> {
        let (min, max) = self.chart_type.series_bounds();
        let count = self.series.len();
        if count < min || max.is_some_and(|max| count > max) {
            return Err(DataError::SeriesCount {
                chart_type: self.chart_type,
                expected: max.unwrap_or(min),
                actual: count,
            });
        }

        let expected = self.categories.len();
        for series in &self.series {
            if series.values.len() != expected {
                return Err(DataError::LengthMismatch {
                    series: series.label.clone(),
                    expected,
                    actual: series.values.len(),
                });
            }
            series.check_finite()?;
        }
        Ok(())
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
    use crate::types::Rgba;

    fn months(n: usize) -> Vec<String> {
        ["Jan", "Feb", "Mar", "Apr"]
            .iter()
            .take(n)
            .map(|s| (*s).to_string())
            .collect()
    }

    #[test]
    fn test_validate_accepts_aligned_series() {
        let ds = Dataset::new(
            ChartType::GroupedBar,
            months(3),
            vec![
                Series::new("New", vec![1.0, 2.0, 3.0], Rgba::new(1, 2, 3)),
                Series::new("Returning", vec![3.0, 2.0, 1.0], Rgba::new(4, 5, 6)),
            ],
        );
        assert!(ds.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let ds = Dataset::new(
            ChartType::Line,
            months(3),
            vec![Series::new("Orders", vec![1.0, 2.0], Rgba::BLACK)],
        );
        assert_eq!(
            ds.validate(),
            Err(DataError::LengthMismatch {
                series: "Orders".to_string(),
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let ds = Dataset::new(
            ChartType::Line,
            months(2),
            vec![Series::new("Orders", vec![1.0, f64::NAN], Rgba::BLACK)],
        );
        assert!(matches!(
            ds.validate(),
            Err(DataError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_two_donut_series() {
        let s = Series::new("a", vec![1.0], Rgba::BLACK);
        let ds = Dataset::new(ChartType::Donut, months(1), vec![s.clone(), s]);
        assert!(matches!(
            ds.validate(),
            Err(DataError::SeriesCount {
                expected: 1,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(Dataset::default().is_empty());
        let ds = Dataset::new(
            ChartType::Bar,
            Vec::new(),
            vec![Series::new("a", Vec::new(), Rgba::BLACK)],
        );
        assert!(ds.is_empty());
    }

    #[test]
    fn test_dataset_from_json() {
        let ds = Dataset::from_json(
            r##"{
                "chartType": "groupedBar",
                "categories": ["Jan", "Feb"],
                "series": [
                    {"label": "New", "values": [1, 2], "color": "#4472C4"},
                    {"label": "Returning", "values": [3, 4],
                     "color": {"start": "#1F3864", "end": "#8EA9DB"}}
                ]
            }"##,
        )
        .unwrap();
        assert_eq!(ds.chart_type, ChartType::GroupedBar);
        assert_eq!(ds.series.len(), 2);
        assert_eq!(ds.series[1].values, vec![3.0, 4.0]);
    }
}
