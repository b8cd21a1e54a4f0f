//! Structured error types for ringchart.
//!
//! Malformed input is a [`DataError`] and always reaches the caller. A surface too
//! small to hold a plot is a [`LayoutError`]; a render pass logs it and draws only
//! the background, since a zero-size container mid-reflow is an ordinary state.

use crate::types::ChartType;

/// Input data the engine refuses to draw.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A value is NaN or infinite.
    #[error("series `{series}` has a non-finite value {value} at index {index}")]
    NonFinite {
        series: String,
        index: usize,
        value: f64,
    },

    /// A series does not line up with the category labels.
    #[error("series `{series}` has {actual} values but there are {expected} categories")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// The chart type needs a different number of series.
    #[error("{chart_type:?} chart expects {expected} series, got {actual}")]
    SeriesCount {
        chart_type: ChartType,
        expected: usize,
        actual: usize,
    },

    /// Donut proportions add up to nothing.
    #[error("donut values sum to {total}; a ring needs a positive total")]
    ZeroSumDonut { total: f64 },

    /// A donut slice cannot have a negative share.
    #[error("donut slice {index} is negative ({value})")]
    NegativeSlice { index: usize, value: f64 },
}

/// The surface cannot fit a plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("surface {width}x{height} is too small for padding {padding}")]
    TooSmall { width: f64, height: f64, padding: f64 },
}

/// All errors that can occur while rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Malformed dataset.
    #[error("Invalid data: {0}")]
    Data(#[from] DataError),

    /// Dataset or options JSON could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend failure (e.g. the browser refused a canvas call).
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(target_arch = "wasm32")]
impl From<ChartError> for wasm_bindgen::JsValue {
    fn from(e: ChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
