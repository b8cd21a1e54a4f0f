//! ringchart - dashboard charts drawn from raw geometry
//!
//! Line/area, single and grouped bar, and donut charts rendered onto any
//! [`Surface`](render::Surface):
//! - Canvas 2D in the browser via WebAssembly
//! - SVG documents for headless export
//! - A recorded list of draw commands for tests and tooling
//!
//! # Usage (Rust)
//!
//! ```
//! use ringchart::render::{render_chart, CommandRecorder};
//! use ringchart::types::{ChartOptions, ChartType, Dataset, Rgba, Series};
//!
//! let dataset = Dataset::new(
//!     ChartType::Donut,
//!     vec!["Active".into(), "Idle".into()],
//!     vec![Series::new("Users", vec![65.0, 35.0], Rgba::new(33, 150, 243))],
//! );
//! let mut surface = CommandRecorder::new(320.0, 240.0);
//! render_chart(&dataset, &mut surface, &ChartOptions::default()).unwrap();
//! assert!(surface.texts().any(|t| t == "65%"));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ChartView } from 'ringchart';
//! await init();
//! const view = new ChartView(canvas, window.devicePixelRatio);
//! view.setDataset(dataset);
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod render;
pub mod scale;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{ChartError, DataError, LayoutError};
pub use render::render_chart;
#[cfg(target_arch = "wasm32")]
pub use viewer::ChartView;
pub use viewer::{ChartController, ControllerState};

/// Render a dataset JSON string to an SVG document
///
/// # Errors
/// Returns an error if the JSON is malformed or the data cannot be charted.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(dataset_json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    let dataset =
        types::Dataset::from_json(dataset_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut surface = render::SvgSurface::new(width, height);
    render_chart(&dataset, &mut surface, &types::ChartOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(surface.finish())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
