//! `ChartView` - the WASM-exported chart bound to a canvas element.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::ChartController;
use crate::render::CanvasSurface;
use crate::types::{ChartOptions, Dataset};

/// A chart drawn on an `HtmlCanvasElement`.
///
/// ```javascript
/// const view = new ChartView(canvas, window.devicePixelRatio);
/// view.setDataset({ chartType: "donut", categories: ["A", "B"],
///                   series: [{ label: "Share", values: [65, 35], color: "#2196F3" }] });
/// view.resize(rect.width, rect.height);
/// ```
#[wasm_bindgen]
pub struct ChartView {
    controller: ChartController<CanvasSurface>,
}

#[wasm_bindgen]
impl ChartView {
    /// Bind to `canvas` with default options. Nothing is drawn until a dataset
    /// is set.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f64) -> Result<ChartView, JsValue> {
        console_error_panic_hook::set_once();

        let surface = CanvasSurface::new(canvas, dpr)?;
        let options = ChartOptions {
            dpr,
            ..ChartOptions::default()
        };
        let mut controller = ChartController::new(options);
        controller.mount(surface)?;
        Ok(ChartView { controller })
    }

    /// Replace the dataset (a plain JS object) and redraw.
    #[wasm_bindgen(js_name = "setDataset")]
    pub fn set_dataset(&mut self, dataset: JsValue) -> Result<(), JsValue> {
        let dataset: Dataset = serde_wasm_bindgen::from_value(dataset)?;
        Ok(self.controller.set_dataset(dataset)?)
    }

    /// Replace the options (a plain JS object, missing keys take defaults) and
    /// redraw.
    #[wasm_bindgen(js_name = "setOptions")]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options: ChartOptions = serde_wasm_bindgen::from_value(options)?;
        if let Some(surface) = self.controller.surface_mut() {
            surface.set_dpr(options.dpr);
        }
        Ok(self.controller.set_options(options)?)
    }

    /// Resize to the container's logical size (CSS pixels) and redraw.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
        let Some(canvas) = self.controller.surface().map(|s| s.canvas().clone()) else {
            return Ok(());
        };
        let style = canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;

        if let Some(surface) = self.controller.surface_mut() {
            surface.set_dpr(dpr);
        }
        Ok(self.controller.resize(width, height)?)
    }

    /// Redraw with the current dataset and options.
    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<(), JsValue> {
        Ok(self.controller.render()?)
    }

    /// Release the canvas. Later calls are no-ops.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        drop(self.controller.unmount());
    }
}
