//! Chart lifecycle and the browser-facing view.
//!
//! [`ChartController`] owns a surface and drives every redraw; `ChartView`
//! (wasm32 only) wraps a controller bound to a canvas element for JavaScript.

#[cfg(target_arch = "wasm32")]
mod chart_view;
mod controller;

#[cfg(target_arch = "wasm32")]
pub use chart_view::ChartView;
pub use controller::{ChartController, ControllerState};
