//! Canvas 2D rendering backend.
//!
//! This module draws charts through the HTML Canvas 2D API via web-sys. It is
//! the surface used by the browser-facing `ChartView`.

mod surface;

pub use surface::CanvasSurface;
