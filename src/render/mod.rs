//! Rendering engine with pluggable surfaces.
//!
//! This module provides:
//! - The [`Surface`] drawing trait and text styling types
//! - Chart renderers that draw a [`Dataset`](crate::types::Dataset) onto any surface
//! - Canvas 2D surface (browser), SVG surface and a command recorder (native, tests)

pub mod backend;
pub mod canvas;
pub mod charts;
pub mod command;
pub mod svg;

// Re-export commonly used types
pub use backend::{Surface, TextAlign, TextBaseline, TextStyle};
pub use canvas::CanvasSurface;
pub use charts::{render_chart, CategoryAxis, Slice};
pub use command::{CommandRecorder, DrawCommand, Stroke};
pub use svg::SvgSurface;
