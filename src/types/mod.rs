//! Chart input model and the geometry/paint types shared by the renderers.

mod color;
mod dataset;
mod geometry;
mod options;

pub use color::{Color, Gradient, GradientDirection, LinearGradient, Paint, Rgba};
pub use dataset::{ChartType, Dataset, Series};
pub use geometry::{Point, Rect};
pub use options::ChartOptions;
