//! Layout engine: plot rectangle, category slots, ring geometry and legend
//! placement, all derived from the surface size for a single render pass.

mod chart_layout;
mod legend;

pub use chart_layout::{
    compute_layout, BarGeometry, DonutGeometry, Layout, DONUT_HOLE_RATIO,
};
pub use legend::{
    place_legend, slice_label_position, LegendItem, LegendMetrics, SLICE_LABEL_RADIUS_RATIO,
};
