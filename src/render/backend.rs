//! Drawing surface trait for pluggable rendering backends.
//!
//! Chart math never touches a graphics API directly; it issues the primitives
//! below against a [`Surface`], which may be a browser canvas, an SVG builder
//! or an in-memory command recorder.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Paint, Point, Rect, Rgba};

/// Horizontal text anchor
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas 2D `textAlign` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Alphabetic,
}

impl TextBaseline {
    /// Canvas 2D `textBaseline` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
        }
    }
}

/// Font, color and anchoring for a text draw.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub bold: bool,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    /// CSS font shorthand, e.g. `bold 12px Arial`.
    pub fn css_font(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.font_size, self.font_family)
        } else {
            format!("{}px {}", self.font_size, self.font_family)
        }
    }

    #[must_use]
    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

/// Average glyph advance as a fraction of the font size, used when a backend
/// cannot measure text.
pub const ESTIMATED_CHAR_WIDTH: f64 = 0.6;

/// Trait for drawing surfaces
///
/// Every primitive carries its own paint; implementations must not let fill,
/// stroke or font state from one call leak into the next.
pub trait Surface {
    /// Current size in logical pixels.
    fn size(&self) -> (f64, f64);

    /// Resize the surface. Previous content is discarded.
    fn resize(&mut self, width: f64, height: f64);

    /// Discard all content and fill the whole surface with `color`.
    fn clear(&mut self, color: Rgba) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()>;

    /// Fill a closed polygon.
    fn fill_path(&mut self, points: &[Point], paint: &Paint) -> Result<()>;

    /// Stroke an open polyline.
    fn stroke_path(&mut self, points: &[Point], color: Rgba, width: f64) -> Result<()>;

    /// Fill a circular sector from `start` to `end` (radians, clockwise from
    /// +x). A sweep of a full turn fills the whole circle.
    fn fill_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        paint: &Paint,
    ) -> Result<()>;

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<()>;

    /// Draw `text` anchored at `at`.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<()>;

    /// Width of `text` in logical pixels.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * style.font_size * ESTIMATED_CHAR_WIDTH
    }
}
