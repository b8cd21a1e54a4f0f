//! Canvas 2D surface.
//!
//! Implements [`Surface`] over an `HtmlCanvasElement` via web-sys. Drawing uses
//! logical pixels; the context transform is reset to the device pixel ratio at
//! the start of every pass so no transform accumulates across redraws.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{ChartError, Result};
use crate::render::backend::{Surface, TextStyle};
use crate::types::{LinearGradient, Paint, Point, Rect, Rgba};

/// Sweeps within this of a full turn are drawn as a whole circle.
const FULL_TURN_EPSILON: f64 = 1e-9;

fn js_err(e: JsValue) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

/// Logical size of a canvas and the device pixel ratio of its backing store.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelSize {
    width: f64,
    height: f64,
    dpr: f64,
}

impl PixelSize {
    fn from_physical(width: u32, height: u32, dpr: f64) -> Self {
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };
        Self {
            width: f64::from(width) / dpr,
            height: f64::from(height) / dpr,
            dpr,
        }
    }

    /// Physical pixel count for a logical length. The cast is safe because the
    /// value is clamped to `u32` range first.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn physical(&self, logical: f64) -> u32 {
        (logical * self.dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
    }

    /// Same logical size at a new ratio. Non-positive ratios are ignored.
    fn with_dpr(self, dpr: f64) -> Self {
        if dpr > 0.0 {
            Self { dpr, ..self }
        } else {
            self
        }
    }

    /// Backing store size that matches the current transform.
    fn backing(&self) -> (u32, u32) {
        (self.physical(self.width), self.physical(self.height))
    }
}

/// Canvas 2D drawing surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: PixelSize,
}

impl CanvasSurface {
    /// Wrap a canvas. Its current backing size is taken as physical pixels.
    pub fn new(canvas: HtmlCanvasElement, dpr: f64) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| ChartError::Render("No 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                ChartError::Render("Failed to cast to CanvasRenderingContext2d".to_string())
            })?;

        let size = PixelSize::from_physical(canvas.width(), canvas.height(), dpr);
        Ok(Self { canvas, ctx, size })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Change the device pixel ratio. The backing store is resized right away
    /// so the next pass draws at the new ratio on a matching buffer.
    pub fn set_dpr(&mut self, dpr: f64) {
        let size = self.size.with_dpr(dpr);
        if size != self.size {
            self.size = size;
            self.apply_backing_size();
        }
    }

    fn apply_backing_size(&self) {
        // Setting either dimension also wipes the context state
        let (width, height) = self.size.backing();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn gradient(&self, g: &LinearGradient) -> Result<web_sys::CanvasGradient> {
        let gradient = self
            .ctx
            .create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
        gradient
            .add_color_stop(0.0, &g.start.to_css())
            .map_err(js_err)?;
        gradient
            .add_color_stop(1.0, &g.end.to_css())
            .map_err(js_err)?;
        Ok(gradient)
    }

    fn set_fill(&self, paint: &Paint) -> Result<()> {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Linear(g) => {
                let gradient = self.gradient(g)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn trace_polyline(&self, points: &[Point]) {
        self.ctx.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.x, first.y);
        }
        for p in iter {
            self.ctx.line_to(p.x, p.y);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.size.width, self.size.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size.width = width.max(0.0);
        self.size.height = height.max(0.0);
        self.apply_backing_size();
    }

    fn clear(&mut self, color: Rgba) -> Result<()> {
        let PixelSize { width, height, dpr } = self.size;
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(js_err)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        self.set_fill(paint)?;
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_path(&mut self, points: &[Point], paint: &Paint) -> Result<()> {
        if points.is_empty() {
            return Ok(());
        }
        self.set_fill(paint)?;
        self.trace_polyline(points);
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgba, width: f64) -> Result<()> {
        if points.is_empty() {
            return Ok(());
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.set_line_join("round");
        self.trace_polyline(points);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        paint: &Paint,
    ) -> Result<()> {
        self.set_fill(paint)?;
        self.ctx.begin_path();
        if end - start >= TAU - FULL_TURN_EPSILON {
            self.ctx
                .arc(center.x, center.y, radius, 0.0, TAU)
                .map_err(js_err)?;
        } else {
            self.ctx.move_to(center.x, center.y);
            self.ctx
                .arc(center.x, center.y, radius, start, end)
                .map_err(js_err)?;
            self.ctx.close_path();
        }
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<()> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<()> {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.fill_text(text, at.x, at.y).map_err(js_err)
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        self.ctx.set_font(&style.css_font());
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or_else(|_| {
                text.chars().count() as f64
                    * style.font_size
                    * crate::render::backend::ESTIMATED_CHAR_WIDTH
            })
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

    #[test]
    fn test_logical_size_from_backing_store() {
        let size = PixelSize::from_physical(800, 600, 2.0);
        assert_eq!((size.width, size.height), (400.0, 300.0));
        assert_eq!(size.backing(), (800, 600));
    }

    #[test]
    fn test_invalid_dpr_falls_back_to_one() {
        let size = PixelSize::from_physical(640, 480, 0.0);
        assert_eq!(size.dpr, 1.0);
        assert_eq!(size.backing(), (640, 480));
    }

    #[test]
    fn test_backing_follows_dpr_change() {
        let size = PixelSize::from_physical(400, 300, 1.0).with_dpr(2.0);
        // Logical size is kept, the buffer doubles to match a x2 transform
        assert_eq!((size.width, size.height), (400.0, 300.0));
        assert_eq!(size.backing(), (800, 600));

        assert_eq!(size.with_dpr(1.5).backing(), (600, 450));
        assert_eq!(size.with_dpr(-1.0), size);
    }
}
