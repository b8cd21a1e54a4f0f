//! SVG backend for headless export.
//!
//! Builds a standalone SVG document in memory. Gradients become `<defs>`
//! entries referenced by id.

use std::f64::consts::TAU;
use std::fmt::Write as _;

use super::backend::{Surface, TextAlign, TextBaseline, TextStyle};
use crate::error::Result;
use crate::types::{Paint, Point, Rect, Rgba};

/// Sweeps within this of a full turn are drawn as a whole circle.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Surface that writes SVG elements.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    gradient_count: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// The finished document.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// `fill` attribute value for a paint, registering a gradient if needed.
    fn fill_attr(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(c) => color_attrs("fill", *c),
            Paint::Linear(g) => {
                self.gradient_count += 1;
                let id = format!("g{}", self.gradient_count);
                let _ = writeln!(
                    self.defs,
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0" {}/><stop offset="1" {}/></linearGradient>"#,
                    fmt_num(g.from.x),
                    fmt_num(g.from.y),
                    fmt_num(g.to.x),
                    fmt_num(g.to.y),
                    color_attrs("stop-color", g.start),
                    color_attrs("stop-color", g.end),
                );
                format!(r#"fill="url(#{id})""#)
            }
        }
    }
}

fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// `name="#RRGGBB"` plus an opacity attribute when translucent.
fn color_attrs(name: &str, c: Rgba) -> String {
    let hex = Rgba { a: 1.0, ..c }.to_css();
    let opacity_name = if name == "stop-color" {
        "stop-opacity"
    } else {
        "fill-opacity"
    };
    if c.a >= 1.0 {
        format!(r#"{name}="{hex}""#)
    } else {
        format!(r#"{name}="{hex}" {opacity_name}="{:.2}""#, c.a)
    }
}

fn stroke_attrs(c: Rgba, width: f64) -> String {
    let hex = Rgba { a: 1.0, ..c }.to_css();
    if c.a >= 1.0 {
        format!(r#"stroke="{hex}" stroke-width="{}""#, fmt_num(width))
    } else {
        format!(
            r#"stroke="{hex}" stroke-opacity="{:.2}" stroke-width="{}""#,
            c.a,
            fmt_num(width)
        )
    }
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y));
    }
    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        *self = Self::new(width, height);
    }

    fn clear(&mut self, color: Rgba) -> Result<()> {
        self.defs.clear();
        self.body.clear();
        self.gradient_count = 0;
        let fill = color_attrs("fill", color);
        let _ = writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" {fill}/>"#,
            fmt_num(self.width),
            fmt_num(self.height),
        );
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        let fill = self.fill_attr(paint);
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {fill}/>"#,
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width.max(0.0)),
            fmt_num(rect.height.max(0.0)),
        );
        Ok(())
    }

    fn fill_path(&mut self, points: &[Point], paint: &Paint) -> Result<()> {
        if points.is_empty() {
            return Ok(());
        }
        let fill = self.fill_attr(paint);
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" {fill}/>"#,
            points_attr(points)
        );
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgba, width: f64) -> Result<()> {
        if points.is_empty() {
            return Ok(());
        }
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" {} stroke-linejoin="round"/>"#,
            points_attr(points),
            stroke_attrs(color, width),
        );
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
        let fill = self.fill_attr(paint);
        let sweep = end - start;
        if sweep >= TAU - FULL_TURN_EPSILON {
            let _ = writeln!(
                self.body,
                r#"<circle cx="{}" cy="{}" r="{}" {fill}/>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(radius),
            );
            return Ok(());
        }
        if sweep <= 0.0 {
            return Ok(());
        }
        let from = center.polar(radius, start);
        let to = center.polar(radius, end);
        let large_arc = u8::from(sweep > std::f64::consts::PI);
        let _ = writeln!(
            self.body,
            r#"<path d="M{cx},{cy} L{x1},{y1} A{r},{r} 0 {large_arc} 1 {x2},{y2} Z" {fill}/>"#,
            cx = fmt_num(center.x),
            cy = fmt_num(center.y),
            x1 = fmt_num(from.x),
            y1 = fmt_num(from.y),
            r = fmt_num(radius),
            x2 = fmt_num(to.x),
            y2 = fmt_num(to.y),
        );
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<()> {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(color, width),
        );
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<()> {
        let anchor = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let baseline = match style.baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "central",
            TextBaseline::Alphabetic => "alphabetic",
        };
        let weight = if style.bold { r#" font-weight="bold""# } else { "" };
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}"{weight} text-anchor="{anchor}" dominant-baseline="{baseline}" {}>{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            escape_text(&style.font_family),
            fmt_num(style.font_size),
            color_attrs("fill", style.color),
            escape_text(text),
        );
        Ok(())
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
    use crate::types::{GradientDirection, LinearGradient};

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn test_clear_resets_document() {
        let mut svg = SvgSurface::new(100.0, 50.0);
        svg.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), &Paint::Solid(Rgba::BLACK))
            .unwrap();
        svg.clear(Rgba::WHITE).unwrap();
        let doc = svg.finish();
        assert_eq!(doc.matches("<rect").count(), 1);
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_gradient_goes_to_defs() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        let rect = Rect::new(10.0, 10.0, 20.0, 80.0);
        let paint = Paint::Linear(LinearGradient::across(
            rect,
            GradientDirection::ToBottom,
            Rgba::BLACK,
            Rgba::WHITE,
        ));
        svg.fill_rect(rect, &paint).unwrap();
        let doc = svg.finish();
        assert!(doc.contains(r#"<linearGradient id="g1""#));
        assert!(doc.contains(r#"fill="url(#g1)""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        let style = TextStyle {
            font_family: "Arial".to_string(),
            font_size: 12.0,
            bold: false,
            color: Rgba::BLACK,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        };
        svg.draw_text("R&D <2024>", Point::new(5.0, 5.0), &style)
            .unwrap();
        let doc = svg.finish();
        assert!(doc.contains("R&amp;D &lt;2024&gt;"));
        assert!(doc.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn test_full_turn_is_a_circle() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.fill_arc(
            Point::new(50.0, 50.0),
            20.0,
            0.0,
            TAU,
            &Paint::Solid(Rgba::WHITE),
        )
        .unwrap();
        assert!(svg.finish().contains("<circle"));
    }
}
