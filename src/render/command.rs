//! In-memory surface that records draw calls instead of rasterizing them.
//!
//! The recorded [`DrawCommand`] list is what tests assert against and what the
//! CLI prints as JSON.

use serde::{Deserialize, Serialize};

use super::backend::{Surface, TextStyle};
use crate::error::Result;
use crate::types::{Paint, Point, Rect, Rgba};

/// One resolved draw call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", tag = "op")]
pub enum DrawCommand {
    /// Whole-surface fill that starts a pass
    Clear { color: Rgba },
    Rect { rect: Rect, paint: Paint },
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        paint: Paint,
    },
    /// Filled polygon, or stroked polyline when `stroke` is set
    Path {
        points: Vec<Point>,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
}

/// Stroke color and width.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// Surface that keeps a list of [`DrawCommand`]s.
///
/// [`Surface::clear`] drops everything recorded so far, the same way clearing a
/// canvas wipes its pixels, so after a full redraw the list holds exactly one
/// pass.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Commands recorded since the last clear (including that clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded arcs, in draw order.
    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
    }

    /// Recorded rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
    }

    /// Recorded text strings, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Serialize the recorded commands as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }
}

impl Surface for CommandRecorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self, color: Rgba) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> Result<()> {
        self.commands.push(DrawCommand::Rect {
            rect,
            paint: *paint,
        });
        Ok(())
    }

    fn fill_path(&mut self, points: &[Point], paint: &Paint) -> Result<()> {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            fill: Some(*paint),
            stroke: None,
        });
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgba, width: f64) -> Result<()> {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            fill: None,
            stroke: Some(Stroke { color, width }),
        });
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
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            paint: *paint,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) -> Result<()> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: Stroke { color, width },
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
        Ok(())
    }
}
