use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};

/// RGBA color with u8 channels and a 0.0-1.0 alpha.
///
/// Serializes as a CSS color string so datasets can carry `"#4472C4"` or
/// `"rgba(68, 114, 196, 0.5)"` directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create an opaque color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Same color with a different alpha (clamped to 0.0-1.0).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA`, `RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
            let (r, g, b, mut rest) = split_channels(inner)?;
            let a: f64 = rest.next()?.trim().parse().ok()?;
            if rest.next().is_some() {
                return None;
            }
            return Some(Self::new(r, g, b).with_alpha(a));
        }
        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let (r, g, b, mut rest) = split_channels(inner)?;
            if rest.next().is_some() {
                return None;
            }
            return Some(Self::new(r, g, b));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| -> Option<u8> {
            u8::from_str_radix(hex.get(range)?, 16).ok()
        };
        match hex.len() {
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let a = channel(6..8)?;
                Some(
                    Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)
                        .with_alpha(f64::from(a) / 255.0),
                )
            }
            _ => None,
        }
    }

    /// CSS form: `#RRGGBB` when opaque, `rgba(...)` otherwise.
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a)
        }
    }

    /// Lighten by blending with white. 0.0 = no change, 1.0 = white.
    pub fn lighten(self, factor: f64) -> Self {
        self.blend(255, factor)
    }

    /// Darken by blending with black. 0.0 = no change, 1.0 = black.
    pub fn darken(self, factor: f64) -> Self {
        self.blend(0, factor)
    }

    fn blend(self, to: u8, factor: f64) -> Self {
        Self {
            r: blend_component(self.r, to, factor),
            g: blend_component(self.g, to, factor),
            b: blend_component(self.b, to, factor),
            a: self.a,
        }
    }
}

fn split_channels(inner: &str) -> Option<(u8, u8, u8, std::str::Split<'_, char>)> {
    let mut parts = inner.split(',');
    let r = parts.next()?.trim().parse().ok()?;
    let g = parts.next()?.trim().parse().ok()?;
    let b = parts.next()?.trim().parse().ok()?;
    Some((r, g, b, parts))
}

/// The cast is safe because we clamp to [0, 255] before converting.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_component(from: u8, to: u8, factor: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    let blended = from + (to - from) * factor.clamp(0.0, 1.0);
    blended.clamp(0.0, 255.0).round() as u8
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid color `{s}`"))
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_css()
    }
}

/// Which way a two-stop gradient runs, from `start` to `end`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum GradientDirection {
    #[default]
    ToBottom,
    ToTop,
    ToRight,
    ToLeft,
}

/// Two-stop gradient descriptor attached to a series.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub start: Rgba,
    pub end: Rgba,
    #[serde(default)]
    pub direction: GradientDirection,
}

/// A series color: solid, or a gradient resolved against each shape's bounds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Color {
    Solid(Rgba),
    Gradient(Gradient),
}

impl Color {
    /// Darkening applied to a solid color to make the top stop of a bar.
    const BAR_TOP_DARKEN: f64 = 0.25;

    /// The color used for strokes, markers and text-adjacent marks.
    pub fn primary(&self) -> Rgba {
        match self {
            Self::Solid(c) => *c,
            Self::Gradient(g) => g.start,
        }
    }

    /// Paint covering `rect`.
    pub fn paint(&self, rect: Rect) -> Paint {
        match self {
            Self::Solid(c) => Paint::Solid(*c),
            Self::Gradient(g) => {
                Paint::Linear(LinearGradient::across(rect, g.direction, g.start, g.end))
            }
        }
    }

    /// Same color with every stop's alpha multiplied by `factor`.
    #[must_use]
    pub fn faded(&self, factor: f64) -> Self {
        match self {
            Self::Solid(c) => Self::Solid(c.with_alpha(c.a * factor)),
            Self::Gradient(g) => Self::Gradient(Gradient {
                start: g.start.with_alpha(g.start.a * factor),
                end: g.end.with_alpha(g.end.a * factor),
                direction: g.direction,
            }),
        }
    }

    /// Paint for a bar: always a gradient, darker toward the top.
    pub fn bar_paint(&self, rect: Rect) -> Paint {
        match self {
            Self::Solid(c) => Paint::Linear(LinearGradient::across(
                rect,
                GradientDirection::ToBottom,
                c.darken(Self::BAR_TOP_DARKEN),
                *c,
            )),
            Self::Gradient(_) => self.paint(rect),
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::Solid(c)
    }
}

/// A resolved linear gradient in surface coordinates.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub start: Rgba,
    pub end: Rgba,
}

impl LinearGradient {
    /// Gradient spanning `rect` edge to edge in `direction`.
    pub fn across(rect: Rect, direction: GradientDirection, start: Rgba, end: Rgba) -> Self {
        let (from, to) = match direction {
            GradientDirection::ToBottom => (
                Point::new(rect.x, rect.y),
                Point::new(rect.x, rect.bottom()),
            ),
            GradientDirection::ToTop => (
                Point::new(rect.x, rect.bottom()),
                Point::new(rect.x, rect.y),
            ),
            GradientDirection::ToRight => (
                Point::new(rect.x, rect.y),
                Point::new(rect.right(), rect.y),
            ),
            GradientDirection::ToLeft => (
                Point::new(rect.right(), rect.y),
                Point::new(rect.x, rect.y),
            ),
        };
        Self {
            from,
            to,
            start,
            end,
        }
    }
}

/// Fill style handed to a surface with every primitive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Self::Solid(c)
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
    fn test_parse_hex_6() {
        let c = Rgba::parse("#FF8040").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 128, 64));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_hex_8_alpha_last() {
        let c = Rgba::parse("#FF000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgba() {
        let c = Rgba::parse("rgba(255, 128, 64, 0.5)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 128, 64));
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgba::parse("#12345").is_none());
        assert!(Rgba::parse("rgb(1, 2)").is_none());
        assert!(Rgba::parse("rgb(1, 2, 3, 4)").is_none());
        assert!(Rgba::parse("teal").is_none());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::new(68, 114, 196).to_css(), "#4472C4");
        assert_eq!(
            Rgba::new(68, 114, 196).with_alpha(0.25).to_css(),
            "rgba(68, 114, 196, 0.25)"
        );
    }

    #[test]
    fn test_darken_and_lighten() {
        let c = Rgba::new(100, 100, 100);
        assert_eq!(c.darken(1.0), Rgba::new(0, 0, 0));
        assert_eq!(c.lighten(1.0), Rgba::WHITE);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn test_color_deserializes_solid_and_gradient() {
        let solid: Color = serde_json::from_str("\"#4472C4\"").unwrap();
        assert_eq!(solid, Color::Solid(Rgba::new(68, 114, 196)));

        let gradient: Color =
            serde_json::from_str(r##"{"start":"#000000","end":"#FFFFFF","direction":"toRight"}"##)
                .unwrap();
        match gradient {
            Color::Gradient(g) => assert_eq!(g.direction, GradientDirection::ToRight),
            Color::Solid(_) => panic!("expected gradient"),
        }
    }

    #[test]
    fn test_solid_bar_paint_is_darker_on_top() {
        let rect = Rect::new(0.0, 10.0, 20.0, 100.0);
        let Paint::Linear(g) = Color::Solid(Rgba::new(200, 100, 50)).bar_paint(rect) else {
            panic!("bar paint should be a gradient");
        };
        assert_eq!(g.from, Point::new(0.0, 10.0));
        assert_eq!(g.to, Point::new(0.0, 110.0));
        assert!(g.start.r < g.end.r);
    }
}
