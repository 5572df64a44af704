use crate::foundation::{
    color::Rgba8,
    core::{Affine, Point, Rect, Vec2},
};

/// Stroke paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Line width in pixels.
    pub width: f64,
    /// Optional `[dash, gap]` pattern.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Dashed stroke.
    pub fn dashed(color: Rgba8, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some([dash, gap]),
        }
    }
}

/// Horizontal text alignment relative to the text origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Origin at the start of the line.
    #[default]
    Start,
    /// Origin at the middle of the line.
    Middle,
    /// Origin at the end of the line.
    End,
}

/// Which theme font family a text node uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Body/display family.
    #[default]
    Body,
    /// Monospace family for code.
    Code,
}

/// Container applying transform, opacity and clip to its children.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Group {
    /// Transform from child space to parent space.
    pub transform: Affine,
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Clip rectangle in the parent coordinate space (applied before `transform`).
    pub clip: Option<Rect>,
    /// Children in paint order.
    pub children: Vec<VisualNode>,
}

impl Group {
    /// Identity group.
    pub fn new(children: Vec<VisualNode>) -> Self {
        Self {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            clip: None,
            children,
        }
    }

    /// Post-multiply an extra transform (applied after the existing one).
    pub fn transformed(mut self, t: Affine) -> Self {
        self.transform = t * self.transform;
        self
    }

    /// Translate by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        self.transformed(Affine::translate(Vec2::new(dx, dy)))
    }

    /// Multiply opacity.
    pub fn faded(mut self, opacity: f64) -> Self {
        self.opacity *= opacity;
        self
    }

    /// Set the clip rectangle.
    pub fn clipped(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// `true` when the group changes nothing about its children.
    pub fn is_identity(&self) -> bool {
        self.transform == Affine::IDENTITY && self.opacity == 1.0 && self.clip.is_none()
    }
}

/// Rectangle, optionally rounded.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectNode {
    /// Geometry.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Option<Rgba8>,
    /// Stroke paint.
    pub stroke: Option<Stroke>,
}

/// Ellipse (circles have equal radii).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EllipseNode {
    /// Center point.
    pub center: Point,
    /// Horizontal and vertical radii.
    pub radii: Vec2,
    /// Fill paint.
    pub fill: Option<Rgba8>,
    /// Stroke paint.
    pub stroke: Option<Stroke>,
}

/// Straight line segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineNode {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke paint.
    pub stroke: Stroke,
}

/// Open polyline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PolylineNode {
    /// Vertices in order.
    pub points: Vec<Point>,
    /// Stroke paint.
    pub stroke: Stroke,
}

/// Arbitrary SVG path data.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathNode {
    /// SVG path `d` attribute.
    pub d: String,
    /// Fill paint.
    pub fill: Option<Rgba8>,
    /// Stroke paint.
    pub stroke: Option<Stroke>,
}

/// Single line of text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    /// Content.
    pub text: String,
    /// Baseline origin.
    pub origin: Point,
    /// Font size in pixels.
    pub size: f64,
    /// CSS-style weight (100..=900).
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Theme family.
    pub font: FontRole,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing: f64,
    /// Keep leading/trailing/double whitespace.
    pub preserve_space: bool,
}

impl TextNode {
    /// Regular-weight start-anchored body text.
    pub fn new(text: impl Into<String>, origin: Point, size: f64, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            origin,
            size,
            weight: 400,
            color,
            anchor: TextAnchor::Start,
            font: FontRole::Body,
            letter_spacing: 0.0,
            preserve_space: false,
        }
    }

    /// Set the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Set the anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Center on the origin.
    pub fn centered(self) -> Self {
        self.anchor(TextAnchor::Middle)
    }

    /// Monospace code text with preserved whitespace.
    pub fn code(mut self) -> Self {
        self.font = FontRole::Code;
        self.preserve_space = true;
        self
    }

    /// Set letter spacing.
    pub fn spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Closed set of drawable nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum VisualNode {
    /// Container.
    Group(Group),
    /// Rectangle.
    Rect(RectNode),
    /// Ellipse.
    Ellipse(EllipseNode),
    /// Line.
    Line(LineNode),
    /// Polyline.
    Polyline(PolylineNode),
    /// SVG path.
    Path(PathNode),
    /// Text.
    Text(TextNode),
}

impl VisualNode {
    /// Empty group; renders nothing.
    pub fn empty() -> Self {
        Self::Group(Group::new(Vec::new()))
    }

    /// Identity group around `children`.
    pub fn group(children: Vec<VisualNode>) -> Self {
        Self::Group(Group::new(children))
    }

    /// Filled rectangle.
    pub fn rect(rect: Rect, fill: Rgba8) -> Self {
        Self::Rect(RectNode {
            rect,
            radius: 0.0,
            fill: Some(fill),
            stroke: None,
        })
    }

    /// Filled rounded rectangle.
    pub fn rounded_rect(rect: Rect, radius: f64, fill: Rgba8) -> Self {
        Self::Rect(RectNode {
            rect,
            radius,
            fill: Some(fill),
            stroke: None,
        })
    }

    /// Rectangle outline with optional fill.
    pub fn outlined_rect(rect: Rect, radius: f64, fill: Option<Rgba8>, stroke: Stroke) -> Self {
        Self::Rect(RectNode {
            rect,
            radius,
            fill,
            stroke: Some(stroke),
        })
    }

    /// Filled circle.
    pub fn circle(center: Point, radius: f64, fill: Rgba8) -> Self {
        Self::Ellipse(EllipseNode {
            center,
            radii: Vec2::new(radius, radius),
            fill: Some(fill),
            stroke: None,
        })
    }

    /// Circle outline with optional fill.
    pub fn outlined_circle(center: Point, radius: f64, fill: Option<Rgba8>, stroke: Stroke) -> Self {
        Self::Ellipse(EllipseNode {
            center,
            radii: Vec2::new(radius, radius),
            fill,
            stroke: Some(stroke),
        })
    }

    /// Line segment.
    pub fn line(from: Point, to: Point, stroke: Stroke) -> Self {
        Self::Line(LineNode { from, to, stroke })
    }

    /// SVG path.
    pub fn path(d: impl Into<String>, fill: Option<Rgba8>, stroke: Option<Stroke>) -> Self {
        Self::Path(PathNode {
            d: d.into(),
            fill,
            stroke,
        })
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Group(g) => 1 + g.children.iter().map(Self::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// All text content in paint order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Group(g) => g.children.iter().for_each(|c| c.collect_texts(out)),
            Self::Text(t) => out.push(&t.text),
            _ => {}
        }
    }

    /// `true` when any text node in the subtree contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }
}

impl From<Group> for VisualNode {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

impl From<TextNode> for VisualNode {
    fn from(t: TextNode) -> Self {
        Self::Text(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/node.rs"]
mod tests;
