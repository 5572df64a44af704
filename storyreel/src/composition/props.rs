use crate::foundation::color::Rgba8;

/// Title layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleLayout {
    /// Centered stack.
    #[default]
    #[serde(alias = "tech")]
    Center,
    /// Left-aligned stack with a shorter rule.
    Left,
}

/// Props of a `title` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleProps {
    /// Headline.
    pub title: String,
    /// Secondary line under the headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Layout variant.
    #[serde(default)]
    pub variant: TitleLayout,
}

/// Props of a `subtitle` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleProps {
    /// Caption text.
    pub text: String,
}

fn default_true() -> bool {
    true
}

/// Props of a `code` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeProps {
    /// Source text, split on `\n`.
    pub code: String,
    /// Informational language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Draw a line-number gutter.
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
    /// 1-based line numbers drawn with a highlight band.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight_lines: Vec<u32>,
    /// Window title; defaults to `script.ts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// One bullet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletItem {
    /// Bullet text.
    pub text: String,
    /// Emoji/text glyph, SVG path data (24x24 viewBox) or an image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Marker color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

/// Props of a `bullets` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsProps {
    /// Heading above the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Bullets in display order.
    pub items: Vec<BulletItem>,
}

/// One step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepItem {
    /// Step heading.
    pub title: String,
    /// Optional detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Props of a `steps` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsProps {
    /// Steps left to right.
    pub steps: Vec<StepItem>,
    /// 0-based highlighted step; all steps are active when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step_index: Option<usize>,
}

/// Diagram node outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    /// Rounded rectangle.
    #[default]
    Rect,
    /// Circle.
    Circle,
    /// Rhombus.
    Diamond,
}

/// Diagram node placed in percent coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    /// Id referenced by edges.
    pub id: String,
    /// Label drawn inside the node.
    pub label: String,
    /// Horizontal position, 0-100.
    pub x: f64,
    /// Vertical position, 0-100.
    pub y: f64,
    /// Outline shape.
    #[serde(default, rename = "type")]
    pub shape: NodeShape,
    /// Outline color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

/// Directed connection between two nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramEdge {
    /// Source node id.
    pub from_id: String,
    /// Target node id.
    pub to_id: String,
    /// Label at the edge midpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Props of a `diagram` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramProps {
    /// Nodes in draw order.
    pub nodes: Vec<DiagramNode>,
    /// Edges in draw order; edges naming unknown nodes are skipped.
    #[serde(default)]
    pub edges: Vec<DiagramEdge>,
    /// Heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Chart style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Vertical bars.
    #[default]
    Bar,
    /// Connected points.
    Line,
}

/// One data point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDatum {
    /// Category label.
    pub label: String,
    /// Value.
    pub value: f64,
    /// Bar color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
}

/// Props of a `chart` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartProps {
    /// Chart style.
    #[serde(default, rename = "type")]
    pub chart_type: ChartType,
    /// Data points left to right.
    pub data: Vec<ChartDatum>,
    /// Heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Axis caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
}

/// Props of a `showcase` scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseProps {
    /// Registry tag selecting the template.
    pub variant: String,
    /// Primary text; meaning depends on the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Secondary text; meaning depends on the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Variant-specific list (strings, objects or both).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<serde_json::Value>,
    /// Accent override; the theme accent is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    /// Paint the default animated backdrop behind the variant.
    #[serde(default)]
    pub background: bool,
}

impl ShowcaseProps {
    /// Bare props for `variant`.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            title: None,
            subtitle: None,
            items: Vec::new(),
            color: None,
            background: false,
        }
    }

    /// `title` or `fallback`.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    /// `subtitle` or `fallback`.
    pub fn subtitle_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.subtitle.as_deref().unwrap_or(fallback)
    }

    /// String items, or `fallback` when no item is a string.
    pub fn string_items_or(&self, fallback: &[&str]) -> Vec<String> {
        let items: Vec<String> = self
            .items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect();
        if items.is_empty() {
            fallback.iter().map(|s| (*s).to_owned()).collect()
        } else {
            items
        }
    }

    /// String at `items[index]`, if present and a string.
    pub fn item_str(&self, index: usize) -> Option<&str> {
        self.items.get(index).and_then(|v| v.as_str())
    }
}
