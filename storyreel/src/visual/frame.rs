use crate::{
    foundation::{color::Rgba8, core::Canvas},
    visual::node::VisualNode,
};

/// Scene that was mounted when a frame was evaluated.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveScene {
    /// Position in the authored scene list.
    pub index: usize,
    /// Scene id.
    pub id: String,
    /// Frame relative to the scene start.
    pub local_frame: u64,
}

/// Everything visible at one global frame, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameTree {
    /// Global frame the tree was evaluated at.
    pub frame: i64,
    /// Output size.
    pub canvas: Canvas,
    /// Solid fill painted under every layer.
    pub background: Rgba8,
    /// Font family list for [`crate::FontRole::Body`] text.
    pub font_family: String,
    /// Font family list for [`crate::FontRole::Code`] text.
    pub code_font_family: String,
    /// Mounted scene, `None` outside `[0, total)`.
    pub active_scene: Option<ActiveScene>,
    /// Layers bottom to top.
    pub layers: Vec<VisualNode>,
}

impl FrameTree {
    /// Total node count over all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(VisualNode::node_count).sum()
    }

    /// `true` when any layer contains text containing `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.layers.iter().any(|l| l.contains_text(needle))
    }
}
