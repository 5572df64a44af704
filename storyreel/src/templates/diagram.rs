use std::collections::HashMap;

use crate::{
    composition::props::{DiagramNode, DiagramProps, NodeShape},
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Affine, Point, Rect, Vec2},
        error::StoryResult,
    },
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

const EDGE: Rgba8 = Rgba8::rgb(0x66, 0x66, 0x66);
const EDGE_LABEL: Rgba8 = Rgba8::rgb(0x88, 0x88, 0x88);
const NODE_FILL: Rgba8 = Rgba8::rgb(0x25, 0x25, 0x25);

/// Maps percentage coordinates onto the canvas safe area.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DiagramSpace {
    origin: Point,
    size: Vec2,
}

impl DiagramSpace {
    pub(crate) fn new(ctx: &TemplateCtx<'_>) -> Self {
        Self {
            origin: Point::new(100.0, 200.0),
            size: Vec2::new(
                (ctx.canvas.w() - 200.0).max(0.0),
                (ctx.canvas.h() - 400.0).max(0.0),
            ),
        }
    }

    pub(crate) fn map(&self, node: &DiagramNode) -> Point {
        Point::new(
            self.origin.x + node.x / 100.0 * self.size.x,
            self.origin.y + node.y / 100.0 * self.size.y,
        )
    }
}

/// Point `t` of the way from `a` to `b`.
fn lerp(a: Point, b: Point, t: f64) -> Point {
    a + (b - a) * t
}

fn arrowhead(tip: Point, from: Point, length: f64, width: f64) -> Option<VisualNode> {
    let dir = tip - from;
    let len = dir.hypot();
    if len < 1e-6 {
        return None;
    }
    let u = dir / len;
    let n = Vec2::new(-u.y, u.x);
    let base = tip - u * length;
    let a = base + n * (width / 2.0);
    let b = base - n * (width / 2.0);
    Some(VisualNode::path(
        format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
            tip.x, tip.y, a.x, a.y, b.x, b.y
        ),
        Some(EDGE),
        None,
    ))
}

fn node_shape(ctx: &TemplateCtx<'_>, shape: NodeShape, color: Rgba8) -> VisualNode {
    let stroke = Stroke::solid(color, ctx.px(6.0));
    match shape {
        NodeShape::Rect => VisualNode::outlined_rect(
            Rect::new(-ctx.px(120.0), -ctx.px(60.0), ctx.px(120.0), ctx.px(60.0)),
            ctx.px(10.0),
            Some(NODE_FILL),
            stroke,
        ),
        NodeShape::Circle => {
            VisualNode::outlined_circle(Point::ORIGIN, ctx.px(80.0), Some(NODE_FILL), stroke)
        }
        NodeShape::Diamond => {
            let (w, h) = (ctx.px(130.0), ctx.px(90.0));
            VisualNode::path(
                format!("M 0 {:.2} L {w:.2} 0 L 0 {h:.2} L {:.2} 0 Z", -h, -w),
                Some(NODE_FILL),
                Some(stroke),
            )
        }
    }
}

/// Node graph whose nodes pop in and whose edges draw on afterwards.
pub fn diagram(ctx: &TemplateCtx<'_>, props: &DiagramProps) -> StoryResult<VisualNode> {
    let space = DiagramSpace::new(ctx);
    let mut by_id: HashMap<&str, &DiagramNode> = HashMap::with_capacity(props.nodes.len());
    for node in &props.nodes {
        by_id.entry(node.id.as_str()).or_insert(node);
    }

    let mut children = Vec::new();

    if let Some(title) = &props.title {
        let size = ctx.px(80.0);
        children.push(
            TextNode::new(
                title.clone(),
                Point::new(ctx.canvas.center().x, ctx.content_box().y0 + size),
                size,
                ctx.theme.text,
            )
            .weight(700)
            .centered()
            .into(),
        );
    }

    for (i, edge) in props.edges.iter().enumerate() {
        let (Some(from), Some(to)) = (
            by_id.get(edge.from_id.as_str()),
            by_id.get(edge.to_id.as_str()),
        ) else {
            tracing::debug!(from = %edge.from_id, to = %edge.to_id, "skipping dangling diagram edge");
            continue;
        };
        let spr = ctx.enter(20 + 5 * i as u64);
        let a = space.map(from);
        let b = space.map(to);
        let tip = lerp(a, b, spr);

        let mut parts = vec![VisualNode::line(a, tip, Stroke::solid(EDGE, ctx.px(4.0)))];
        if spr > 0.0 {
            parts.extend(arrowhead(tip, a, ctx.px(40.0), ctx.px(28.0)));
        }
        if let Some(label) = &edge.label {
            let mid = lerp(a, b, 0.5);
            parts.push(
                TextNode::new(
                    label.clone(),
                    Point::new(mid.x, mid.y - ctx.px(10.0)),
                    ctx.px(30.0),
                    EDGE_LABEL,
                )
                .centered()
                .into(),
            );
        }
        children.push(Group::new(parts).faded(spr).into());
    }

    for (i, node) in props.nodes.iter().enumerate() {
        let spr = ctx.enter(5 * i as u64);
        let center = space.map(node);
        let color = node.color.unwrap_or(ctx.theme.accent);
        let label_size = ctx.px(40.0);
        children.push(
            Group::new(vec![
                node_shape(ctx, node.shape, color),
                TextNode::new(
                    node.label.clone(),
                    Point::new(0.0, label_size * 0.3),
                    label_size,
                    ctx.theme.text,
                )
                .weight(700)
                .centered()
                .into(),
            ])
            .transformed(Affine::translate(center.to_vec2()) * Affine::scale(spr))
            .into(),
        );
    }

    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/diagram.rs"]
mod tests;
