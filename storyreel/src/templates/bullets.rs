use crate::{
    composition::props::BulletsProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Affine, Point, Rect, Vec2},
        error::StoryResult,
    },
    templates::{rotate_about, scale_about},
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

/// How a bullet icon string is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IconKind {
    /// SVG path data in a 24x24 box.
    Path,
    /// Image reference; drawn as a framed placeholder.
    Url,
    /// Emoji or short text.
    Glyph,
}

impl IconKind {
    pub(crate) fn classify(icon: &str) -> Self {
        if icon.trim().starts_with('M') && icon.contains(' ') {
            Self::Path
        } else if icon.contains('/') || icon.contains('.') {
            Self::Url
        } else {
            Self::Glyph
        }
    }
}

/// Icon of edge `size` centered on `center`.
pub(crate) fn icon_node(icon: &str, center: Point, size: f64, color: Rgba8) -> VisualNode {
    let half = size / 2.0;
    match IconKind::classify(icon) {
        IconKind::Path => Group::new(vec![VisualNode::path(icon.trim(), Some(color), None)])
            .transformed(
                Affine::translate(Vec2::new(center.x - half, center.y - half))
                    * Affine::scale(size / 24.0),
            )
            .into(),
        IconKind::Url => VisualNode::outlined_rect(
            Rect::new(center.x - half, center.y - half, center.x + half, center.y + half),
            size * 0.1,
            Some(color.fade(0.15)),
            Stroke::solid(color.fade(0.6), (size * 0.04).max(1.0)),
        ),
        IconKind::Glyph => TextNode::new(
            icon,
            Point::new(center.x, center.y + size * 0.28),
            size * 0.8,
            color,
        )
        .centered()
        .into(),
    }
}

/// Vertical list whose rows spring in from the right, one every 15 frames.
pub fn bullets(ctx: &TemplateCtx<'_>, props: &BulletsProps) -> StoryResult<VisualNode> {
    let area = ctx.content_box();
    let left = area.x0 + ctx.px(100.0);

    let title_size = ctx.px(100.0);
    let title_block = if props.title.is_some() {
        title_size * 1.2 + ctx.px(80.0)
    } else {
        0.0
    };
    let text_size = ctx.px(70.0);
    let row_h = (text_size * 1.2).max(ctx.px(80.0));
    let gap = ctx.px(60.0);
    let n = props.items.len() as f64;
    let list_h = if n > 0.0 { n * row_h + (n - 1.0) * gap } else { 0.0 };
    let mut cursor = area.center().y - (title_block + list_h) / 2.0;

    let mut children = Vec::new();
    if let Some(title) = &props.title {
        let opacity = ctx.ramp(0.0, 20.0, 0.0, 1.0)?;
        children.push(
            Group::new(vec![
                TextNode::new(
                    title.clone(),
                    Point::new(left, cursor + title_size),
                    title_size,
                    ctx.theme.accent,
                )
                .weight(700)
                .into(),
            ])
            .faded(opacity)
            .into(),
        );
        cursor += title_block;
    }

    let icon_box = ctx.px(80.0);
    for (i, item) in props.items.iter().enumerate() {
        let spr = ctx.enter(15 * i as u64 + 10);
        let color = item.color.unwrap_or(ctx.theme.accent);
        let mid = cursor + row_h / 2.0;
        let icon_center = Point::new(left + icon_box / 2.0, mid);

        let marker = match &item.icon {
            Some(icon) => icon_node(icon, icon_center, ctx.px(60.0), color),
            None => {
                let half = ctx.px(15.0);
                Group::new(vec![VisualNode::rounded_rect(
                    Rect::new(
                        icon_center.x - half,
                        icon_center.y - half,
                        icon_center.x + half,
                        icon_center.y + half,
                    ),
                    ctx.px(4.0),
                    color,
                )])
                .transformed(rotate_about(icon_center, spr * 90.0))
                .into()
            }
        };

        let row = vec![
            Group::new(vec![marker])
                .transformed(scale_about(icon_center, spr))
                .into(),
            TextNode::new(
                item.text.clone(),
                Point::new(left + icon_box + ctx.px(30.0), mid + text_size * 0.35),
                text_size,
                ctx.theme.text,
            )
            .weight(500)
            .into(),
        ];
        children.push(
            Group::new(row)
                .translated(ctx.px(50.0) * (1.0 - spr), 0.0)
                .faded(spr)
                .into(),
        );
        cursor += row_h + gap;
    }

    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/bullets.rs"]
mod tests;
