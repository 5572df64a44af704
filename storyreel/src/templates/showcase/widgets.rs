use crate::{
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Point, Rect, Vec2},
        error::StoryResult,
    },
    templates::{
        approx_text_width, rotate_about,
        showcase::{arc_path, centered_rect},
        wrap_lines,
    },
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

const TRACK: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);

/// Row of keycaps, `items` or `Cmd` + `C`.
pub fn keyboard_shortcut(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let keys = props.string_items_or(&["Cmd", "C"]);
    let size = ctx.px(40.0);
    let h = ctx.px(100.0);
    let gap = ctx.px(20.0);
    let widths: Vec<f64> = keys
        .iter()
        .map(|k| (approx_text_width(k, size) + 2.0 * ctx.px(30.0)).max(ctx.px(100.0)))
        .collect();
    let total = widths.iter().sum::<f64>() + gap * keys.len().saturating_sub(1) as f64;
    let c = ctx.content_box().center();
    let mut x = c.x - total / 2.0;

    let mut children = Vec::with_capacity(keys.len() * 3);
    for (key, w) in keys.iter().zip(widths) {
        let cap = Rect::new(x, c.y - h / 2.0, x + w, c.y + h / 2.0);
        children.push(VisualNode::rounded_rect(
            cap + Vec2::new(0.0, ctx.px(8.0)),
            ctx.px(12.0),
            Rgba8::rgb(0xBB, 0xBB, 0xBB),
        ));
        children.push(VisualNode::rounded_rect(
            cap,
            ctx.px(12.0),
            Rgba8::rgb(0xF0, 0xF0, 0xF0),
        ));
        children.push(
            TextNode::new(
                key.clone(),
                Point::new(cap.center().x, c.y + size * 0.35),
                size,
                Rgba8::rgb(0x33, 0x33, 0x33),
            )
            .weight(700)
            .centered()
            .into(),
        );
        x += w + gap;
    }
    Ok(VisualNode::group(children))
}

/// Ring gauge centered on `c` filled to `progress` percent.
pub(crate) fn progress_ring(ctx: &TemplateCtx<'_>, c: Point, progress: f64, color: Rgba8) -> VisualNode {
    let size = ctx.px(200.0);
    let stroke_w = ctx.px(10.0);
    let radius = size / 2.0 - stroke_w;
    let label = size * 0.25;
    VisualNode::group(vec![
        VisualNode::outlined_circle(c, radius, None, Stroke::solid(TRACK, stroke_w)),
        VisualNode::path(
            arc_path(c, radius, -90.0, progress / 100.0 * 360.0),
            None,
            Some(Stroke::solid(color, stroke_w)),
        ),
        TextNode::new(
            format!("{progress}%"),
            Point::new(c.x, c.y + label * 0.35),
            label,
            Rgba8::WHITE,
        )
        .weight(700)
        .centered()
        .into(),
    ])
}

/// Ring gauge at 75 %, in `color` or the accent.
pub fn circular_progress(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let color = props.color.unwrap_or(ctx.theme.accent);
    Ok(progress_ring(ctx, ctx.content_box().center(), 75.0, color))
}

/// Dark toast with an accent edge.
pub fn notification_toast(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let w = ctx.px(500.0);
    let pad = ctx.px(25.0);
    let (title_size, msg_size) = (ctx.px(24.0), ctx.px(20.0));
    let h = 2.0 * pad + title_size * 1.2 + ctx.px(5.0) + msg_size * 1.2;
    let card = centered_rect(ctx.content_box().center(), w, h);
    let text_x = card.x0 + pad + ctx.px(30.0) + ctx.px(20.0);
    Ok(VisualNode::group(vec![
        VisualNode::rounded_rect(card, ctx.px(16.0), Rgba8::rgb(0x22, 0x22, 0x22)),
        VisualNode::rect(
            Rect::new(card.x0, card.y0, card.x0 + ctx.px(6.0), card.y1),
            ctx.theme.accent,
        ),
        TextNode::new(
            "\u{1F514}",
            Point::new(card.x0 + pad, card.y0 + pad + ctx.px(30.0)),
            ctx.px(30.0),
            Rgba8::WHITE,
        )
        .into(),
        TextNode::new(
            props.title_or("Success"),
            Point::new(text_x, card.y0 + pad + title_size),
            title_size,
            Rgba8::WHITE,
        )
        .weight(700)
        .into(),
        TextNode::new(
            props.subtitle_or("Operation completed."),
            Point::new(
                text_x,
                card.y0 + pad + title_size * 1.2 + ctx.px(5.0) + msg_size,
            ),
            msg_size,
            Rgba8::rgb(0xAA, 0xAA, 0xAA),
        )
        .into(),
    ]))
}

/// Background, border and icon for an alert severity; unknown kinds read as errors.
pub(crate) fn alert_palette(kind: &str) -> (Rgba8, Rgba8, &'static str) {
    match kind {
        "warning" => (
            Rgba8::rgb(0x25, 0x1B, 0x08),
            Rgba8::rgb(0xD2, 0x99, 0x22),
            "\u{26A0}\u{FE0F}",
        ),
        "success" => (
            Rgba8::rgb(0x0B, 0x1D, 0x11),
            Rgba8::rgb(0x2E, 0xA0, 0x43),
            "\u{2705}",
        ),
        "info" => (
            Rgba8::rgb(0x0C, 0x16, 0x26),
            Rgba8::rgb(0x58, 0xA6, 0xFF),
            "\u{2139}\u{FE0F}",
        ),
        _ => (
            Rgba8::rgb(0x2C, 0x0B, 0x0E),
            Rgba8::rgb(0xF8, 0x51, 0x49),
            "\u{26D4}",
        ),
    }
}

/// Severity box; `items[0]` picks error, warning, success or info.
pub fn alert_box(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let (bg, border, icon) = alert_palette(props.item_str(0).unwrap_or("error"));
    let w = ctx.px(700.0);
    let pad = ctx.px(30.0);
    let (title_size, msg_size) = (ctx.px(32.0), ctx.px(24.0));
    let text_x_off = pad + ctx.px(40.0) + ctx.px(20.0);
    let lines = wrap_lines(
        props.subtitle_or("Something went wrong."),
        msg_size,
        w - text_x_off - pad,
    );
    let h = 2.0 * pad + title_size * 1.2 + ctx.px(10.0) + msg_size * 1.5 * lines.len() as f64;
    let card = centered_rect(ctx.content_box().center(), w, h);

    let mut children = vec![
        VisualNode::outlined_rect(
            card,
            ctx.px(12.0),
            Some(bg),
            Stroke::solid(border, ctx.px(2.0)),
        ),
        TextNode::new(
            icon,
            Point::new(card.x0 + pad, card.y0 + pad + ctx.px(40.0)),
            ctx.px(40.0),
            Rgba8::WHITE,
        )
        .into(),
        TextNode::new(
            props.title_or("Error"),
            Point::new(card.x0 + text_x_off, card.y0 + pad + title_size),
            title_size,
            border,
        )
        .weight(700)
        .into(),
    ];
    let mut y = card.y0 + pad + title_size * 1.2 + ctx.px(10.0);
    for line in lines {
        children.push(
            TextNode::new(
                line,
                Point::new(card.x0 + text_x_off, y + msg_size),
                msg_size,
                Rgba8::rgb(0xE6, 0xED, 0xF3),
            )
            .into(),
        );
        y += msg_size * 1.5;
    }
    Ok(VisualNode::group(children))
}

fn badge(ctx: &TemplateCtx<'_>, text: &str, color: Rgba8, left: f64, mid: f64) -> (VisualNode, f64) {
    let size = ctx.px(24.0);
    let dot = ctx.px(10.0);
    let pad_x = ctx.px(30.0);
    let w = 2.0 * pad_x + dot + ctx.px(10.0) + approx_text_width(text, size);
    let h = size * 1.2 + 2.0 * ctx.px(10.0);
    let pill = Rect::new(left, mid - h / 2.0, left + w, mid + h / 2.0);
    let node = Group::new(vec![
        VisualNode::outlined_rect(
            pill,
            h / 2.0,
            Some(color.with_alpha(0x20 as f64 / 255.0)),
            Stroke::solid(color, ctx.px(2.0)),
        ),
        VisualNode::circle(Point::new(left + pad_x + dot / 2.0, mid), dot / 2.0, color),
        TextNode::new(
            text,
            Point::new(left + pad_x + dot + ctx.px(10.0), mid + size * 0.35),
            size,
            color,
        )
        .weight(700)
        .into(),
    ])
    .into();
    (node, w)
}

/// React and TypeScript pills.
pub fn tech_badge(ctx: &TemplateCtx<'_>, _props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let badges = [
        ("React", Rgba8::rgb(0x61, 0xDA, 0xFB)),
        ("TypeScript", Rgba8::rgb(0x31, 0x78, 0xC6)),
    ];
    let c = ctx.content_box().center();
    let gap = ctx.px(20.0);
    let mut x = 0.0;
    let mut nodes = Vec::with_capacity(badges.len());
    for (text, color) in badges {
        let (node, w) = badge(ctx, text, color, x, 0.0);
        nodes.push(node);
        x += w + gap;
    }
    let total = x - gap;
    Ok(Group::new(nodes)
        .translated(c.x - total / 2.0, c.y)
        .into())
}

/// Ring with an accent quarter spinning 10 degrees per frame.
pub fn loading_spinner(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let c = ctx.content_box().center();
    let border = ctx.px(8.0);
    let radius = ctx.px(40.0) - border / 2.0;
    let color = props.color.unwrap_or(ctx.theme.accent);
    let rotation = ctx.frame() * 10.0;
    Ok(VisualNode::group(vec![
        VisualNode::outlined_circle(c, radius, None, Stroke::solid(TRACK, border)),
        Group::new(vec![VisualNode::path(
            arc_path(c, radius, -135.0, 90.0),
            None,
            Some(Stroke::solid(color, border)),
        )])
        .transformed(rotate_about(c, rotation))
        .into(),
    ]))
}

/// Height of waveform bar `i` at `frame`.
pub(crate) fn wave_height(frame: f64, i: usize) -> f64 {
    (30.0 + 50.0 * (frame / 5.0 + i as f64).sin()).abs()
}

/// Twenty bars oscillating around a center line.
pub fn audio_waveform(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    const BARS: usize = 20;
    let c = ctx.content_box().center();
    let color = props.color.unwrap_or(ctx.theme.accent);
    let w = ctx.px(8.0);
    let gap = ctx.px(6.0);
    let total = BARS as f64 * w + (BARS - 1) as f64 * gap;
    let x0 = c.x - total / 2.0;
    let bars = (0..BARS)
        .map(|i| {
            let h = ctx.px(wave_height(ctx.frame(), i));
            let x = x0 + i as f64 * (w + gap);
            VisualNode::rounded_rect(
                Rect::new(x, c.y - h / 2.0, x + w, c.y + h / 2.0),
                (w / 2.0).min(h / 2.0),
                color,
            )
        })
        .collect();
    Ok(VisualNode::group(bars))
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/widgets.rs"]
mod tests;
