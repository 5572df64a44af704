use crate::{
    composition::props::{SubtitleProps, TitleLayout, TitleProps},
    dispatch::context::TemplateCtx,
    foundation::{
        core::{Point, Rect},
        error::StoryResult,
    },
    templates::{scale_about, translate_y},
    visual::node::{Group, TextAnchor, TextNode, VisualNode},
};

/// Headline with springy entry, optional subtitle and an accent rule.
pub fn title(ctx: &TemplateCtx<'_>, props: &TitleProps) -> StoryResult<VisualNode> {
    let spr = ctx.enter(0);
    let spr_sub = ctx.enter(10);
    let area = ctx.content_box();
    let left = props.variant == TitleLayout::Left;

    let title_size = ctx.px(160.0);
    let sub_size = ctx.px(60.0);
    let title_h = title_size * 1.1;
    let sub_h = if props.subtitle.is_some() {
        ctx.px(40.0) + sub_size * 1.2
    } else {
        0.0
    };
    let rule_h = ctx.px(8.0);
    let stack_h = title_h + sub_h + ctx.px(60.0) + rule_h;

    let (x, anchor) = if left {
        (area.x0, TextAnchor::Start)
    } else {
        (area.center().x, TextAnchor::Middle)
    };
    let top = area.center().y - stack_h / 2.0;

    let mut children = Vec::new();

    let title_center = Point::new(x, top + title_h / 2.0);
    let headline = TextNode::new(
        props.title.clone(),
        Point::new(x, top + title_size * 0.9),
        title_size,
        ctx.theme.text,
    )
    .weight(800)
    .anchor(anchor);
    children.push(
        Group::new(vec![headline.into()])
            .transformed(translate_y(ctx.px(50.0) * (1.0 - spr)))
            .transformed(scale_about(title_center, spr))
            .faded(spr)
            .into(),
    );

    let mut cursor = top + title_h;
    if let Some(sub) = &props.subtitle {
        cursor += ctx.px(40.0);
        let line = TextNode::new(
            sub.clone(),
            Point::new(x, cursor + sub_size),
            sub_size,
            ctx.theme.accent,
        )
        .anchor(anchor);
        children.push(
            Group::new(vec![line.into()])
                .translated(0.0, ctx.px(50.0) * (1.0 - spr_sub))
                .faded(spr_sub)
                .into(),
        );
        cursor += sub_size * 1.2;
    }

    cursor += ctx.px(60.0);
    let rule_w = ctx.px(if left { 200.0 } else { 400.0 }) * spr;
    let rule_x0 = if left { x } else { x - rule_w / 2.0 };
    children.push(
        Group::new(vec![VisualNode::rounded_rect(
            Rect::new(rule_x0, cursor, rule_x0 + rule_w, cursor + rule_h),
            ctx.px(4.0),
            ctx.theme.accent,
        )])
        .faded(spr)
        .into(),
    );

    Ok(VisualNode::group(children))
}

/// Centered caption fading and rising in over the first 20 frames.
pub fn subtitle(ctx: &TemplateCtx<'_>, props: &SubtitleProps) -> StoryResult<VisualNode> {
    let opacity = ctx.ramp(0.0, 20.0, 0.0, 1.0)?;
    let rise = ctx.ramp(0.0, 20.0, 20.0, 0.0)?;

    let size = ctx.px(90.0);
    let line_h = size * 1.5;
    let lines: Vec<&str> = props.text.lines().collect();
    let center = ctx.canvas.center();
    let top = center.y - line_h * lines.len() as f64 / 2.0;

    let texts = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            TextNode::new(
                *line,
                Point::new(center.x, top + line_h * i as f64 + size * 1.05),
                size,
                ctx.theme.text,
            )
            .centered()
            .into()
        })
        .collect();

    Ok(Group::new(texts)
        .translated(0.0, ctx.px(rise))
        .faded(opacity)
        .into())
}

#[cfg(test)]
#[path = "../../tests/unit/templates/basic.rs"]
mod tests;
