use crate::{
    composition::props::CodeProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Point, Rect},
        error::StoryResult,
    },
    templates::showcase::TRAFFIC_LIGHTS,
    visual::node::{Group, Stroke, TextAnchor, TextNode, VisualNode},
};

const WINDOW_BG: Rgba8 = Rgba8::rgb(0x1E, 0x1E, 0x1E);
const TITLE_BAR_BG: Rgba8 = Rgba8::rgb(0x2D, 0x2D, 0x2D);
const BORDER: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);
const CODE_FG: Rgba8 = Rgba8::rgb(0xE0, 0xE0, 0xE0);
const GUTTER_FG: Rgba8 = Rgba8::rgb(0x55, 0x55, 0x55);
const FILE_NAME_FG: Rgba8 = Rgba8::rgb(0xAA, 0xAA, 0xAA);

/// Editor-style window with per-line staggered reveal.
pub fn code(ctx: &TemplateCtx<'_>, props: &CodeProps) -> StoryResult<VisualNode> {
    let opacity = ctx.ramp(0.0, 20.0, 0.0, 1.0)?;
    let rise = ctx.ramp(0.0, 20.0, 50.0, 0.0)?;

    let lines: Vec<&str> = props.code.trim().split('\n').collect();
    let font = ctx.px(48.0);
    let line_h = font * 1.5;
    let pad = ctx.px(40.0);
    let bar_h = ctx.px(56.0);

    let area = ctx.content_box();
    let body_h = lines.len() as f64 * line_h + 2.0 * pad;
    let win_h = (bar_h + body_h).min(area.height());
    let win = Rect::new(
        area.x0,
        area.center().y - win_h / 2.0,
        area.x1,
        area.center().y + win_h / 2.0,
    );

    let mut children = vec![
        VisualNode::outlined_rect(
            win,
            ctx.px(20.0),
            Some(WINDOW_BG),
            Stroke::solid(BORDER, ctx.px(1.0).max(1.0)),
        ),
        VisualNode::rounded_rect(
            Rect::new(win.x0, win.y0, win.x1, win.y0 + bar_h),
            ctx.px(20.0),
            TITLE_BAR_BG,
        ),
    ];
    let dot_r = ctx.px(9.0);
    for (i, color) in TRAFFIC_LIGHTS.into_iter().enumerate() {
        let cx = win.x0 + ctx.px(30.0) + dot_r + i as f64 * (2.0 * dot_r + ctx.px(12.0));
        children.push(VisualNode::circle(
            Point::new(cx, win.y0 + bar_h / 2.0),
            dot_r,
            color,
        ));
    }
    let file_name = props.file_name.as_deref().unwrap_or("script.ts");
    children.push(
        TextNode::new(
            file_name,
            Point::new(
                win.x0 + ctx.px(30.0) + 6.0 * dot_r + ctx.px(24.0) + ctx.px(30.0),
                win.y0 + bar_h / 2.0 + ctx.px(9.0),
            ),
            ctx.px(24.0),
            FILE_NAME_FG,
        )
        .code()
        .into(),
    );

    let gutter_w = if props.show_line_numbers {
        ctx.px(80.0) + ctx.px(30.0)
    } else {
        0.0
    };
    let body_top = win.y0 + bar_h + pad;
    for (i, line) in lines.iter().enumerate() {
        let start = i as f64 * 5.0;
        let line_opacity = ctx.ramp(start, start + 10.0, 0.0, 1.0)?;
        let y0 = body_top + i as f64 * line_h;
        if y0 + line_h > win.y1 {
            break;
        }
        let number = i + 1;
        let baseline = y0 + line_h / 2.0 + font * 0.35;

        let mut row = Vec::new();
        if props.highlight_lines.iter().any(|&n| n as usize == number) {
            row.push(VisualNode::rect(
                Rect::new(win.x0 + pad / 2.0, y0, win.x1 - pad / 2.0, y0 + line_h),
                Rgba8::WHITE.with_alpha(0.1),
            ));
        }
        if props.show_line_numbers {
            row.push(
                TextNode::new(
                    number.to_string(),
                    Point::new(win.x0 + pad + ctx.px(80.0), baseline),
                    font,
                    GUTTER_FG,
                )
                .anchor(TextAnchor::End)
                .code()
                .into(),
            );
        }
        row.push(
            TextNode::new(
                *line,
                Point::new(win.x0 + pad + gutter_w, baseline),
                font,
                CODE_FG,
            )
            .code()
            .into(),
        );
        children.push(Group::new(row).faded(line_opacity).into());
    }

    Ok(Group::new(children)
        .translated(0.0, ctx.px(rise))
        .faded(opacity)
        .into())
}

#[cfg(test)]
#[path = "../../tests/unit/templates/code.rs"]
mod tests;
