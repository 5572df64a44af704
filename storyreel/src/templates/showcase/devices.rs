use crate::{
    animation::helpers::typed_prefix,
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Point, Rect},
        error::StoryResult,
    },
    templates::{
        approx_text_width,
        showcase::{centered_rect, window_dots},
    },
    visual::node::{Group, Stroke, TextAnchor, TextNode, VisualNode},
};

const FRAMES_PER_CHAR: f64 = 2.0;
const COMMAND_PAUSE: u64 = 10;
const PROMPT_GREEN: Rgba8 = Rgba8::rgb(0x27, 0xC9, 0x3F);
const CHROME_DARK: Rgba8 = Rgba8::rgb(0x20, 0x21, 0x24);
const CHROME_TAB: Rgba8 = Rgba8::rgb(0x35, 0x36, 0x3A);
const CHROME_MUTED: Rgba8 = Rgba8::rgb(0x9A, 0xA0, 0xA6);
const PAGE_LOAD_FRAMES: f64 = 60.0;

/// Local frame at which each command starts typing.
pub(crate) fn command_starts(commands: &[String]) -> Vec<u64> {
    let mut at = 0u64;
    commands
        .iter()
        .map(|cmd| {
            let start = at;
            let typing = (cmd.chars().count() as f64 * FRAMES_PER_CHAR).ceil() as u64;
            at = at.saturating_add(typing).saturating_add(COMMAND_PAUSE);
            start
        })
        .collect()
}

/// Dark terminal typing its commands one after another.
pub fn terminal_window(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let commands = props.string_items_or(&["npm install remotion", "npm start"]);
    let starts = command_starts(&commands);

    let pad = ctx.px(30.0);
    let dot = ctx.px(14.0);
    let font = ctx.px(28.0);
    let line_h = font * 1.3;
    let gap = ctx.px(15.0);
    let body_h = (commands.len() + 1) as f64 * (line_h + gap);
    let h = (2.0 * pad + dot + ctx.px(30.0) + body_h).max(ctx.px(400.0));
    let win = centered_rect(ctx.content_box().center(), ctx.px(1000.0), h);

    let mut children = vec![VisualNode::rounded_rect(
        win,
        ctx.px(12.0),
        Rgba8::rgb(0x1E, 0x1E, 0x1E),
    )];
    children.extend(window_dots(
        Point::new(win.x0 + pad + dot / 2.0, win.y0 + pad + dot / 2.0),
        dot,
        ctx.px(10.0),
    ));

    let x = win.x0 + pad;
    let prompt_w = approx_text_width("\u{279C}", font) + ctx.px(15.0);
    let mut y = win.y0 + pad + dot + ctx.px(30.0);
    let mut cursor_at = Point::new(x, y);
    for (cmd, start) in commands.iter().zip(starts) {
        if ctx.local_frame < start {
            break;
        }
        let shown = typed_prefix(cmd, ctx.local_frame - start, FRAMES_PER_CHAR);
        let baseline = y + font;
        children.push(
            TextNode::new("\u{279C}", Point::new(x, baseline), font, PROMPT_GREEN)
                .code()
                .into(),
        );
        children.push(
            TextNode::new(shown, Point::new(x + prompt_w, baseline), font, Rgba8::WHITE)
                .code()
                .into(),
        );
        cursor_at = Point::new(
            x + prompt_w + approx_text_width(shown, font) + ctx.px(6.0),
            y,
        );
        y += line_h + gap;
    }

    children.push(VisualNode::rect(
        Rect::new(
            cursor_at.x,
            cursor_at.y,
            cursor_at.x + ctx.px(15.0),
            cursor_at.y + ctx.px(30.0),
        ),
        Rgba8::WHITE.with_alpha(0.7),
    ));
    Ok(VisualNode::group(children))
}

/// Light browser chrome around a placeholder page; `subtitle` is the address.
pub fn browser_window(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let win = centered_rect(ctx.content_box().center(), ctx.px(1200.0), ctx.px(800.0));
    let bar_h = ctx.px(60.0);
    let dot = ctx.px(16.0);
    let pad = ctx.px(20.0);

    let mut children = vec![
        VisualNode::rounded_rect(win, ctx.px(12.0), Rgba8::WHITE),
        VisualNode::rounded_rect(
            Rect::new(win.x0, win.y0, win.x1, win.y0 + bar_h),
            ctx.px(12.0),
            Rgba8::rgb(0xF0, 0xF0, 0xF0),
        ),
    ];
    let mid = win.y0 + bar_h / 2.0;
    children.extend(window_dots(
        Point::new(win.x0 + pad + dot / 2.0, mid),
        dot,
        ctx.px(8.0),
    ));

    let url_x0 = win.x0 + pad + 3.0 * dot + 2.0 * ctx.px(8.0) + ctx.px(15.0);
    let url_bar = Rect::new(url_x0, mid - ctx.px(18.0), win.x1 - pad, mid + ctx.px(18.0));
    children.push(VisualNode::rounded_rect(url_bar, ctx.px(6.0), Rgba8::WHITE));
    let url_size = ctx.px(18.0);
    children.push(
        TextNode::new(
            props.subtitle_or("https://remotion.dev"),
            Point::new(url_bar.x0 + ctx.px(15.0), mid + url_size * 0.35),
            url_size,
            Rgba8::rgb(0x55, 0x55, 0x55),
        )
        .into(),
    );

    let content = Rect::new(win.x0, win.y0 + bar_h, win.x1, win.y1);
    let size = ctx.px(40.0);
    children.push(
        TextNode::new(
            props.title_or("Web Content"),
            Point::new(content.center().x, content.center().y + size * 0.35),
            size,
            Rgba8::rgb(0xCC, 0xCC, 0xCC),
        )
        .centered()
        .into(),
    );
    Ok(VisualNode::group(children))
}

/// Dark tabbed browser whose page finishes loading over two seconds; `title` names the tab
/// and `subtitle` is the address.
pub fn browser_v2(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let title = props.title_or("New Tab");
    let url = props.subtitle_or("google.com");
    let loaded = ctx.ramp(0.0, PAGE_LOAD_FRAMES, 0.0, 1.0)?;

    let win = centered_rect(ctx.content_box().center(), ctx.px(1400.0), ctx.px(900.0));
    let radius = ctx.px(12.0);
    let tabs_h = ctx.px(45.0);
    let address_h = ctx.px(50.0);
    let hairline = ctx.px(1.0).max(1.0);

    let mut children = vec![VisualNode::outlined_rect(
        win,
        radius,
        Some(CHROME_DARK),
        Stroke::solid(Rgba8::rgb(0x3C, 0x40, 0x43), hairline),
    )];

    let tab_w = ctx.px(240.0);
    let tab_h = ctx.px(36.0);
    let tab_pad = ctx.px(15.0);
    let tab_text = ctx.px(14.0);
    let active = Rect::new(
        win.x0 + ctx.px(10.0),
        win.y0 + tabs_h - tab_h,
        win.x0 + ctx.px(10.0) + tab_w,
        win.y0 + tabs_h,
    );
    let tab_mid = active.center().y;
    let favicon = ctx.px(8.0);
    children.push(VisualNode::rounded_rect(active, ctx.px(8.0), CHROME_TAB));
    children.push(VisualNode::circle(
        Point::new(active.x0 + tab_pad + favicon, tab_mid),
        favicon,
        Rgba8::WHITE.with_alpha(0.2),
    ));
    children.push(
        TextNode::new(
            title,
            Point::new(active.x0 + tab_pad + 2.0 * favicon + ctx.px(10.0), tab_mid + tab_text * 0.35),
            tab_text,
            Rgba8::rgb(0xE8, 0xEA, 0xED),
        )
        .into(),
    );
    children.push(
        TextNode::new(
            "\u{00D7}",
            Point::new(active.x1 - tab_pad, tab_mid + ctx.px(16.0) * 0.35),
            ctx.px(16.0),
            CHROME_MUTED,
        )
        .anchor(TextAnchor::End)
        .into(),
    );
    let idle_x = active.x1 + tab_pad;
    children.push(
        Group::new(vec![
            VisualNode::circle(
                Point::new(idle_x + favicon, tab_mid),
                favicon,
                Rgba8::WHITE.with_alpha(0.1),
            ),
            TextNode::new(
                "Loading...",
                Point::new(idle_x + 2.0 * favicon + ctx.px(10.0), tab_mid + tab_text * 0.35),
                tab_text,
                CHROME_MUTED,
            )
            .into(),
        ])
        .faded(0.7)
        .into(),
    );

    let bar = Rect::new(win.x0, win.y0 + tabs_h, win.x1, win.y0 + tabs_h + address_h);
    let bar_mid = bar.center().y;
    children.push(VisualNode::rect(bar, CHROME_TAB));
    children.push(VisualNode::rect(
        Rect::new(bar.x0, bar.y1 - hairline, bar.x1, bar.y1),
        Rgba8::BLACK,
    ));
    let nav_size = ctx.px(20.0);
    for (i, glyph) in ["\u{2190}", "\u{2192}", "\u{21BB}"].into_iter().enumerate() {
        children.push(
            TextNode::new(
                glyph,
                Point::new(
                    bar.x0 + ctx.px(15.0) + i as f64 * ctx.px(35.0),
                    bar_mid + nav_size * 0.35,
                ),
                nav_size,
                CHROME_MUTED,
            )
            .into(),
        );
    }
    let profile_r = ctx.px(15.0);
    children.push(VisualNode::circle(
        Point::new(bar.x1 - ctx.px(15.0) - profile_r, bar_mid),
        profile_r,
        Rgba8::rgb(0x29, 0x79, 0xFF),
    ));

    let omnibox = Rect::new(
        bar.x0 + ctx.px(15.0) + 3.0 * ctx.px(35.0) + ctx.px(20.0),
        bar_mid - ctx.px(16.0),
        bar.x1 - ctx.px(15.0) - 2.0 * profile_r - ctx.px(20.0),
        bar_mid + ctx.px(16.0),
    );
    children.push(VisualNode::outlined_rect(
        omnibox,
        ctx.px(16.0),
        Some(CHROME_DARK),
        Stroke::solid(Rgba8::rgb(0x5F, 0x63, 0x68), hairline),
    ));
    let url_size = ctx.px(14.0);
    let url_base = bar_mid + url_size * 0.35;
    let mut url_x = omnibox.x0 + ctx.px(20.0);
    children.push(
        TextNode::new("\u{1F512}", Point::new(url_x, url_base), url_size, Rgba8::WHITE).into(),
    );
    url_x += url_size + ctx.px(12.0);
    children.push(
        TextNode::new("https://", Point::new(url_x, url_base), url_size, Rgba8::WHITE).into(),
    );
    url_x += approx_text_width("https://", url_size);
    children.push(
        TextNode::new(url, Point::new(url_x, url_base), url_size, CHROME_MUTED).into(),
    );

    let page_bg = Rgba8::rgb(0x11, 0x11, 0x11);
    let viewport = Rect::new(win.x0, bar.y1, win.x1, win.y1);
    children.push(VisualNode::rect(
        Rect::new(viewport.x0, viewport.y0, viewport.x1, viewport.y1 - radius),
        page_bg,
    ));
    children.push(VisualNode::rounded_rect(
        Rect::new(viewport.x0, viewport.y1 - 2.0 * radius, viewport.x1, viewport.y1),
        radius,
        page_bg,
    ));
    let headline = ctx.px(60.0);
    let c = viewport.center();
    children.push(
        TextNode::new(
            format!("Welcome to {title}"),
            Point::new(c.x, c.y - ctx.px(14.0)),
            headline,
            Rgba8::WHITE,
        )
        .weight(700)
        .centered()
        .into(),
    );
    children.push(VisualNode::rounded_rect(
        centered_rect(
            Point::new(c.x, c.y + ctx.px(24.0)),
            ctx.px(200.0),
            ctx.px(8.0),
        ),
        ctx.px(4.0),
        Rgba8::rgb(0x33, 0x33, 0x33),
    ));
    if loaded < 1.0 {
        children.push(VisualNode::rect(
            Rect::new(
                viewport.x0,
                viewport.y0,
                viewport.x0 + viewport.width() * loaded,
                viewport.y0 + ctx.px(3.0),
            ),
            Rgba8::rgb(0x8A, 0xB4, 0xF8),
        ));
    }
    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/devices.rs"]
mod tests;
