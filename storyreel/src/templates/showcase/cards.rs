use crate::{
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Affine, Point, Rect, Vec2},
        error::StoryResult,
    },
    templates::{approx_text_width, showcase::centered_rect, wrap_lines},
    visual::node::{Group, Stroke, TextAnchor, TextNode, VisualNode},
};

const TREND_GREEN: Rgba8 = Rgba8::rgb(0x27, 0xC9, 0x3F);
const POST_TEXT: Rgba8 = Rgba8::rgb(0xE7, 0xE9, 0xEA);
const POST_MUTED: Rgba8 = Rgba8::rgb(0x71, 0x76, 0x7B);
const VERIFIED_BLUE: Rgba8 = Rgba8::rgb(0x1D, 0x9B, 0xF0);
/// Verified badge in a 24x24 box.
const VERIFIED_BADGE: &str = "M22.5 12.5c0-1.58-.875-2.95-2.148-3.6.154-.435.238-.905.238-1.4 0-2.21-1.71-3.998-3.818-3.998-.47 0-.92.084-1.336.25C14.818 2.415 13.51 1.5 12 1.5s-2.816.917-3.437 2.25c-.415-.165-.866-.25-1.336-.25-2.11 0-3.818 1.79-3.818 4 0 .495.083.965.238 1.4-1.272.65-2.147 2.02-2.147 3.6 0 1.435.71 2.79 1.847 3.63-.145.464-.225.96-.225 1.474 0 2.635 2.135 4.79 4.72 4.79.58 0 1.13-.105 1.638-.3 1.05.98 2.505 1.59 4.088 1.59s3.04-.61 4.09-1.59c.508.195 1.057.3 1.637.3 2.586 0 4.72-2.155 4.72-4.79 0-.514-.08-1.01-.224-1.474 1.137-.84 1.846-2.195 1.846-3.63zM9.763 17.29l-3.62-3.62 1.41-1.415 2.21 2.21 6.556-6.556 1.416 1.415-7.972 7.966z";

/// Frosted translucent card.
pub fn glass_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let c = ctx.content_box().center();
    let card = centered_rect(c, ctx.px(800.0), ctx.px(500.0));
    let title_size = ctx.px(60.0);
    let sub_size = ctx.px(30.0);
    Ok(VisualNode::group(vec![
        VisualNode::outlined_rect(
            card,
            ctx.px(30.0),
            Some(Rgba8::WHITE.with_alpha(0.05)),
            Stroke::solid(Rgba8::WHITE.with_alpha(0.1), ctx.px(1.0).max(1.0)),
        ),
        TextNode::new(
            props.title_or("Glass UI"),
            Point::new(c.x, c.y - ctx.px(10.0)),
            title_size,
            Rgba8::WHITE,
        )
        .weight(700)
        .centered()
        .into(),
        TextNode::new(
            props.subtitle_or("Modern Aesthetics"),
            Point::new(c.x, c.y + ctx.px(20.0) + sub_size),
            sub_size,
            Rgba8::WHITE.with_alpha(0.7),
        )
        .centered()
        .into(),
    ]))
}

/// Black card with a glowing border that intensifies over the first second.
pub fn neon_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let color = props.color.unwrap_or(ctx.theme.accent);
    let glow = ctx.ramp(0.0, 30.0, 20.0, 60.0)?;
    let c = ctx.content_box().center();
    let card = centered_rect(c, ctx.px(800.0), ctx.px(500.0));
    let radius = ctx.px(30.0);

    // Glow approximated by widening translucent outlines.
    let mut children: Vec<VisualNode> = (1..=4)
        .rev()
        .map(|k| {
            let spread = ctx.px(glow) * f64::from(k) / 4.0;
            VisualNode::outlined_rect(
                card.inset(spread / 2.0),
                radius + spread / 2.0,
                None,
                Stroke::solid(color.with_alpha(0.08), spread),
            )
        })
        .collect();
    children.push(VisualNode::outlined_rect(
        card,
        radius,
        Some(Rgba8::BLACK),
        Stroke::solid(color, ctx.px(4.0)),
    ));
    let size = ctx.px(70.0);
    children.push(
        TextNode::new(
            props.title_or("Cyberpunk"),
            Point::new(c.x, c.y + size * 0.35),
            size,
            Rgba8::WHITE,
        )
        .weight(700)
        .centered()
        .into(),
    );
    Ok(VisualNode::group(children))
}

/// Large italic-style quotation with attribution.
pub fn quote_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let c = ctx.content_box().center();
    let text_size = ctx.px(60.0);
    let line_h = text_size * 1.4;
    let lines = wrap_lines(
        props.title_or("Simplicity is the soul of efficiency."),
        text_size,
        ctx.px(1200.0),
    );
    let mark_size = ctx.px(120.0);
    let author_size = ctx.px(40.0);
    let total = mark_size * 0.5
        + ctx.px(40.0)
        + line_h * lines.len() as f64
        + ctx.px(40.0)
        + author_size;
    let mut y = c.y - total / 2.0;

    let mut children = vec![
        TextNode::new(
            "\u{201C}",
            Point::new(c.x, y + mark_size * 0.6),
            mark_size,
            Rgba8::rgb(0x33, 0x33, 0x33),
        )
        .centered()
        .into(),
    ];
    y += mark_size * 0.5 + ctx.px(40.0);
    for line in lines {
        children.push(
            TextNode::new(line, Point::new(c.x, y + text_size), text_size, Rgba8::WHITE)
                .centered()
                .into(),
        );
        y += line_h;
    }
    y += ctx.px(40.0);
    children.push(
        TextNode::new(
            format!("\u{2014} {}", props.subtitle_or("Austin Freeman")),
            Point::new(c.x, y + author_size),
            author_size,
            ctx.theme.accent,
        )
        .weight(700)
        .centered()
        .into(),
    );
    Ok(VisualNode::group(children))
}

/// `name` of the stats object in `items[1]` as display text, or `fallback`.
pub(crate) fn stat_field(props: &ShowcaseProps, name: &str, fallback: &str) -> String {
    props
        .items
        .get(1)
        .and_then(|s| s.get(name))
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| fallback.to_owned())
}

/// Follower counts from `items[1]`, falling back to the stock numbers.
pub(crate) fn profile_stats(props: &ShowcaseProps) -> (String, String) {
    (
        stat_field(props, "followers", "312"),
        stat_field(props, "following", "48"),
    )
}

/// White profile card with a portrait slot, name, role and stats row.
pub fn profile_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let c = ctx.content_box().center();
    let w = ctx.px(460.0);
    let pad = ctx.px(16.0);
    let photo_h = ctx.px(420.0);
    let name_size = ctx.px(32.0);
    let role_size = ctx.px(20.0);
    let role_lines = wrap_lines(
        props.subtitle_or("Product Designer"),
        role_size,
        w - 2.0 * pad - ctx.px(24.0),
    );
    let h = pad
        + photo_h
        + ctx.px(24.0)
        + name_size * 1.2
        + ctx.px(8.0)
        + role_size * 1.4 * role_lines.len() as f64
        + ctx.px(30.0)
        + ctx.px(44.0)
        + pad
        + ctx.px(12.0);
    let card = centered_rect(c, w, h);
    let text_x = card.x0 + pad + ctx.px(12.0);

    let photo = Rect::new(
        card.x0 + pad,
        card.y0 + pad,
        card.x1 - pad,
        card.y0 + pad + photo_h,
    );
    let mut children = vec![
        VisualNode::rounded_rect(card, ctx.px(40.0), Rgba8::WHITE),
        // Remote images are not fetched; the slot keeps the layout.
        VisualNode::rounded_rect(photo, ctx.px(32.0), Rgba8::rgb(0xF0, 0xF0, 0xF0)),
    ];

    let mut y = photo.y1 + ctx.px(24.0);
    let name = props.title_or("Sophie Bennett");
    children.push(
        TextNode::new(name, Point::new(text_x, y + name_size), name_size, Rgba8::BLACK)
            .weight(800)
            .into(),
    );
    let badge_x = text_x + approx_text_width(name, name_size) + ctx.px(10.0) + ctx.px(14.0);
    children.push(VisualNode::circle(
        Point::new(badge_x, y + name_size * 0.6),
        ctx.px(14.0),
        TREND_GREEN,
    ));
    y += name_size * 1.2 + ctx.px(8.0);
    for line in role_lines {
        children.push(
            TextNode::new(
                line,
                Point::new(text_x, y + role_size),
                role_size,
                Rgba8::rgb(0x66, 0x66, 0x66),
            )
            .weight(500)
            .into(),
        );
        y += role_size * 1.4;
    }
    y += ctx.px(30.0);

    let (followers, following) = profile_stats(props);
    let stat_size = ctx.px(18.0);
    let row_mid = y + ctx.px(22.0);
    children.push(
        TextNode::new(
            format!("\u{1F464} {followers}"),
            Point::new(text_x, row_mid + stat_size * 0.35),
            stat_size,
            Rgba8::BLACK,
        )
        .weight(700)
        .into(),
    );
    children.push(
        TextNode::new(
            format!("\u{2611} {following}"),
            Point::new(text_x + ctx.px(110.0), row_mid + stat_size * 0.35),
            stat_size,
            Rgba8::BLACK,
        )
        .weight(700)
        .into(),
    );
    let button = Rect::new(
        card.x1 - pad - ctx.px(12.0) - ctx.px(130.0),
        row_mid - ctx.px(22.0),
        card.x1 - pad - ctx.px(12.0),
        row_mid + ctx.px(22.0),
    );
    children.push(VisualNode::rounded_rect(
        button,
        ctx.px(24.0),
        Rgba8::rgb(0xF2, 0xF2, 0xF2),
    ));
    children.push(
        TextNode::new(
            "Follow +",
            Point::new(button.center().x, row_mid + stat_size * 0.35),
            stat_size,
            Rgba8::BLACK,
        )
        .weight(700)
        .centered()
        .into(),
    );
    Ok(VisualNode::group(children))
}

/// Dashboard tile: label, big value and an upward trend.
pub fn metric_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let c = ctx.content_box().center();
    let label = props.title_or("Total Views");
    let value = props.subtitle_or("1,024");
    let pad = ctx.px(40.0);
    let (label_size, value_size, trend_size) = (ctx.px(24.0), ctx.px(80.0), ctx.px(24.0));
    let content_w = approx_text_width(value, value_size).max(approx_text_width(label, label_size));
    let w = (content_w + 2.0 * pad).max(ctx.px(300.0));
    let h = 2.0 * pad + label_size * 1.2 + ctx.px(10.0) + value_size * 1.2 + ctx.px(10.0)
        + trend_size * 1.2;
    let card = centered_rect(c, w, h);
    let x = card.x0 + pad;
    let mut y = card.y0 + pad;

    let mut children = vec![VisualNode::rounded_rect(
        card,
        ctx.px(20.0),
        Rgba8::rgb(0x1E, 0x1E, 0x1E),
    )];
    children.push(
        TextNode::new(
            label,
            Point::new(x, y + label_size),
            label_size,
            Rgba8::rgb(0x88, 0x88, 0x88),
        )
        .into(),
    );
    y += label_size * 1.2 + ctx.px(10.0);
    children.push(
        TextNode::new(value, Point::new(x, y + value_size), value_size, Rgba8::WHITE)
            .weight(700)
            .into(),
    );
    y += value_size * 1.2 + ctx.px(10.0);
    children.push(
        TextNode::new(
            "\u{25B2} 12%",
            Point::new(x, y + trend_size),
            trend_size,
            TREND_GREEN,
        )
        .into(),
    );
    Ok(VisualNode::group(children))
}

/// Post card: `title` is the author, `items[0]` the handle, `subtitle` the body and `items[1]`
/// an optional `{replies, retweets, likes, views}` object.
pub fn twitter_card(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let name = props.title_or("Elon Musk");
    let handle = props.item_str(0).unwrap_or("@elonmusk");
    let body = props.subtitle_or("To the moon! \u{1F680}");

    let w = ctx.px(650.0);
    let pad = ctx.px(24.0);
    let gap = ctx.px(16.0);
    let avatar = ctx.px(48.0);
    let body_size = ctx.px(23.0);
    let body_line = body_size * 1.35;
    let meta_size = ctx.px(15.0);
    let stats_h = ctx.px(24.0);
    let lines = wrap_lines(body, body_size, w - 2.0 * pad);

    let h = 2.0 * pad
        + avatar
        + gap
        + lines.len() as f64 * body_line
        + gap
        + meta_size * 1.2
        + ctx.px(8.0)
        + gap
        + stats_h;
    let card = centered_rect(ctx.content_box().center(), w, h);
    let x = card.x0 + pad;
    let top = card.y0 + pad;

    let mut children = vec![
        VisualNode::outlined_rect(
            card,
            ctx.px(16.0),
            Some(Rgba8::BLACK),
            Stroke::solid(Rgba8::rgb(0x33, 0x33, 0x33), ctx.px(1.0).max(1.0)),
        ),
        VisualNode::circle(
            Point::new(x + avatar / 2.0, top + avatar / 2.0),
            avatar / 2.0,
            Rgba8::rgb(0x33, 0x33, 0x33),
        ),
        TextNode::new(
            "\u{1F464}",
            Point::new(x + avatar / 2.0, top + avatar / 2.0 + ctx.px(8.0)),
            ctx.px(24.0),
            Rgba8::WHITE,
        )
        .centered()
        .into(),
    ];

    let name_size = ctx.px(17.0);
    let name_x = x + avatar + ctx.px(12.0);
    let name_base = top + ctx.px(22.0);
    children.push(
        TextNode::new(name, Point::new(name_x, name_base), name_size, POST_TEXT)
            .weight(700)
            .into(),
    );
    let badge = ctx.px(22.0);
    children.push(
        Group::new(vec![VisualNode::path(
            VERIFIED_BADGE,
            Some(VERIFIED_BLUE),
            None,
        )])
        .transformed(
            Affine::translate(Vec2::new(
                name_x + approx_text_width(name, name_size) + ctx.px(4.0),
                name_base - name_size,
            )) * Affine::scale(badge / 24.0),
        )
        .into(),
    );
    children.push(
        TextNode::new(
            handle,
            Point::new(name_x, top + ctx.px(44.0)),
            meta_size,
            POST_MUTED,
        )
        .into(),
    );
    children.push(
        TextNode::new(
            "\u{1D54F}",
            Point::new(card.x1 - pad, top + ctx.px(30.0)),
            ctx.px(24.0),
            Rgba8::WHITE.with_alpha(0.8),
        )
        .anchor(TextAnchor::End)
        .into(),
    );

    let mut y = top + avatar + gap;
    for line in lines {
        children.push(
            TextNode::new(line, Point::new(x, y + body_size), body_size, POST_TEXT).into(),
        );
        y += body_line;
    }
    y += gap;
    children.push(
        TextNode::new(
            "10:00 AM \u{00B7} Jan 1, 2024",
            Point::new(x, y + meta_size),
            meta_size,
            POST_MUTED,
        )
        .into(),
    );
    y += meta_size * 1.2 + ctx.px(8.0);
    children.push(VisualNode::rect(
        Rect::new(x, y, card.x1 - pad, y + ctx.px(1.0).max(1.0)),
        Rgba8::rgb(0x2F, 0x33, 0x36),
    ));
    y += gap;

    let stats = [
        ("\u{1F4AC}", stat_field(props, "replies", "142")),
        ("\u{21C4}", stat_field(props, "retweets", "86")),
        ("\u{2661}", stat_field(props, "likes", "1.2K")),
        ("\u{1F4CA}", stat_field(props, "views", "45K")),
    ];
    let inner_w = w - 2.0 * pad;
    let stat_size = ctx.px(14.0);
    for (i, (icon, value)) in stats.into_iter().enumerate() {
        children.push(
            TextNode::new(
                format!("{icon} {value}"),
                Point::new(
                    x + inner_w * (i as f64 + 0.5) / 4.0,
                    y + stats_h / 2.0 + stat_size * 0.35,
                ),
                stat_size,
                POST_MUTED,
            )
            .centered()
            .into(),
        );
    }
    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/cards.rs"]
mod tests;
