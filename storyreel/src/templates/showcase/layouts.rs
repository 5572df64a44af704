use crate::{
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Affine, Point, Rect},
        error::StoryResult,
    },
    templates::{
        rotate_about, scale_about,
        showcase::{cards, widgets},
        wrap_lines,
    },
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

const TILE_BG: Rgba8 = Rgba8::rgb(0x1A, 0x1A, 0x1A);
const MASONRY_COLUMNS: usize = 4;
const MASONRY_PLACEHOLDERS: usize = 40;
const MASONRY_REPEATS: usize = 3;

/// Bento tiles in reference pixels: top-left spans two columns, bottom-left spans two columns,
/// the right column is one tall tile.
pub(crate) fn bento_tiles(origin: Point, unit: f64) -> [Rect; 3] {
    let gap = 30.0 * unit;
    let col_w = (1400.0 * unit - 2.0 * gap) / 3.0;
    let row_h = (800.0 * unit - gap) / 2.0;
    let (x0, y0) = (origin.x, origin.y);
    let wide = 2.0 * col_w + gap;
    [
        Rect::new(x0, y0, x0 + wide, y0 + row_h),
        Rect::new(x0, y0 + row_h + gap, x0 + wide, y0 + 2.0 * row_h + gap),
        Rect::new(x0 + wide + gap, y0, x0 + wide + gap + col_w, y0 + 2.0 * row_h + gap),
    ]
}

/// Moves a node laid out around the content center into `tile`, shrinking it to fit a
/// `nominal` reference-pixel footprint.
fn fit_into(ctx: &TemplateCtx<'_>, node: VisualNode, tile: Rect, nominal: (f64, f64)) -> VisualNode {
    let pad = ctx.px(20.0);
    let scale = ((tile.width() - 2.0 * pad) / ctx.px(nominal.0))
        .min((tile.height() - 2.0 * pad) / ctx.px(nominal.1))
        .clamp(0.0, 1.0);
    let from = ctx.content_box().center();
    Group::new(vec![node])
        .transformed(scale_about(from, scale))
        .transformed(Affine::translate(tile.center() - from))
        .clipped(tile)
        .into()
}

/// Three-tile dashboard: a metric, a neon card in `color` and a full progress ring.
pub fn bento_grid(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let grid_w = ctx.px(1400.0);
    let grid_h = ctx.px(800.0);
    let c = ctx.content_box().center();
    let tiles = bento_tiles(Point::new(c.x - grid_w / 2.0, c.y - grid_h / 2.0), ctx.unit());

    let mut metric = ShowcaseProps::new("MetricCard");
    metric.title = Some("Components".to_owned());
    metric.subtitle = Some("30+".to_owned());
    let mut neon = ShowcaseProps::new("NeonCard");
    neon.title = Some("4K".to_owned());
    neon.color = props.color;

    let contents = [
        (cards::metric_card(ctx, &metric)?, (300.0, 254.0)),
        (cards::neon_card(ctx, &neon)?, (800.0, 500.0)),
        (
            widgets::progress_ring(ctx, c, 100.0, ctx.theme.accent),
            (200.0, 200.0),
        ),
    ];

    let mut children = Vec::with_capacity(2 * tiles.len());
    for (tile, (node, nominal)) in tiles.into_iter().zip(contents) {
        children.push(VisualNode::rounded_rect(tile, ctx.px(24.0), TILE_BG));
        children.push(fit_into(ctx, node, tile, nominal));
    }
    Ok(VisualNode::group(children))
}

/// One masonry card.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MasonryItem {
    /// Authored text or image reference.
    Content(String),
    /// Generated filler block.
    Placeholder {
        /// Height in reference pixels.
        height: f64,
        /// Fill.
        color: Rgba8,
        /// Caption.
        label: String,
    },
}

impl MasonryItem {
    fn height(&self) -> f64 {
        match self {
            Self::Content(_) => 450.0,
            Self::Placeholder { height, .. } => *height,
        }
    }
}

/// String items as cards, or forty generated blocks when there are none.
pub(crate) fn masonry_items(props: &ShowcaseProps) -> Vec<MasonryItem> {
    let items: Vec<MasonryItem> = props
        .items
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| MasonryItem::Content(s.to_owned()))
        .collect();
    if !items.is_empty() {
        return items;
    }
    (0..MASONRY_PLACEHOLDERS)
        .map(|i| MasonryItem::Placeholder {
            height: 300.0 + ((i * 137) % 300) as f64,
            color: Rgba8::from_hsl(((i * 47) % 360) as f64, 0.6, 0.2),
            label: format!("Item {}", i + 1),
        })
        .collect()
}

/// Upward scroll speed of `column` in reference pixels per frame; the third column is fastest.
pub(crate) fn masonry_column_speed(column: usize) -> f64 {
    let stagger = if column % 2 == 0 { 0.5 } else { -0.5 };
    let boost = if column == 2 { 1.0 } else { 0.0 };
    3.0 + stagger + boost
}

fn masonry_card(ctx: &TemplateCtx<'_>, item: &MasonryItem, rect: Rect) -> VisualNode {
    let fill = match item {
        MasonryItem::Content(_) => Rgba8::rgb(0x22, 0x22, 0x22),
        MasonryItem::Placeholder { color, .. } => *color,
    };
    let mut parts = vec![VisualNode::outlined_rect(
        rect,
        ctx.px(20.0),
        Some(fill),
        Stroke::solid(Rgba8::WHITE.with_alpha(0.1), ctx.px(1.0).max(1.0)),
    )];

    let size = ctx.px(40.0);
    let caption = match item {
        MasonryItem::Content(s) if s.starts_with("http") || s.starts_with("data") => {
            vec!["\u{1F5BC}".to_owned()]
        }
        MasonryItem::Content(s) => wrap_lines(s, size, rect.width() - 2.0 * ctx.px(20.0)),
        MasonryItem::Placeholder { label, .. } => vec![label.clone()],
    };
    let line_h = size * 1.2;
    let top = rect.center().y - line_h * caption.len() as f64 / 2.0;
    for (i, line) in caption.into_iter().enumerate() {
        parts.push(
            TextNode::new(
                line,
                Point::new(rect.center().x, top + line_h * i as f64 + size),
                size,
                Rgba8::WHITE.with_alpha(0.7),
            )
            .weight(700)
            .centered()
            .into(),
        );
    }
    VisualNode::group(parts)
}

/// Tilted wall of cards in four columns scrolling upward at different speeds.
pub fn masonry_waterfall(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let items = masonry_items(props);
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let wall = Rect::new(-0.1 * w, -0.1 * h, 1.1 * w, 1.1 * h);
    let side = ctx.px(40.0);
    let gap = ctx.px(30.0);
    let n = MASONRY_COLUMNS as f64;
    let col_w = ((wall.width() - 2.0 * side - (n - 1.0) * gap) / n).max(0.0);
    let (visible_top, visible_bottom) = (-0.25 * h, 1.25 * h);

    let mut columns = Vec::with_capacity(MASONRY_COLUMNS);
    for column in 0..MASONRY_COLUMNS {
        let x0 = wall.x0 + side + column as f64 * (col_w + gap);
        let mut y = wall.y0 - ctx.px(ctx.frame() * masonry_column_speed(column));
        let mut cards = Vec::new();
        let stack = items.iter().skip(column).step_by(MASONRY_COLUMNS);
        for item in (0..MASONRY_REPEATS).flat_map(|_| stack.clone()) {
            let card_h = ctx.px(item.height());
            let rect = Rect::new(x0, y, x0 + col_w, y + card_h);
            if rect.y1 >= visible_top && rect.y0 <= visible_bottom {
                cards.push(masonry_card(ctx, item, rect));
            }
            y += card_h + gap;
        }
        columns.push(VisualNode::group(cards));
    }

    Ok(Group::new(columns)
        .transformed(rotate_about(ctx.canvas.center(), -3.0))
        .faded(0.9)
        .clipped(ctx.canvas.rect())
        .into())
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/layouts.rs"]
mod tests;
