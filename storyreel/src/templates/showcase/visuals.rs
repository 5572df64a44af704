use crate::{
    composition::props::ShowcaseProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::Point,
        error::StoryResult,
    },
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

const MESH_BG: Rgba8 = Rgba8::rgb(0x05, 0x05, 0x05);
const ORB_RINGS: u32 = 6;
/// Number of dots in the particle field.
pub const PARTICLES: u64 = 50;

/// Orb centers in canvas percent at `frame`.
pub(crate) fn orb_centers(frame: f64) -> [(f64, f64); 3] {
    let t = frame / 100.0;
    [
        (50.0 + 20.0 * t.sin(), 50.0 + 20.0 * (t * 0.8).cos()),
        (30.0 + 30.0 * (t * 1.2).cos(), 70.0 + 20.0 * (t * 0.9).sin()),
        (80.0 + 20.0 * (t * 0.5).sin(), 30.0 + 30.0 * (t * 1.1).cos()),
    ]
}

/// Soft disc built from stacked translucent circles, densest at the center.
fn orb(center: Point, radius: f64, color: Rgba8) -> VisualNode {
    let step = color.fade(1.0 / f64::from(ORB_RINGS));
    let rings = (1..=ORB_RINGS)
        .rev()
        .map(|k| VisualNode::circle(center, radius * f64::from(k) / f64::from(ORB_RINGS), step))
        .collect();
    VisualNode::group(rings)
}

/// Near-black backdrop with three drifting color glows.
pub fn gradient_mesh(ctx: &TemplateCtx<'_>, _props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let specs = [
        (0.60, Rgba8::rgba(0, 229, 255, 102)),
        (0.70, Rgba8::rgba(121, 40, 202, 102)),
        (0.50, Rgba8::rgba(255, 0, 128, 77)),
    ];
    let mut children = vec![VisualNode::rect(ctx.canvas.rect(), MESH_BG)];
    for ((x, y), (vw, color)) in orb_centers(ctx.frame()).into_iter().zip(specs) {
        // Gradient reaches transparent at 70 % of the half-width.
        let radius = w * vw / 2.0 * 0.7;
        children.push(orb(
            Point::new(x / 100.0 * w, y / 100.0 * h),
            radius,
            color,
        ));
    }
    Ok(Group::new(children).clipped(ctx.canvas.rect()).into())
}

/// Faint square grid, one cell per 100 reference pixels.
pub fn grid_pattern(ctx: &TemplateCtx<'_>, _props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let cell = ctx.px(100.0);
    let stroke = Stroke::solid(Rgba8::WHITE.with_alpha(0.05), ctx.px(1.0).max(1.0));
    let mut lines = Vec::new();
    if cell > 0.0 {
        let mut x = 0.0;
        while x <= w {
            lines.push(VisualNode::line(Point::new(x, 0.0), Point::new(x, h), stroke));
            x += cell;
        }
        let mut y = 0.0;
        while y <= h {
            lines.push(VisualNode::line(Point::new(0.0, y), Point::new(w, y), stroke));
            y += cell;
        }
    }
    Ok(VisualNode::group(lines))
}

/// Fifty seeded white specks.
pub fn particle_field(ctx: &TemplateCtx<'_>, _props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let dots = (0..PARTICLES)
        .map(|i| {
            let mut rng = ctx.rng(i);
            let x = rng.range(0.0, 100.0) / 100.0 * w;
            let y = rng.range(0.0, 100.0) / 100.0 * h;
            let size = ctx.px(rng.range(2.0, 8.0));
            let alpha = rng.range(0.0, 0.5);
            VisualNode::circle(
                Point::new(x + size / 2.0, y + size / 2.0),
                size / 2.0,
                Rgba8::WHITE.with_alpha(alpha),
            )
        })
        .collect();
    Ok(VisualNode::group(dots))
}

/// Wide-tracked uppercase title that slowly opens its letter spacing.
pub fn cinematic_text(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let opacity = ctx.ramp(0.0, 60.0, 0.0, 1.0)?;
    let spacing = ctx.ramp(0.0, 120.0, 0.0, 20.0)?;
    let c = ctx.content_box().center();
    let title_size = ctx.px(100.0);
    let sub_size = ctx.px(30.0);
    let has_sub = props.subtitle.is_some();
    let block = title_size * 1.2 + if has_sub { ctx.px(20.0) + sub_size * 1.2 } else { 0.0 };
    let top = c.y - block / 2.0;

    let mut children = vec![
        TextNode::new(
            props.title_or("TITLE").to_uppercase(),
            Point::new(c.x, top + title_size),
            title_size,
            Rgba8::WHITE,
        )
        .weight(300)
        .spacing(ctx.px(spacing))
        .centered()
        .into(),
    ];
    if let Some(sub) = &props.subtitle {
        children.push(
            TextNode::new(
                sub.to_uppercase(),
                Point::new(c.x, top + title_size * 1.2 + ctx.px(20.0) + sub_size),
                sub_size,
                Rgba8::rgb(0x88, 0x88, 0x88),
            )
            .spacing(ctx.px(5.0))
            .centered()
            .into(),
        );
    }
    Ok(Group::new(children).faded(opacity).into())
}

/// Heavy title condensing from scattered letters, circled by ten drifting sparks.
pub fn particle_text(ctx: &TemplateCtx<'_>, props: &ShowcaseProps) -> StoryResult<VisualNode> {
    let dispersion = ctx.ramp(0.0, 60.0, 20.0, 0.0)?;
    let opacity = ctx.ramp(0.0, 30.0, 0.0, 1.0)?;
    let area = ctx.content_box();
    let c = area.center();
    let size = ctx.px(200.0);
    let color = props.color.unwrap_or(ctx.theme.accent);

    let mut children = vec![
        Group::new(vec![
            TextNode::new(
                props.title_or("\u{4E2D}\u{6587}"),
                Point::new(c.x, c.y + size * 0.35),
                size,
                color,
            )
            .weight(900)
            .spacing(ctx.px(dispersion * 2.0))
            .centered()
            .into(),
        ])
        .faded(opacity)
        .into(),
    ];

    let f = ctx.frame();
    let spark = ctx.px(6.0);
    for i in 0..10 {
        let i = f64::from(i);
        let x = area.x0 + (50.0 + (f / 20.0 + i).sin() * 30.0) / 100.0 * area.width();
        let y = area.y0 + (50.0 + (f / 15.0 + i).cos() * 30.0) / 100.0 * area.height();
        children.push(VisualNode::circle(
            Point::new(x + spark / 2.0, y + spark / 2.0),
            spark / 2.0,
            color.fade(0.5),
        ));
    }
    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/visuals.rs"]
mod tests;
