use crate::{
    composition::{model::SceneProps, props::ShowcaseProps},
    dispatch::{
        context::TemplateCtx,
        registry::{ShowcaseLayout, ShowcaseRegistry, ShowcaseRenderFn},
    },
    foundation::{color::Rgba8, core::Point, error::StoryResult},
    templates::{
        approx_text_width, basic, bullets, chart, code, diagram,
        showcase::{centered_rect, visuals},
        steps,
    },
    visual::node::{Stroke, TextNode, VisualNode},
};

/// Backdrop drawn under a Showcase variant, if any.
pub(crate) fn backdrop_for(
    props: &ShowcaseProps,
    layout: ShowcaseLayout,
) -> Option<ShowcaseRenderFn> {
    match props.variant.as_str() {
        "CinematicText" => Some(visuals::gradient_mesh),
        "ParticleText" => Some(visuals::particle_field),
        _ if props.background && layout == ShowcaseLayout::Contained => {
            Some(visuals::gradient_mesh)
        }
        _ => None,
    }
}

/// Visible stand-in for a variant tag nobody registered.
pub fn unknown_variant_placeholder(ctx: &TemplateCtx<'_>, variant: &str) -> VisualNode {
    let c = ctx.content_box().center();
    let size = ctx.px(48.0);
    let label = format!("Unknown Variant: {variant}");
    let w = (approx_text_width(&label, size) + ctx.px(120.0))
        .min(ctx.content_box().width());
    VisualNode::group(vec![
        VisualNode::outlined_rect(
            centered_rect(c, w, ctx.px(160.0)),
            ctx.px(16.0),
            Some(Rgba8::rgb(0xF8, 0x51, 0x49).with_alpha(0.12)),
            Stroke::dashed(Rgba8::rgb(0xF8, 0x51, 0x49), ctx.px(4.0), ctx.px(16.0), ctx.px(10.0)),
        ),
        TextNode::new(label, Point::new(c.x, c.y + size * 0.35), size, Rgba8::WHITE)
            .centered()
            .into(),
    ])
}

fn showcase(
    ctx: &TemplateCtx<'_>,
    props: &ShowcaseProps,
    registry: &ShowcaseRegistry,
) -> StoryResult<VisualNode> {
    let Some(entry) = registry.get(&props.variant) else {
        tracing::warn!(variant = %props.variant, "unknown showcase variant");
        return Ok(unknown_variant_placeholder(ctx, &props.variant));
    };
    let body = (entry.render)(ctx, props)?;
    match backdrop_for(props, entry.layout) {
        Some(backdrop) => Ok(VisualNode::group(vec![backdrop(ctx, props)?, body])),
        None => Ok(body),
    }
}

/// Renders the content of one scene at `ctx.local_frame`.
///
/// Showcase tags resolve through `registry`; tags it does not know render
/// [`unknown_variant_placeholder`] rather than failing.
pub fn render_scene_content(
    ctx: &TemplateCtx<'_>,
    props: &SceneProps,
    registry: &ShowcaseRegistry,
) -> StoryResult<VisualNode> {
    match props {
        SceneProps::Title(p) => basic::title(ctx, p),
        SceneProps::Subtitle(p) => basic::subtitle(ctx, p),
        SceneProps::Code(p) => code::code(ctx, p),
        SceneProps::Bullets(p) => bullets::bullets(ctx, p),
        SceneProps::Steps(p) => steps::steps(ctx, p),
        SceneProps::Diagram(p) => diagram::diagram(ctx, p),
        SceneProps::Chart(p) => chart::chart(ctx, p),
        SceneProps::Showcase(p) => showcase(ctx, p, registry),
        SceneProps::Custom(_) => Ok(VisualNode::empty()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/content.rs"]
mod tests;
