use crate::{
    composition::props::{ChartProps, ChartType},
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Point, Rect},
        error::StoryResult,
    },
    visual::node::{Group, PolylineNode, RectNode, Stroke, TextAnchor, TextNode, VisualNode},
};

const VALUE_LABEL: Rgba8 = Rgba8::rgb(0xAA, 0xAA, 0xAA);
const AXIS_LABEL: Rgba8 = Rgba8::rgb(0x88, 0x88, 0x88);
const BASELINE: Rgba8 = Rgba8::rgb(0x44, 0x44, 0x44);

/// Bar height for `value` against the series maximum; zero when nothing is positive.
pub(crate) fn bar_height(value: f64, max: f64, full: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0) * full
}

/// Bar or line chart whose values grow from the baseline, one every 5 frames.
pub fn chart(ctx: &TemplateCtx<'_>, props: &ChartProps) -> StoryResult<VisualNode> {
    let area = ctx.content_box();
    let full = ctx.px(800.0);
    let bar_w = ctx.px(120.0);
    let gap = ctx.px(40.0);

    let title_size = ctx.px(80.0);
    let title_block = if props.title.is_some() {
        title_size * 1.2 + ctx.px(60.0)
    } else {
        0.0
    };
    let label_block = ctx.px(36.0) * 1.2 + ctx.px(10.0);
    let x_label_block = ctx.px(20.0) + ctx.px(30.0) * 1.2;
    let stack_h = title_block + label_block + full + x_label_block;
    let top = area.center().y - stack_h / 2.0;
    let baseline = top + title_block + label_block + full;

    let n = props.data.len() as f64;
    let plot_w = if n > 0.0 { n * bar_w + (n - 1.0) * gap } else { 0.0 };
    let plot_x0 = area.center().x - plot_w / 2.0;

    let mut children = Vec::new();
    if let Some(title) = &props.title {
        children.push(
            TextNode::new(
                title.clone(),
                Point::new(area.center().x, top + title_size),
                title_size,
                ctx.theme.text,
            )
            .weight(700)
            .centered()
            .into(),
        );
    }
    if let Some(label) = &props.y_axis_label {
        let size = ctx.px(30.0);
        children.push(
            TextNode::new(
                label.clone(),
                Point::new(plot_x0 - ctx.px(100.0), baseline - full + size),
                size,
                AXIS_LABEL,
            )
            .into(),
        );
    }

    let max = props
        .data
        .iter()
        .map(|d| d.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut line_points = Vec::with_capacity(props.data.len());
    for (i, datum) in props.data.iter().enumerate() {
        let spr = ctx.enter(5 * i as u64);
        let h = bar_height(datum.value, max, full) * spr;
        let x0 = plot_x0 + i as f64 * (bar_w + gap);
        let cx = x0 + bar_w / 2.0;
        let color = datum.color.unwrap_or(ctx.theme.accent);

        let mark = match props.chart_type {
            ChartType::Bar => VisualNode::Rect(RectNode {
                rect: Rect::new(x0, baseline - h, x0 + bar_w, baseline),
                radius: ctx.px(8.0).min(h / 2.0),
                fill: Some(color),
                stroke: None,
            }),
            ChartType::Line => {
                line_points.push(Point::new(cx, baseline - h));
                VisualNode::circle(Point::new(cx, baseline - h), ctx.px(12.0), color)
            }
        };
        children.push(mark);

        let labels = vec![
            TextNode::new(
                datum.value.to_string(),
                Point::new(cx, baseline - h - ctx.px(10.0) - ctx.px(6.0)),
                ctx.px(36.0),
                VALUE_LABEL,
            )
            .centered()
            .into(),
            TextNode::new(
                datum.label.clone(),
                Point::new(cx, baseline + ctx.px(20.0) + ctx.px(30.0)),
                ctx.px(30.0),
                ctx.theme.text,
            )
            .anchor(TextAnchor::Middle)
            .into(),
        ];
        children.push(Group::new(labels).faded(spr).into());
    }
    if line_points.len() >= 2 {
        children.insert(
            children.len() - 2 * line_points.len(),
            VisualNode::Polyline(PolylineNode {
                points: line_points,
                stroke: Stroke::solid(ctx.theme.accent, ctx.px(6.0)),
            }),
        );
    }

    let base_w = area.width() * 0.8;
    children.push(VisualNode::rect(
        Rect::new(
            area.center().x - base_w / 2.0,
            baseline,
            area.center().x + base_w / 2.0,
            baseline + ctx.px(2.0).max(1.0),
        ),
        BASELINE,
    ));

    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/chart.rs"]
mod tests;
