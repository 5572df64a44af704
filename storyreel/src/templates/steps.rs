use crate::{
    composition::props::StepsProps,
    dispatch::context::TemplateCtx,
    foundation::{
        color::Rgba8,
        core::{Point, Rect},
        error::StoryResult,
    },
    templates::scale_about,
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

const IDLE_CIRCLE: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);
const IDLE_CONNECTOR: Rgba8 = Rgba8::rgb(0x44, 0x44, 0x44);
const DESCRIPTION: Rgba8 = Rgba8::rgb(0x88, 0x88, 0x88);

/// Display state of one step relative to the current index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StepState {
    pub(crate) active: bool,
    pub(crate) past: bool,
}

impl StepState {
    pub(crate) fn of(index: usize, current: Option<usize>) -> Self {
        Self {
            active: current.is_none_or(|c| c == index),
            past: current.is_some_and(|c| index < c),
        }
    }

    fn opacity(self) -> f64 {
        if self.active { 1.0 } else { 0.4 }
    }

    fn scale(self) -> f64 {
        if self.active { 1.1 } else { 1.0 }
    }
}

/// Horizontal row of numbered circles joined by connectors.
pub fn steps(ctx: &TemplateCtx<'_>, props: &StepsProps) -> StoryResult<VisualNode> {
    let area = ctx.content_box();
    let n = props.steps.len();
    if n == 0 {
        return Ok(VisualNode::empty());
    }
    let column_w = area.width() / n as f64;
    let top = area.y0 + ctx.px(200.0);
    let radius = ctx.px(60.0);

    let mut children = Vec::with_capacity(n);
    for (i, step) in props.steps.iter().enumerate() {
        let spr = ctx.enter(10 * i as u64);
        let state = StepState::of(i, props.current_step_index);
        let cx = area.x0 + column_w * (i as f64 + 0.5);
        let circle_center = Point::new(cx, top + radius);

        let mut parts = Vec::new();
        if i + 1 < n {
            let y = top + ctx.px(60.0);
            let color = if state.past {
                ctx.theme.accent
            } else {
                IDLE_CONNECTOR
            };
            parts.push(VisualNode::rect(
                Rect::new(cx, y, cx + column_w, y + ctx.px(6.0)),
                color,
            ));
        }

        let fill = if state.active || state.past {
            ctx.theme.accent
        } else {
            IDLE_CIRCLE
        };
        if state.active {
            parts.push(VisualNode::outlined_circle(
                circle_center,
                radius,
                Some(fill),
                Stroke::solid(Rgba8::WHITE, ctx.px(4.0)),
            ));
        } else {
            parts.push(VisualNode::circle(circle_center, radius, fill));
        }
        let number_size = ctx.px(60.0);
        parts.push(
            TextNode::new(
                (i + 1).to_string(),
                Point::new(cx, circle_center.y + number_size * 0.35),
                number_size,
                Rgba8::WHITE,
            )
            .weight(700)
            .centered()
            .into(),
        );

        let title_size = ctx.px(50.0);
        let title_y = top + 2.0 * radius + ctx.px(40.0) + title_size;
        parts.push(
            TextNode::new(
                step.title.clone(),
                Point::new(cx, title_y),
                title_size,
                ctx.theme.text,
            )
            .weight(700)
            .centered()
            .into(),
        );
        if let Some(description) = &step.description {
            let size = ctx.px(32.0);
            parts.push(
                TextNode::new(
                    description.clone(),
                    Point::new(cx, title_y + ctx.px(15.0) + size * 1.2),
                    size,
                    DESCRIPTION,
                )
                .centered()
                .into(),
            );
        }

        children.push(
            Group::new(parts)
                .transformed(scale_about(circle_center, spr * state.scale()))
                .faded(spr * state.opacity())
                .into(),
        );
    }

    Ok(VisualNode::group(children))
}

#[cfg(test)]
#[path = "../../tests/unit/templates/steps.rs"]
mod tests;
