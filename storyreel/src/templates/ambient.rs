//! Layers drawn on every frame regardless of the active scene. They read the global frame.

use crate::{
    animation::random::{element_rng, element_seed},
    dispatch::context::REFERENCE_HEIGHT,
    foundation::{
        color::Rgba8,
        core::{Canvas, Fps, Point, Rect},
    },
    templates::{approx_text_width, rotate_about},
    visual::node::{Group, Stroke, TextNode, VisualNode},
};

/// Number of drifting outlines behind the content.
pub const FLOATING_SHAPES: u64 = 15;
const HUD_BARS: u64 = 20;

/// Per-shape parameters, drawn once from the composition seed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FloatingShape {
    pub(crate) left_pct: f64,
    pub(crate) top_pct: f64,
    pub(crate) size: f64,
    pub(crate) square: bool,
    pub(crate) speed: f64,
}

impl FloatingShape {
    pub(crate) fn seeded(seed: u64, index: u64) -> Self {
        let mut rng = element_rng(seed, index);
        Self {
            left_pct: rng.range(0.0, 100.0),
            top_pct: rng.range(0.0, 100.0),
            size: rng.range(20.0, 60.0),
            square: rng.next_bool(),
            speed: rng.range(0.2, 0.7),
        }
    }

    /// Vertical position at `frame`, wrapping around the canvas height.
    pub(crate) fn y_at(&self, frame: i64, height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        (self.top_pct * height / 100.0 + frame as f64 * self.speed).rem_euclid(height)
    }
}

fn unit(canvas: Canvas) -> f64 {
    canvas.h() / REFERENCE_HEIGHT
}

/// Fifteen faint squares and circles drifting downward and spinning.
pub fn floating_geometry(frame: i64, canvas: Canvas, seed: u64) -> VisualNode {
    let u = unit(canvas);
    let stroke = Stroke::solid(Rgba8::WHITE.with_alpha(0.1), 2.0 * u);
    let fill = Rgba8::WHITE.with_alpha(0.02);

    let shapes = (0..FLOATING_SHAPES)
        .map(|i| {
            let shape = FloatingShape::seeded(seed, i);
            let size = shape.size * u;
            let x0 = shape.left_pct / 100.0 * canvas.w();
            let y0 = shape.y_at(frame, canvas.h());
            let rect = Rect::new(x0, y0, x0 + size, y0 + size);
            let node = if shape.square {
                VisualNode::outlined_rect(rect, 0.0, Some(fill), stroke)
            } else {
                VisualNode::outlined_circle(rect.center(), size / 2.0, Some(fill), stroke)
            };
            let rotation = frame as f64 * shape.speed * 2.0;
            Group::new(vec![node])
                .transformed(rotate_about(rect.center(), rotation))
                .into()
        })
        .collect();

    Group::new(shapes)
        .clipped(canvas.rect())
        .into()
}

/// `HH:MM:SS` for the elapsed time at `frame`.
pub(crate) fn timecode(frame: i64, fps: Fps) -> String {
    let secs = fps.whole_secs(frame);
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

/// Corner brackets, a camera readout, a sweeping scanline and a jittering level meter.
pub fn cyber_hud(frame: i64, fps: Fps, canvas: Canvas, accent: Rgba8, seed: u64) -> VisualNode {
    let u = unit(canvas);
    let (w, h) = (canvas.w(), canvas.h());
    let inset = 50.0 * u;
    let arm = 100.0 * u;
    let stroke = Stroke::solid(accent, 4.0 * u);

    let mut children = Vec::new();
    for (cx, cy, dx, dy) in [
        (inset, inset, 1.0, 1.0),
        (w - inset, inset, -1.0, 1.0),
        (inset, h - inset, 1.0, -1.0),
        (w - inset, h - inset, -1.0, -1.0),
    ] {
        let corner = Point::new(cx, cy);
        children.push(VisualNode::line(
            corner,
            Point::new(cx + dx * arm, cy),
            stroke,
        ));
        children.push(VisualNode::line(
            corner,
            Point::new(cx, cy + dy * arm),
            stroke,
        ));
    }

    let size = 16.0 * u;
    let gap = 20.0 * u;
    let labels = [
        format!("REC ● {}", timecode(frame, fps)),
        "ISO 800".to_owned(),
        "F/2.8".to_owned(),
        "4K RAW".to_owned(),
    ];
    let widths: Vec<f64> = labels.iter().map(|l| approx_text_width(l, size)).collect();
    let total = widths.iter().sum::<f64>() + gap * (labels.len() - 1) as f64;
    let mut x = w / 2.0 - total / 2.0;
    for (label, width) in labels.into_iter().zip(widths) {
        children.push(
            TextNode::new(label, Point::new(x, 60.0 * u + size), size, accent)
                .code()
                .into(),
        );
        x += width + gap;
    }

    if h > 0.0 {
        let y = (frame as f64 * 8.0).rem_euclid(h);
        children.push(VisualNode::rect(
            Rect::new(0.0, y, w, y + 2.0 * u),
            accent.with_alpha(0.5),
        ));
    }

    let frame_seed = element_seed(seed, frame as u64);
    let bar_h = 20.0 * u;
    let mut x = 200.0 * u;
    let bottom = h - 60.0 * u;
    let mut bars = Vec::with_capacity(HUD_BARS as usize);
    for i in 0..HUD_BARS {
        let bar_w = element_rng(frame_seed, i).range(2.0, 12.0) * u;
        bars.push(VisualNode::rect(
            Rect::new(x, bottom - bar_h, x + bar_w, bottom),
            accent,
        ));
        x += bar_w + 4.0 * u;
    }
    children.push(Group::new(bars).faded(0.6).into());

    VisualNode::group(children)
}

/// Completed fraction at `frame`; `None` when there is nothing to play.
pub(crate) fn progress_fraction(frame: i64, total: u64) -> Option<f64> {
    match total {
        0 => None,
        1 => Some(1.0),
        _ => Some((frame as f64 / (total - 1) as f64).clamp(0.0, 1.0)),
    }
}

/// Thin track along the bottom edge filled in proportion to playback.
pub fn progress_bar(frame: i64, total: u64, canvas: Canvas, color: Rgba8) -> VisualNode {
    let bar_h = 10.0;
    let (w, h) = (canvas.w(), canvas.h());
    let mut children = vec![VisualNode::rect(
        Rect::new(0.0, h - bar_h, w, h),
        Rgba8::WHITE.with_alpha(0.1),
    )];
    if let Some(progress) = progress_fraction(frame, total) {
        children.push(VisualNode::rect(
            Rect::new(0.0, h - bar_h, w * progress, h),
            color,
        ));
    }
    VisualNode::group(children)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/ambient.rs"]
mod tests;
