//! Showcase catalog: self-contained cards, devices, widgets, layouts and full-screen visuals.
//!
//! Every renderer has the [`ShowcaseRenderFn`](crate::ShowcaseRenderFn) shape and is reached
//! through the registry, never called by name from the composition root.

use crate::foundation::{
    color::Rgba8,
    core::{Point, Rect},
};
use crate::visual::node::VisualNode;

pub(crate) mod cards;
pub(crate) mod devices;
pub(crate) mod layouts;
pub(crate) mod visuals;
pub(crate) mod widgets;

pub(crate) const TRAFFIC_LIGHTS: [Rgba8; 3] = [
    Rgba8::rgb(0xFF, 0x5F, 0x56),
    Rgba8::rgb(0xFF, 0xBD, 0x2E),
    Rgba8::rgb(0x27, 0xC9, 0x3F),
];

/// `w` x `h` rectangle centered on `center`.
pub(crate) fn centered_rect(center: Point, w: f64, h: f64) -> Rect {
    Rect::new(
        center.x - w / 2.0,
        center.y - h / 2.0,
        center.x + w / 2.0,
        center.y + h / 2.0,
    )
}

/// Three window-control dots of diameter `d`, the first centered at `first`.
pub(crate) fn window_dots(first: Point, d: f64, gap: f64) -> Vec<VisualNode> {
    TRAFFIC_LIGHTS
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            VisualNode::circle(
                Point::new(first.x + i as f64 * (d + gap), first.y),
                d / 2.0,
                color,
            )
        })
        .collect()
}

/// Clockwise circular arc as SVG path data. Angles in degrees, 0 pointing right.
pub(crate) fn arc_path(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> String {
    let sweep = sweep_deg.clamp(0.0, 359.99);
    let point = |deg: f64| {
        let rad = deg.to_radians();
        Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
    };
    let a = point(start_deg);
    let b = point(start_deg + sweep);
    let large = u8::from(sweep > 180.0);
    format!(
        "M {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large} 1 {:.2} {:.2}",
        a.x, a.y, b.x, b.y
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/templates/showcase/mod.rs"]
mod tests;
