use super::*;
use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Rect},
    },
    visual::node::{Group, VisualNode},
};

fn tree(layers: Vec<VisualNode>) -> FrameTree {
    FrameTree {
        frame: 3,
        canvas: Canvas {
            width: 40,
            height: 20,
        },
        background: Rgba8::rgb(0, 0, 255),
        font_family: "sans-serif".to_owned(),
        code_font_family: "monospace".to_owned(),
        active_scene: None,
        layers,
    }
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    frame.pixel(x, y).unwrap()
}

#[test]
fn background_fills_the_canvas() {
    let out = rasterize(&tree(Vec::new()), &FontSet::empty()).unwrap();
    assert_eq!((out.width, out.height), (40, 20));
    assert!(out.premultiplied);
    assert_eq!(out.data.len(), 40 * 20 * 4);
    assert_eq!(px(&out, 0, 0), [0, 0, 255, 255]);
    assert_eq!(px(&out, 39, 19), [0, 0, 255, 255]);
}

#[test]
fn clip_hides_the_right_side() {
    let wiped = Group::new(vec![VisualNode::rect(
        Rect::new(0.0, 0.0, 40.0, 20.0),
        Rgba8::rgb(255, 0, 0),
    )])
    .clipped(Rect::new(0.0, 0.0, 20.0, 20.0));
    let out = rasterize(&tree(vec![wiped.into()]), &FontSet::empty()).unwrap();
    assert_eq!(px(&out, 5, 10), [255, 0, 0, 255]);
    assert_eq!(px(&out, 35, 10), [0, 0, 255, 255]);
}

#[test]
fn group_opacity_blends_with_background() {
    let half = Group::new(vec![VisualNode::rect(
        Rect::new(0.0, 0.0, 40.0, 20.0),
        Rgba8::rgb(255, 0, 0),
    )])
    .faded(0.5);
    let out = rasterize(&tree(vec![half.into()]), &FontSet::empty()).unwrap();
    let [r, g, b, a] = px(&out, 20, 10);
    assert_eq!((g, a), (0, 255));
    assert!((120..=135).contains(&r), "r = {r}");
    assert!((120..=135).contains(&b), "b = {b}");
}

#[test]
fn empty_font_set_still_renders_text_frames() {
    let text = crate::visual::node::TextNode::new(
        "hello",
        crate::foundation::core::Point::new(2.0, 15.0),
        12.0,
        Rgba8::WHITE,
    );
    let out = rasterize(&tree(vec![text.into()]), &FontSet::empty()).unwrap();
    assert_eq!(FontSet::empty().face_count(), 0);
    assert_eq!(px(&out, 0, 0), [0, 0, 255, 255]);
}
