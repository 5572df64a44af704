use super::*;
use crate::{
    foundation::core::{Canvas, Point},
    visual::frame::ActiveScene,
};

fn tree(layers: Vec<VisualNode>) -> FrameTree {
    FrameTree {
        frame: 0,
        canvas: Canvas {
            width: 200,
            height: 100,
        },
        background: Rgba8::rgb(5, 5, 5),
        font_family: "Inter, \"Noto Sans SC\", sans-serif".to_owned(),
        code_font_family: "monospace".to_owned(),
        active_scene: None::<ActiveScene>,
        layers,
    }
}

#[test]
fn numbers_are_short_and_stable() {
    assert_eq!(num(0.0), "0");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(12.0), "12");
    assert_eq!(num(1.5), "1.5");
    assert_eq!(num(1.0 / 3.0), "0.333");
    assert_eq!(num(-2.25), "-2.25");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn escapes_markup_and_drops_controls() {
    assert_eq!(escape(r#"a<b>&"c"'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;");
    assert_eq!(escape("x\u{7}y"), "xy");
}

#[test]
fn document_starts_with_canvas_and_background() {
    let svg = tree(Vec::new()).to_svg();
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">"#
    ));
    assert!(svg.contains(r##"<rect width="200" height="100" fill="#050505"/>"##));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn clip_wraps_transform() {
    let group = Group::new(vec![VisualNode::rect(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rgba8::WHITE,
    )])
    .translated(5.0, 0.0)
    .clipped(Rect::new(0.0, 0.0, 50.0, 100.0));
    let svg = tree(vec![group.into()]).to_svg();

    let clip = svg.find(r#"<g clip-path="url(#clip0)">"#).unwrap();
    let transform = svg.find(r#"<g transform="matrix(1 0 0 1 5 0)">"#).unwrap();
    assert!(clip < transform);
    assert!(svg.contains(r#"<clipPath id="clip0"><rect x="0" y="0" width="50" height="100"/></clipPath>"#));
    assert_eq!(svg.matches("</g>").count(), 2);
}

#[test]
fn invisible_groups_are_skipped() {
    let hidden = Group::new(vec![VisualNode::circle(Point::new(1.0, 1.0), 1.0, Rgba8::WHITE)])
        .faded(0.0);
    let svg = tree(vec![hidden.into(), VisualNode::empty()]).to_svg();
    assert!(!svg.contains("<ellipse"));
    assert!(!svg.contains("<g"));
}

#[test]
fn text_carries_font_role_and_escaping() {
    let body = TextNode::new("A & B", Point::new(10.0, 20.0), 16.0, Rgba8::WHITE).centered();
    let code = TextNode::new("  let x = 1;", Point::new(0.0, 40.0), 12.0, Rgba8::WHITE).code();
    let svg = tree(vec![body.into(), code.into()]).to_svg();

    assert!(svg.contains(r#"font-family="Inter, &quot;Noto Sans SC&quot;, sans-serif""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(">A &amp; B</text>"));
    assert!(svg.contains(r#"font-family="monospace" font-size="12" font-weight="400" xml:space="preserve""#));
    assert!(svg.contains(">  let x = 1;</text>"));
}

#[test]
fn translucent_paint_splits_opacity() {
    let node = VisualNode::outlined_rect(
        Rect::new(0.0, 0.0, 4.0, 4.0),
        2.0,
        None,
        Stroke::dashed(Rgba8::rgba(255, 0, 0, 128), 2.0, 10.0, 5.0),
    );
    let svg = tree(vec![node]).to_svg();
    assert!(svg.contains(r#"rx="2" fill="none""#));
    assert!(svg.contains(r##"stroke="#ff0000" stroke-opacity="0.502""##));
    assert!(svg.contains(r#"stroke-dasharray="10 5""#));
}

#[test]
fn equal_trees_serialize_identically() {
    let a = tree(vec![VisualNode::line(
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Stroke::solid(Rgba8::WHITE, 1.0),
    )]);
    assert_eq!(a.to_svg(), a.clone().to_svg());
}
