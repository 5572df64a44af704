use super::*;

#[test]
fn group_builders_compose() {
    let g = Group::new(vec![])
        .translated(10.0, 0.0)
        .translated(0.0, 5.0)
        .faded(0.5)
        .faded(0.5);
    assert_eq!(g.transform, Affine::translate(Vec2::new(10.0, 5.0)));
    assert_eq!(g.opacity, 0.25);
    assert!(!g.is_identity());
    assert!(Group::new(vec![]).is_identity());
}

#[test]
fn text_search_walks_nested_groups() {
    let tree = VisualNode::group(vec![
        VisualNode::rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::WHITE),
        VisualNode::group(vec![
            TextNode::new("Unknown Variant: Foo", Point::ZERO, 20.0, Rgba8::WHITE).into(),
        ]),
        TextNode::new("second", Point::ZERO, 20.0, Rgba8::WHITE).into(),
    ]);
    assert_eq!(tree.texts(), vec!["Unknown Variant: Foo", "second"]);
    assert!(tree.contains_text("Variant: Foo"));
    assert!(!tree.contains_text("Bar"));
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn code_text_preserves_whitespace() {
    let t = TextNode::new("  let x", Point::ZERO, 10.0, Rgba8::WHITE).code();
    assert_eq!(t.font, FontRole::Code);
    assert!(t.preserve_space);
}

#[test]
fn serializes_with_node_tag() {
    let v = serde_json::to_value(VisualNode::empty()).unwrap();
    assert_eq!(v["node"], "group");
    assert_eq!(v["opacity"], 1.0);
}
