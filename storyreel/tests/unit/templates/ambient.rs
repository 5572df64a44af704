use super::*;

const CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn shapes_are_stable_per_seed() {
    assert_eq!(FloatingShape::seeded(7, 3), FloatingShape::seeded(7, 3));
    assert_ne!(FloatingShape::seeded(7, 3), FloatingShape::seeded(8, 3));
    for i in 0..FLOATING_SHAPES {
        let s = FloatingShape::seeded(1, i);
        assert!((0.0..100.0).contains(&s.left_pct));
        assert!((20.0..60.0).contains(&s.size));
        assert!((0.2..0.7).contains(&s.speed));
    }
}

#[test]
fn shapes_wrap_vertically() {
    let shape = FloatingShape {
        left_pct: 10.0,
        top_pct: 50.0,
        size: 30.0,
        square: true,
        speed: 0.5,
    };
    assert_eq!(shape.y_at(0, 1000.0), 500.0);
    assert_eq!(shape.y_at(200, 1000.0), 600.0);
    assert_eq!(shape.y_at(1200, 1000.0), 100.0);
    assert_eq!(shape.y_at(-1200, 1000.0), 900.0);
    assert_eq!(shape.y_at(10, 0.0), 0.0);
}

#[test]
fn floating_geometry_is_deterministic() {
    let a = floating_geometry(42, CANVAS, 9);
    let b = floating_geometry(42, CANVAS, 9);
    assert_eq!(a, b);
    assert_ne!(a, floating_geometry(43, CANVAS, 9));
    let VisualNode::Group(root) = a else {
        panic!("group expected");
    };
    assert_eq!(root.children.len(), FLOATING_SHAPES as usize);
    assert_eq!(root.clip, Some(CANVAS.rect()));
}

#[test]
fn timecode_formats_elapsed_seconds() {
    assert_eq!(timecode(0, fps()), "00:00:00");
    assert_eq!(timecode(29, fps()), "00:00:00");
    assert_eq!(timecode(30, fps()), "00:00:01");
    assert_eq!(timecode(30 * 3725, fps()), "01:02:05");
    assert_eq!(timecode(-5, fps()), "00:00:00");
}

#[test]
fn hud_readout_and_meter() {
    let accent = Rgba8::rgb(0, 229, 255);
    let hud = cyber_hud(95, fps(), CANVAS, accent, 1);
    assert_eq!(hud.texts(), vec!["REC ● 00:00:03", "ISO 800", "F/2.8", "4K RAW"]);
    assert_eq!(hud, cyber_hud(95, fps(), CANVAS, accent, 1));
    assert_ne!(hud, cyber_hud(96, fps(), CANVAS, accent, 1));
}

#[test]
fn progress_fraction_edges() {
    assert_eq!(progress_fraction(0, 0), None);
    assert_eq!(progress_fraction(0, 1), Some(1.0));
    assert_eq!(progress_fraction(0, 11), Some(0.0));
    assert_eq!(progress_fraction(5, 11), Some(0.5));
    assert_eq!(progress_fraction(10, 11), Some(1.0));
    assert_eq!(progress_fraction(50, 11), Some(1.0));
    assert_eq!(progress_fraction(-3, 11), Some(0.0));
}

#[test]
fn progress_bar_fill_width() {
    let accent = Rgba8::rgb(255, 0, 0);
    let VisualNode::Group(g) = progress_bar(5, 11, CANVAS, accent) else {
        panic!("group expected");
    };
    assert_eq!(g.children.len(), 2);
    let VisualNode::Rect(fill) = &g.children[1] else {
        panic!("fill expected");
    };
    assert_eq!(fill.rect.width(), 960.0);
    assert_eq!(fill.fill, Some(accent));

    let VisualNode::Group(empty) = progress_bar(0, 0, CANVAS, accent) else {
        panic!("group expected");
    };
    assert_eq!(empty.children.len(), 1);
}
