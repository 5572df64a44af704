use super::*;

#[test]
fn centered_rect_is_centered() {
    let r = centered_rect(Point::new(100.0, 50.0), 40.0, 20.0);
    assert_eq!(r, Rect::new(80.0, 40.0, 120.0, 60.0));
}

#[test]
fn window_dots_step_by_diameter_and_gap() {
    let dots = window_dots(Point::new(10.0, 10.0), 14.0, 10.0);
    assert_eq!(dots.len(), 3);
    let VisualNode::Ellipse(last) = &dots[2] else {
        panic!("ellipse expected");
    };
    assert_eq!(last.center, Point::new(58.0, 10.0));
    assert_eq!(last.fill, Some(TRAFFIC_LIGHTS[2]));
}

#[test]
fn arc_flags_large_sweeps() {
    let quarter = arc_path(Point::ORIGIN, 10.0, 0.0, 90.0);
    assert!(quarter.starts_with("M 10.00 0.00 A 10.00 10.00 0 0 1"));
    let big = arc_path(Point::ORIGIN, 10.0, -90.0, 270.0);
    assert!(big.contains(" 0 1 1 "));
}
