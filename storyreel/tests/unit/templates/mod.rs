use super::*;

#[test]
fn wide_chars_count_double() {
    assert!((approx_text_width("ab", 10.0) - 11.2).abs() < 1e-9);
    assert_eq!(approx_text_width("中文", 10.0), 20.0);
    assert_eq!(approx_text_width("", 10.0), 0.0);
}

#[test]
fn scale_about_keeps_center_fixed() {
    let c = Point::new(100.0, 50.0);
    assert_eq!(scale_about(c, 0.5) * c, c);
    assert_eq!(scale_about(c, 2.0) * Point::new(110.0, 50.0), Point::new(120.0, 50.0));
    let r = rotate_about(c, 90.0) * c;
    assert!((r - c).hypot() < 1e-9);
}

#[test]
fn wraps_on_word_boundaries() {
    // 10 chars at size 10 is 56 wide
    assert_eq!(wrap_lines("aaaa bbbb cccc", 10.0, 56.0), vec!["aaaa bbbb", "cccc"]);
    assert_eq!(wrap_lines("one\ntwo", 10.0, 1000.0), vec!["one", "two"]);
    assert_eq!(wrap_lines("averyveryverylongword x", 10.0, 20.0), vec!["averyveryverylongword", "x"]);
    assert_eq!(wrap_lines("", 10.0, 20.0), Vec::<String>::new());
}
