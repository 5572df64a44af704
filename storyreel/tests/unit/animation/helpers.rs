use super::*;

#[test]
fn enter_spring_waits_for_delay() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(enter_spring(0, 0, fps), 0.0);
    assert_eq!(enter_spring(9, 10, fps), 0.0);
    assert!(enter_spring(20, 10, fps) > 0.0);
    assert!(enter_spring(60, 0, fps) > enter_spring(30, 0, fps));
}

#[test]
fn fade_envelope_shape() {
    assert_eq!(fade_in_out(0.0, 100.0, 10.0).unwrap(), 0.0);
    assert_eq!(fade_in_out(5.0, 100.0, 10.0).unwrap(), 0.5);
    assert_eq!(fade_in_out(50.0, 100.0, 10.0).unwrap(), 1.0);
    assert_eq!(fade_in_out(95.0, 100.0, 10.0).unwrap(), 0.5);
    assert_eq!(fade_in_out(120.0, 100.0, 10.0).unwrap(), 0.0);
}

#[test]
fn fade_envelope_rejects_overlapping_fades() {
    assert!(fade_in_out(0.0, 10.0, 5.0).is_err());
    assert!(fade_in_out(0.0, 10.0, 8.0).is_err());
}

#[test]
fn typed_prefix_reveals_whole_chars() {
    assert_eq!(typed_prefix("npm start", 0, 2.0), "");
    assert_eq!(typed_prefix("npm start", 5, 2.0), "np");
    assert_eq!(typed_prefix("npm start", 500, 2.0), "npm start");
    assert_eq!(typed_prefix("立即开始", 2, 1.0), "立即");
    assert_eq!(typed_prefix("abc", 1, 0.0), "abc");
}
