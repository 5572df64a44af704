use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: (data.len() / 4) as u32,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn unpremultiplies_partial_alpha() {
    let f = frame(vec![64, 32, 0, 128, 10, 20, 30, 255, 0, 0, 0, 0], true);
    let s = f.to_straight();
    assert!(!s.premultiplied);
    assert_eq!(s.pixel(0, 0), Some([128, 64, 0, 128]));
    assert_eq!(s.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(s.pixel(2, 0), Some([0, 0, 0, 0]));
}

#[test]
fn straight_frames_pass_through() {
    let f = frame(vec![200, 100, 50, 10], false);
    assert_eq!(f.to_straight(), f);
}

#[test]
fn pixel_is_bounds_checked() {
    let f = frame(vec![1, 2, 3, 4], true);
    assert_eq!(f.pixel(1, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn png_round_trips_through_image() {
    let dir = std::env::temp_dir().join(format!("storyreel_png_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("one.png");
    frame(vec![255, 0, 0, 255, 0, 0, 0, 0], true)
        .save_png(&path)
        .unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mismatched_buffer_is_an_encode_error() {
    let f = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 3],
        premultiplied: true,
    };
    let err = f.save_png(std::env::temp_dir().join("storyreel_never.png")).unwrap_err();
    assert!(matches!(err, StoryError::Encode(_)));
}
