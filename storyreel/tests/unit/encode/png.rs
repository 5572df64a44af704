use super::*;
use crate::foundation::core::Fps;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn frame(width: u32) -> FrameRGBA {
    FrameRGBA {
        width,
        height: 1,
        data: vec![255; (width as usize) * 4],
        premultiplied: true,
    }
}

#[test]
fn names_are_zero_padded() {
    let sink = PngSequenceSink::with_prefix("out", "shot_");
    assert_eq!(
        sink.path_for(FrameIndex(42)),
        PathBuf::from("out").join("shot_000042.png")
    );
}

#[test]
fn writes_one_file_per_frame() {
    let dir = std::env::temp_dir().join(format!("storyreel_seq_{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(7), &frame(2)).unwrap();
    sink.push_frame(FrameIndex(8), &frame(2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_000007.png").is_file());
    assert!(dir.join("frame_000008.png").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_wrong_size_and_unstarted_pushes() {
    let dir = std::env::temp_dir().join(format!("storyreel_seq_bad_{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir);
    assert!(sink.push_frame(FrameIndex(0), &frame(2)).is_err());
    sink.begin(cfg()).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame(3)).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
