use super::*;
use crate::foundation::core::Fps;

fn px(data: [u8; 4], premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: data.to_vec(),
        premultiplied,
    }
}

fn flat(frame: &FrameRGBA, bg: Rgba8) -> Vec<u8> {
    let mut dst = vec![0u8; frame.data.len()];
    flatten_over(&mut dst, frame, bg).unwrap();
    dst
}

#[test]
fn flatten_alpha_0_returns_background() {
    assert_eq!(flat(&px([0, 0, 0, 0], true), Rgba8::rgb(10, 20, 30)), vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let bg = Rgba8::rgb(10, 20, 30);
    assert_eq!(flat(&px([1, 2, 3, 255], true), bg), vec![1, 2, 3, 255]);
    assert_eq!(flat(&px([1, 2, 3, 255], false), bg), vec![1, 2, 3, 255]);
}

#[test]
fn flatten_half_alpha_mixes() {
    // 50% white premultiplied over black
    assert_eq!(flat(&px([128, 128, 128, 128], true), Rgba8::BLACK), vec![128, 128, 128, 255]);
}

#[test]
fn straight_frames_are_premultiplied_while_flattening() {
    assert_eq!(flat(&px([255, 0, 0, 128], false), Rgba8::BLACK), vec![128, 0, 0, 255]);
    assert_eq!(flat(&px([255, 0, 0, 128], false), Rgba8::WHITE), vec![255, 127, 127, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_over(&mut dst, &px([0; 4], true), Rgba8::BLACK).is_err());
}

#[test]
fn encoder_args_follow_overwrite_and_rational_fps() {
    let cfg = SinkConfig {
        width: 1920,
        height: 1080,
        fps: Fps::new(30000, 1001).unwrap(),
    };
    let mut opts = FfmpegSinkOpts::new("out/video.mp4");
    let args = encoder_args(&opts, cfg);
    assert_eq!(args[0], "-y");
    assert!(args.contains(&OsString::from("1920x1080")));
    assert!(args.contains(&OsString::from("30000/1001")));
    assert_eq!(args.last().unwrap(), "out/video.mp4");

    opts.overwrite = false;
    assert_eq!(encoder_args(&opts, cfg)[0], "-n");
}

#[test]
fn existing_output_is_kept_without_overwrite() {
    let out = std::env::temp_dir().join("storyreel_keep_existing.mp4");
    std::fs::write(&out, b"keep").unwrap();
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: false,
        ..FfmpegSinkOpts::new(&out)
    });
    let err = sink
        .begin(SinkConfig {
            width: 64,
            height: 36,
            fps: Fps::new(30, 1).unwrap(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&out).unwrap(), b"keep");
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("storyreel_odd.mp4"),
    ));
    let err = sink
        .begin(SinkConfig {
            width: 321,
            height: 240,
            fps: Fps::new(30, 1).unwrap(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("must be even"));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("out.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
