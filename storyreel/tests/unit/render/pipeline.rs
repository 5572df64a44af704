use super::*;
use crate::{
    composition::dsl::{VideoConfigBuilder, subtitle, title},
    effects::transitions::TransitionKind,
    encode::sink::InMemorySink,
    foundation::core::Fps,
};

fn small() -> VideoConfig {
    VideoConfigBuilder::new(64, 36, Fps::new(10, 1).unwrap())
        .scene_with("a", 4, TransitionKind::Wipe, title("A", None))
        .scene_with("b", 4, TransitionKind::Fade, subtitle("B"))
        .build()
        .unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn empty_range_renders_nothing() {
    let (frames, stats) =
        render_frames(&small(), range(2, 2), &RenderThreading::default(), &FontSet::empty())
            .unwrap();
    assert!(frames.is_empty());
    assert_eq!(stats, RenderStats::default());
}

#[test]
fn zero_duration_video_is_a_no_op() {
    let config = VideoConfig::new(64, 36, Fps::new(30, 1).unwrap());
    let total = crate::compose::composer::total_duration(&config);
    assert_eq!(total, 0);

    let mut sink = InMemorySink::new();
    let stats = render_range_to_sink(
        &config,
        range(0, total),
        &RenderThreading::parallel(Some(2)),
        &FontSet::empty(),
        &mut sink,
    )
    .unwrap();
    assert_eq!(stats.frames_total, 0);
    assert_eq!(stats.chunks, 0);
    assert!(sink.frames().is_empty());
    assert!(sink.config().is_none());
}

#[test]
fn empty_range_still_validates_config() {
    let mut config = small();
    config.scenes[1].duration_in_frames = 0;
    assert!(
        render_frames(&config, range(0, 0), &RenderThreading::default(), &FontSet::empty())
            .is_err()
    );
}

#[test]
fn zero_threads_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(Some(1)).is_ok());
}

#[test]
fn chunks_cover_the_range_in_order() {
    let threading = RenderThreading {
        chunk_size: 3,
        ..RenderThreading::default()
    };
    let mut sink = InMemorySink::new();
    let stats =
        render_range_to_sink(&small(), range(1, 8), &threading, &FontSet::empty(), &mut sink)
            .unwrap();

    assert_eq!(stats, RenderStats { frames_total: 7, chunks: 3 });
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(sink.is_finished());
    assert_eq!(sink.config().map(|c| (c.width, c.height)), Some((64, 36)));
}

#[test]
fn parallel_matches_sequential() {
    let config = small();
    let fonts = FontSet::empty();
    let (seq, _) = render_frames(&config, range(0, 8), &RenderThreading::default(), &fonts).unwrap();
    let par_threading = RenderThreading {
        chunk_size: 3,
        ..RenderThreading::parallel(Some(2))
    };
    let (par, stats) = render_frames(&config, range(0, 8), &par_threading, &fonts).unwrap();
    assert_eq!(stats.frames_total, 8);
    assert_eq!(seq, par);
}

#[test]
fn frames_past_the_end_still_render() {
    let (frames, _) = render_frames(
        &small(),
        range(8, 10),
        &RenderThreading::default(),
        &FontSet::empty(),
    )
    .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].data.len(), 64 * 36 * 4);
}
