use rayon::prelude::*;

use crate::{
    compose::composer::Composer,
    composition::model::VideoConfig,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{StoryError, StoryResult},
    },
    render::{
        frame::FrameRGBA,
        raster::{FontSet, rasterize},
    },
};

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

impl RenderThreading {
    /// Parallel rendering on `threads` workers (rayon's default when `None`).
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            parallel: true,
            threads,
            ..Self::default()
        }
    }
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames rendered.
    pub frames_total: u64,
    /// Chunks the range was split into.
    pub chunks: u64,
}

/// Evaluate and rasterize `range`, returning frames in order.
pub fn render_frames(
    config: &VideoConfig,
    range: FrameRange,
    threading: &RenderThreading,
    fonts: &FontSet,
) -> StoryResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut sink = crate::encode::sink::InMemorySink::new();
    let stats = render_range_to_sink(config, range, threading, fonts, &mut sink)?;
    let frames = sink.frames().iter().map(|(_, f)| f.clone()).collect();
    Ok((frames, stats))
}

/// Evaluate and rasterize `range`, streaming frames into `sink` in timeline order.
///
/// An empty range (a zero-duration video included) is a no-op: the config is still validated
/// but the sink is never opened.
///
/// Parallel mode renders one chunk at a time on a dedicated pool, so memory stays bounded by
/// `chunk_size` frames regardless of range length.
#[tracing::instrument(skip(config, fonts, sink), fields(start = range.start.0, end = range.end.0))]
pub fn render_range_to_sink(
    config: &VideoConfig,
    range: FrameRange,
    threading: &RenderThreading,
    fonts: &FontSet,
    sink: &mut dyn FrameSink,
) -> StoryResult<RenderStats> {
    let composer = Composer::new(config)?;
    if range.is_empty() {
        tracing::debug!("empty range, nothing to render");
        return Ok(RenderStats::default());
    }
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    sink.begin(SinkConfig {
        width: config.width,
        height: config.height,
        fps: config.fps,
    })?;

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| StoryError::evaluation(format!("invalid chunk range: {e}")))?;

        let frames = match pool.as_ref() {
            Some(pool) => render_chunk_parallel(&composer, chunk, fonts, pool)?,
            None => render_chunk_sequential(&composer, chunk, fonts)?,
        };
        for (idx, frame) in chunk.iter().zip(&frames) {
            sink.push_frame(idx, frame)?;
        }

        stats.frames_total += chunk.len_frames();
        stats.chunks += 1;
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::debug!(frames = stats.frames_total, chunks = stats.chunks, "range rendered");
    Ok(stats)
}

fn render_one(composer: &Composer<'_>, idx: FrameIndex, fonts: &FontSet) -> StoryResult<FrameRGBA> {
    let frame = i64::try_from(idx.0)
        .map_err(|_| StoryError::validation(format!("frame {} is out of range", idx.0)))?;
    let tree = composer.render_frame(frame)?;
    rasterize(&tree, fonts)
}

fn render_chunk_sequential(
    composer: &Composer<'_>,
    range: FrameRange,
    fonts: &FontSet,
) -> StoryResult<Vec<FrameRGBA>> {
    range.iter().map(|idx| render_one(composer, idx, fonts)).collect()
}

fn render_chunk_parallel(
    composer: &Composer<'_>,
    range: FrameRange,
    fonts: &FontSet,
    pool: &rayon::ThreadPool,
) -> StoryResult<Vec<FrameRGBA>> {
    let indices: Vec<FrameIndex> = range.iter().collect();
    pool.install(|| {
        indices
            .par_iter()
            .map(|&idx| render_one(composer, idx, fonts))
            .collect()
    })
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> StoryResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StoryError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StoryError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
