//! storyreel turns a declarative list of scenes into deterministic animated frames.
//!
//! A [`VideoConfig`] (loaded from JSON or assembled with [`VideoConfigBuilder`]) lists scenes in
//! playback order. Every output frame is a pure function of the config and the frame number.
//!
//! # Pipeline overview
//!
//! 1. **Timeline**: scenes are laid end to end; each owns `[start, start + duration)`.
//! 2. **Compose**: [`Composer::render_frame`] mounts the scene covering the frame, wraps it in its
//!    entry transition and dispatches its props to a template, producing a [`FrameTree`] with
//!    ambient layers (floating geometry, HUD, progress bar) around it.
//! 3. **Render**: [`FrameTree::to_svg`] and [`rasterize`] turn the tree into premultiplied RGBA8
//!    pixels through `usvg`/`resvg`.
//! 4. **Encode** (optional): [`render_range_to_sink`] streams frames into a [`FrameSink`]
//!    such as a PNG sequence or the system `ffmpeg` binary.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: no wall clock, no global random state; decorative randomness is seeded
//!   per element from [`VideoConfig::seed`].
//! - **Forgiving at frame time**: out-of-range frames and unknown Showcase variants render
//!   something sensible instead of failing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod composition;
mod dispatch;
mod effects;
mod encode;
mod foundation;
mod render;
mod templates;
mod timeline;
mod visual;

/// Scene prop builders for use with [`VideoConfigBuilder`].
pub mod scenes {
    pub use crate::composition::dsl::{
        bar_chart, bullets, code, showcase, steps, subtitle, title,
    };
}

pub use animation::ease::Ease;
pub use animation::helpers::{enter_spring, fade_in_out, typed_prefix};
pub use animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
pub use animation::random::{Rng64, element_rng, element_seed};
pub use animation::spring::{SpringConfig, delayed_spring, spring};
pub use compose::composer::{Composer, render_frame, total_duration};
pub use composition::dsl::VideoConfigBuilder;
pub use composition::model::{SceneDescriptor, SceneKind, SceneProps, Theme, VideoConfig};
pub use composition::props::{
    BulletItem, BulletsProps, ChartDatum, ChartProps, ChartType, CodeProps, DiagramEdge,
    DiagramNode, DiagramProps, NodeShape, ShowcaseProps, StepItem, StepsProps, SubtitleProps,
    TitleLayout, TitleProps,
};
pub use dispatch::content::{render_scene_content, unknown_variant_placeholder};
pub use dispatch::context::{LAYOUT_PADDING, REFERENCE_HEIGHT, TemplateCtx};
pub use dispatch::registry::{ShowcaseEntry, ShowcaseLayout, ShowcaseRegistry, ShowcaseRenderFn};
pub use effects::transitions::{
    TRANSITION_WINDOW_FRAMES, TransitionKind, TransitionPhase, TransitionStyle,
    resolve_transition, transition_phase,
};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::png::PngSequenceSink;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig, ensure_dir};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2};
pub use foundation::error::{StoryError, StoryResult};
pub use render::frame::FrameRGBA;
pub use render::pipeline::{RenderStats, RenderThreading, render_frames, render_range_to_sink};
pub use render::raster::{FontSet, rasterize};
pub use timeline::builder::{Timeline, TimelineEntry};
pub use timeline::gate::{SceneMount, mount};
pub use visual::frame::{ActiveScene, FrameTree};
pub use visual::node::{
    EllipseNode, FontRole, Group, LineNode, PathNode, PolylineNode, RectNode, Stroke, TextAnchor,
    TextNode, VisualNode,
};
