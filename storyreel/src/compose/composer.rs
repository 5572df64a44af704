use crate::{
    composition::model::{Theme, VideoConfig},
    dispatch::{content::render_scene_content, context::TemplateCtx, registry::ShowcaseRegistry},
    effects::transitions::resolve_transition,
    foundation::{error::StoryResult, math::stable_hash64},
    templates::ambient::{cyber_hud, floating_geometry, progress_bar},
    timeline::{
        builder::Timeline,
        gate::{SceneMount, mount},
    },
    visual::frame::{ActiveScene, FrameTree},
};

/// Evaluates frames of one video.
///
/// Construction validates the config and lays out the timeline once; every
/// [`Composer::render_frame`] call after that is a pure function of the frame number.
#[derive(Clone, Debug)]
pub struct Composer<'r> {
    config: VideoConfig,
    theme: Theme,
    timeline: Timeline,
    scene_seeds: Vec<u64>,
    registry: &'r ShowcaseRegistry,
}

impl Composer<'static> {
    /// Composer using the built-in Showcase catalog.
    pub fn new(config: &VideoConfig) -> StoryResult<Self> {
        Composer::with_registry(config, ShowcaseRegistry::builtin())
    }
}

impl<'r> Composer<'r> {
    /// Composer resolving Showcase variants through `registry`.
    pub fn with_registry(config: &VideoConfig, registry: &'r ShowcaseRegistry) -> StoryResult<Self> {
        config.validate()?;
        let timeline = Timeline::build(&config.scenes)?;
        let scene_seeds = config
            .scenes
            .iter()
            .map(|s| stable_hash64(config.seed, &s.id))
            .collect();
        tracing::debug!(
            scenes = timeline.len(),
            total = timeline.total_duration(),
            "composer ready"
        );
        Ok(Self {
            theme: config.theme(),
            config: config.clone(),
            timeline,
            scene_seeds,
            registry,
        })
    }

    /// The validated config.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Scene placement.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Frames in the video.
    pub fn total_frames(&self) -> u64 {
        self.timeline.total_duration()
    }

    /// Evaluate global `frame`. Frames outside `[0, total)` mount no scene but still carry the
    /// ambient layers.
    #[tracing::instrument(skip(self))]
    pub fn render_frame(&self, frame: i64) -> StoryResult<FrameTree> {
        let canvas = self.config.canvas();
        let fps = self.config.fps;
        let total = self.total_frames();

        let mut layers = vec![floating_geometry(frame, canvas, self.config.seed)];
        let mut active_scene = None;

        for entry in self.timeline.entries() {
            let SceneMount::Active { local_frame } = mount(entry, frame) else {
                continue;
            };
            let scene = &self.config.scenes[entry.index];
            let ctx = TemplateCtx {
                local_frame,
                fps,
                canvas,
                theme: &self.theme,
                seed: self.scene_seeds[entry.index],
            };
            let content = render_scene_content(&ctx, &scene.props, self.registry)?;
            let style = resolve_transition(scene.transition, local_frame, canvas)?;
            layers.push(style.apply(content, canvas));
            active_scene = Some(ActiveScene {
                index: entry.index,
                id: entry.id.clone(),
                local_frame,
            });
        }

        layers.push(cyber_hud(
            frame,
            fps,
            canvas,
            self.theme.accent,
            self.config.seed,
        ));
        layers.push(progress_bar(frame, total, canvas, self.theme.accent));

        Ok(FrameTree {
            frame,
            canvas,
            background: self.theme.background,
            font_family: self.theme.font_family.clone(),
            code_font_family: self.theme.code_font_family.clone(),
            active_scene,
            layers,
        })
    }
}

/// One-shot evaluation of `frame`; builds a [`Composer`] each call.
pub fn render_frame(config: &VideoConfig, frame: i64) -> StoryResult<FrameTree> {
    Composer::new(config)?.render_frame(frame)
}

/// Sum of scene durations.
pub fn total_duration(config: &VideoConfig) -> u64 {
    crate::timeline::builder::total_duration(&config.scenes)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
