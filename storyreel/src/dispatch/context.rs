use crate::{
    animation::{
        helpers::enter_spring,
        interpolate::{InterpolateOpts, interpolate},
        random::{Rng64, element_rng},
    },
    composition::model::Theme,
    foundation::{
        core::{Canvas, Fps, Rect},
        error::StoryResult,
    },
};

/// Canvas height at which template pixel sizes are authored.
pub const REFERENCE_HEIGHT: f64 = 1600.0;

/// Inset of the layout container around ordinary scene content, in reference pixels.
pub const LAYOUT_PADDING: f64 = 80.0;

/// Everything a template may read. Templates never see the global frame.
#[derive(Clone, Copy, Debug)]
pub struct TemplateCtx<'a> {
    /// Frame relative to the scene start.
    pub local_frame: u64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Output surface.
    pub canvas: Canvas,
    /// Shared colors and fonts.
    pub theme: &'a Theme,
    /// Seed for decorative randomness, already specialized per scene.
    pub seed: u64,
}

impl TemplateCtx<'_> {
    /// Local frame as `f64`.
    pub fn frame(&self) -> f64 {
        self.local_frame as f64
    }

    /// Entry spring for an element delayed by `delay` frames.
    pub fn enter(&self, delay: u64) -> f64 {
        enter_spring(self.local_frame, delay, self.fps)
    }

    /// Clamped linear ramp from `from` to `to` over local frames `[start, end]`.
    pub fn ramp(&self, start: f64, end: f64, from: f64, to: f64) -> StoryResult<f64> {
        interpolate(
            self.frame(),
            &[start, end],
            &[from, to],
            InterpolateOpts::clamped(),
        )
    }

    /// Scale factor from reference pixels to output pixels.
    pub fn unit(&self) -> f64 {
        self.canvas.h() / REFERENCE_HEIGHT
    }

    /// Reference pixels to output pixels.
    pub fn px(&self, v: f64) -> f64 {
        v * self.unit()
    }

    /// Area inside the layout container padding.
    pub fn content_box(&self) -> Rect {
        self.canvas.rect().inset(-self.px(LAYOUT_PADDING))
    }

    /// Generator for the `index`-th decorative element of this scene.
    pub fn rng(&self, index: u64) -> Rng64 {
        element_rng(self.seed, index)
    }
}
