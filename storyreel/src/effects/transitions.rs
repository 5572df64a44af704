use std::str::FromStr;

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    foundation::{
        core::{Affine, Canvas, Rect, Vec2},
        error::{StoryError, StoryResult},
    },
    visual::node::{Group, VisualNode},
};

/// Length of every entry transition, independent of scene duration.
pub const TRANSITION_WINDOW_FRAMES: u64 = 15;

/// Entry transition played when a scene mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Opacity 0 → 1.
    #[default]
    Fade,
    /// Slide in from the right edge with ease-out.
    Slide,
    /// Reveal left to right behind a shrinking right-edge mask.
    Wipe,
    /// No transition.
    None,
}

impl FromStr for TransitionKind {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        match kind.as_str() {
            "fade" => Ok(Self::Fade),
            "slide" => Ok(Self::Slide),
            "wipe" => Ok(Self::Wipe),
            "none" => Ok(Self::None),
            "" => Err(StoryError::validation("transition kind must be non-empty")),
            _ => Err(StoryError::validation(format!(
                "unknown transition kind '{kind}'"
            ))),
        }
    }
}

/// Where a mounted scene is in its entry transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionPhase {
    /// Inside the window; `progress` runs linearly from 0 to 1.
    Entering {
        /// Linear window progress in `[0, 1)`.
        progress: f64,
    },
    /// Past the window; the scene is fully shown.
    Steady,
}

/// Phase for a scene-local frame.
pub fn transition_phase(local_frame: u64) -> TransitionPhase {
    if local_frame < TRANSITION_WINDOW_FRAMES {
        TransitionPhase::Entering {
            progress: local_frame as f64 / TRANSITION_WINDOW_FRAMES as f64,
        }
    } else {
        TransitionPhase::Steady
    }
}

/// Visual style of the wrapper around scene content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransitionStyle {
    /// Opacity multiplier.
    pub opacity: f64,
    /// Horizontal offset in pixels.
    pub translate_x: f64,
    /// Fraction of the canvas width masked from the right edge (1 = fully hidden).
    pub clip_right_inset: f64,
}

impl TransitionStyle {
    /// Style that leaves content untouched.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        clip_right_inset: 0.0,
    };

    /// Visible fraction of the canvas width (wipe progress).
    pub fn reveal_fraction(&self) -> f64 {
        1.0 - self.clip_right_inset
    }

    /// `true` when applying the style is a no-op.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Wrap `content` in a group carrying this style. The wrapper multiplies into whatever
    /// opacity and transform the content already has.
    pub fn apply(self, content: VisualNode, canvas: Canvas) -> VisualNode {
        let mut group = Group::new(vec![content]).faded(self.opacity);
        if self.translate_x != 0.0 {
            group = group.transformed(Affine::translate(Vec2::new(self.translate_x, 0.0)));
        }
        if self.clip_right_inset > 0.0 {
            let visible = canvas.w() * self.reveal_fraction();
            group = group.clipped(Rect::new(0.0, 0.0, visible, canvas.h()));
        }
        group.into()
    }
}

/// Style for `kind` at `local_frame`. Frames past the window clamp to the end state.
pub fn resolve_transition(
    kind: TransitionKind,
    local_frame: u64,
    canvas: Canvas,
) -> StoryResult<TransitionStyle> {
    let window = [0.0, TRANSITION_WINDOW_FRAMES as f64];
    let f = local_frame as f64;
    let clamped = InterpolateOpts::clamped();

    Ok(match kind {
        TransitionKind::None => TransitionStyle::IDENTITY,
        TransitionKind::Fade => TransitionStyle {
            opacity: interpolate(f, &window, &[0.0, 1.0], clamped)?,
            ..TransitionStyle::IDENTITY
        },
        TransitionKind::Slide => TransitionStyle {
            translate_x: interpolate(
                f,
                &window,
                &[canvas.w(), 0.0],
                clamped.with_easing(Ease::OutQuad),
            )?,
            ..TransitionStyle::IDENTITY
        },
        TransitionKind::Wipe => TransitionStyle {
            clip_right_inset: interpolate(f, &window, &[1.0, 0.0], clamped)?,
            ..TransitionStyle::IDENTITY
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
