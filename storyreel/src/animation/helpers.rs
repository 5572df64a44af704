use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate},
        spring::{SpringConfig, delayed_spring},
    },
    foundation::{core::Fps, error::StoryResult},
};

/// Default entry spring for an element appearing `delay` frames into its scene.
pub fn enter_spring(local_frame: u64, delay: u64, fps: Fps) -> f64 {
    delayed_spring(
        local_frame as f64,
        delay as f64,
        fps,
        SpringConfig::default(),
    )
}

/// Opacity envelope: 0 → 1 over the first `fade` frames, hold, 1 → 0 over the last `fade`.
///
/// Needs `duration > 2 * fade`; shorter durations are an invalid range.
pub fn fade_in_out(frame: f64, duration: f64, fade: f64) -> StoryResult<f64> {
    interpolate(
        frame,
        &[0.0, fade, duration - fade, duration],
        &[0.0, 1.0, 1.0, 0.0],
        InterpolateOpts::clamped(),
    )
}

/// Typewriter reveal: the prefix of `text` visible at `frame`, one char per `frames_per_char`.
///
/// Counts Unicode scalar values, so the cut never splits a code point.
pub fn typed_prefix(text: &str, frame: u64, frames_per_char: f64) -> &str {
    if !(frames_per_char.is_finite() && frames_per_char > 0.0) {
        return text;
    }
    let visible = (frame as f64 / frames_per_char).floor() as usize;
    match text.char_indices().nth(visible) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/helpers.rs"]
mod tests;
