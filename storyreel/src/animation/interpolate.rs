use crate::{
    animation::ease::Ease,
    foundation::error::{StoryError, StoryResult},
};

/// What happens to frames outside the first or last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the boundary segment's linear trend.
    Extend,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    /// Policy below the first breakpoint.
    pub extrapolate_left: Extrapolate,
    /// Policy above the last breakpoint.
    pub extrapolate_right: Extrapolate,
    /// Curve applied to the normalized position within each segment.
    pub easing: Option<Ease>,
}

impl InterpolateOpts {
    /// Clamp both sides (the default).
    pub fn clamped() -> Self {
        Self::default()
    }

    /// Extend both sides.
    pub fn extended() -> Self {
        Self {
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
            easing: None,
        }
    }

    /// Same options with `ease` applied inside segments.
    pub fn with_easing(mut self, ease: Ease) -> Self {
        self.easing = Some(ease);
        self
    }
}

/// Piecewise-linear map of `frame` through `input` breakpoints onto `output` values.
///
/// `input` must hold at least two finite, strictly increasing values and `output` the same number
/// of finite values; anything else is an [`StoryError::InvalidRange`].
pub fn interpolate(
    frame: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOpts,
) -> StoryResult<f64> {
    validate_ranges(input, output)?;
    if !frame.is_finite() {
        return Err(StoryError::animation(format!(
            "interpolate input must be finite, got {frame}"
        )));
    }

    let last = input.len() - 1;
    let seg = input.partition_point(|&x| x <= frame).clamp(1, last) - 1;
    Ok(interpolate_segment(
        frame,
        (input[seg], input[seg + 1]),
        (output[seg], output[seg + 1]),
        opts,
    ))
}

fn validate_ranges(input: &[f64], output: &[f64]) -> StoryResult<()> {
    if input.len() < 2 {
        return Err(StoryError::invalid_range(format!(
            "input range needs at least 2 breakpoints, got {}",
            input.len()
        )));
    }
    if input.len() != output.len() {
        return Err(StoryError::invalid_range(format!(
            "input range has {} breakpoints but output range has {}",
            input.len(),
            output.len()
        )));
    }
    if let Some(v) = input.iter().chain(output).find(|v| !v.is_finite()) {
        return Err(StoryError::invalid_range(format!(
            "range values must be finite, got {v}"
        )));
    }
    if let Some(w) = input.windows(2).find(|w| w[1] <= w[0]) {
        return Err(StoryError::invalid_range(format!(
            "input range must be strictly increasing ({} then {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn interpolate_segment(
    frame: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let mut x = frame;
    if x < in_min && opts.extrapolate_left == Extrapolate::Clamp {
        x = in_min;
    }
    if x > in_max && opts.extrapolate_right == Extrapolate::Clamp {
        x = in_max;
    }
    if out_min == out_max {
        return out_min;
    }

    let mut t = (x - in_min) / (in_max - in_min);
    if let Some(ease) = opts.easing {
        t = ease.curve(t);
    }
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
