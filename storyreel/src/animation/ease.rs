/// Easing curve applied to a normalized segment position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// `t^2`.
    InQuad,
    /// `t(2 - t)`.
    OutQuad,
    /// Quadratic ease-in then ease-out.
    InOutQuad,
    /// `t^3`.
    InCubic,
    /// `1 - (1 - t)^3`.
    OutCubic,
    /// Cubic ease-in then ease-out.
    InOutCubic,
}

impl Ease {
    /// Apply the curve to `t` clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        self.curve(t.clamp(0.0, 1.0))
    }

    /// Evaluate the polynomial without clamping, so extended extrapolation keeps the curve's trend.
    pub(crate) fn curve(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
