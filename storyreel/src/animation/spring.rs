//! Closed-form damped harmonic oscillator sampled at explicit frames.
//!
//! The oscillator starts at rest at 0 and is pulled towards 1:
//!
//! `m x'' + c x' + k (x - 1) = 0`, `x(0) = 0`, `x'(0) = 0`
//!
//! with natural frequency `ω₀ = √(k/m)` and damping ratio `ζ = c / (2√(km))`.

use crate::foundation::{
    core::Fps,
    error::{StoryError, StoryResult},
};

const CRITICAL_EPSILON: f64 = 1e-6;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    /// Mass (> 0).
    pub mass: f64,
    /// Stiffness `k` (> 0).
    pub stiffness: f64,
    /// Damping coefficient `c` (>= 0).
    pub damping: f64,
    /// Cap the output at 1 so underdamped springs never overshoot.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    /// Heavily damped entry spring: no bounce, long settle.
    fn default() -> Self {
        Self {
            mass: 0.5,
            stiffness: 100.0,
            damping: 200.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Reject non-finite or non-physical parameters.
    pub fn validate(&self) -> StoryResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(StoryError::validation("spring mass must be finite and > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(StoryError::validation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(StoryError::validation(
                "spring damping must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Natural angular frequency `ω₀` in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Spring progress at `frame` (0 at rest, 1 at target).
///
/// Frames before 0 return 0. A config that fails [`SpringConfig::validate`] settles
/// instantly (returns 1 for every frame >= 0) so sampling stays total.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    if config.validate().is_err() {
        return 1.0;
    }

    let t = fps.frames_to_secs(frame);
    let omega_0 = config.natural_frequency();
    let zeta = config.damping_ratio();

    let x = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        critically_damped(t, omega_0)
    } else if zeta < 1.0 {
        underdamped(t, omega_0, zeta)
    } else {
        overdamped(t, omega_0, zeta)
    };

    if config.overshoot_clamping && x > 1.0 {
        1.0
    } else {
        x
    }
}

/// [`spring`] shifted right by `delay` frames; 0 for every `frame < delay`.
pub fn delayed_spring(frame: f64, delay: f64, fps: Fps, config: SpringConfig) -> f64 {
    spring(frame - delay, fps, config)
}

// x(t) = 1 - e^(-ζω₀t) [cos(ω_d t) + ζ/√(1-ζ²) sin(ω_d t)], ω_d = ω₀√(1-ζ²)
fn underdamped(t: f64, omega_0: f64, zeta: f64) -> f64 {
    let root = zeta.mul_add(-zeta, 1.0).sqrt();
    let omega_d = omega_0 * root;
    let decay = (-zeta * omega_0 * t).exp();
    let osc = (omega_d * t).cos() + (zeta / root) * (omega_d * t).sin();
    decay.mul_add(-osc, 1.0)
}

// x(t) = 1 - e^(-ω₀t) (1 + ω₀t)
fn critically_damped(t: f64, omega_0: f64) -> f64 {
    let decay = (-omega_0 * t).exp();
    decay.mul_add(-omega_0.mul_add(t, 1.0), 1.0)
}

// Two real roots r1 > r2 (both negative):
// x(t) = 1 + (r2 e^(r1 t) - r1 e^(r2 t)) / (r1 - r2)
// Written with decaying exponentials only; cosh/sinh overflow for large ζ.
fn overdamped(t: f64, omega_0: f64, zeta: f64) -> f64 {
    let root = zeta.mul_add(zeta, -1.0).sqrt();
    let r1 = -omega_0 * (zeta - root);
    let r2 = -omega_0 * (zeta + root);
    1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
