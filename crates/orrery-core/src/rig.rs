//! Per-frame smoothing of the published camera target.

use glam::Vec2;

use crate::constants::{
    BOB_AMPLITUDE, BOB_RATE, BOOTSTRAP_WINDOW_SEC, PARALLAX_GAIN, SMOOTH_TAU_SEC,
};
use crate::pose::Pose;

/// Wall-clock and pointer signals sampled once per rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the scene was mounted.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pointer position, each axis normalized to \[-1, 1\].
    pub pointer: Vec2,
}

/// Chases the latest target pose with time-compensated exponential damping
/// and layers ambient bob plus pointer parallax on top of the target.
///
/// The perturbations ride on the target, never on the smoothed pose: an
/// offset applied to the smoothed pose would feed back through the damping
/// and drift.
pub struct CameraRig {
    current: Pose,
    initialized: bool,
    tau: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::with_smoothing(SMOOTH_TAU_SEC)
    }

    /// `tau` is the smoothing time constant in seconds. Per-frame blend is
    /// `alpha = 1 - exp(-dt / tau)`, so the convergence half-life is the
    /// same at any frame rate.
    pub fn with_smoothing(tau: f32) -> Self {
        Self {
            current: Pose::new(glam::Vec3::ZERO, glam::Vec3::Z),
            initialized: false,
            tau: tau.max(1e-4),
        }
    }

    /// The smoothed pose handed to the renderer last frame.
    pub fn current(&self) -> Pose {
        self.current
    }

    /// Advance one rendered frame toward `target` and return the pose for
    /// the renderer's camera. Runs unconditionally every frame while the
    /// scene is mounted.
    pub fn step(&mut self, target: Pose, input: FrameInput) -> Pose {
        let mut goal = target;
        goal.position.y += (input.elapsed * BOB_RATE).sin() * BOB_AMPLITUDE;
        goal.position.x += input.pointer.x * PARALLAX_GAIN;
        goal.position.y += input.pointer.y * PARALLAX_GAIN;

        if !self.initialized || input.elapsed < BOOTSTRAP_WINDOW_SEC {
            // Snap during the bootstrap window: no smoothing pop on load,
            // no long lerp chase from the default pose.
            self.current = goal;
            self.initialized = true;
        } else {
            let alpha = (1.0 - (-input.dt / self.tau).exp()).clamp(0.0, 1.0);
            self.current = self.current.lerp(&goal, alpha);
        }
        self.current
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
