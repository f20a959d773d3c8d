//! Camera motion primitives: orbit sweeps and point-to-point transits.

use glam::Vec3;
use thiserror::Error;

use crate::ease::Ease;
use crate::pose::Pose;

/// Rejection reasons for malformed segment specs. Raised at region
/// registration, never during evaluation: a segment that validated once
/// stays evaluable for the life of the page.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("orbit radius must be positive (got {0})")]
    NonPositiveRadius(f32),
    #[error("segment contains a non-finite component")]
    NonFiniteComponent,
    #[error("pose position and look-at coincide")]
    DegeneratePose,
    #[error("flight plan has no regions")]
    EmptyPlan,
    #[error("flight plan is already sealed")]
    PlanSealed,
}

/// Sweeps the camera around a fixed center at fixed radius and height.
///
/// `height` is a vertical offset from the center; the look-at stays glued
/// to the center for the whole sweep. Direction is carried entirely by the
/// sign of `angle_end - angle_start`; equal angles hold a static framing.
#[derive(Clone, Copy, Debug)]
pub struct OrbitSpec {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
    pub angle_start: f32,
    pub angle_end: f32,
}

impl OrbitSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SpecError::NonPositiveRadius(self.radius));
        }
        let finite = self.center.is_finite()
            && self.height.is_finite()
            && self.angle_start.is_finite()
            && self.angle_end.is_finite();
        if !finite {
            return Err(SpecError::NonFiniteComponent);
        }
        Ok(())
    }

    pub fn evaluate(&self, p: f32) -> Pose {
        let p = p.clamp(0.0, 1.0);
        let angle = self.angle_start + (self.angle_end - self.angle_start) * p;
        let position = Vec3::new(
            self.center.x + angle.cos() * self.radius,
            self.center.y + self.height,
            self.center.z + angle.sin() * self.radius,
        );
        Pose::new(position, self.center)
    }
}

/// Travels between two fixed endpoint poses.
///
/// Position and look-at share one eased progress value so translation and
/// reorientation stay visually coupled; easing them separately makes the
/// view direction swim relative to the motion.
#[derive(Clone, Copy, Debug)]
pub struct TransitSpec {
    pub from: Pose,
    pub to: Pose,
    pub ease: Ease,
}

impl TransitSpec {
    /// Build a transit whose endpoints are the neighbors' boundary poses,
    /// so the joints match by construction instead of by hand-kept
    /// constants.
    pub fn between(from: Pose, to: Pose, ease: Ease) -> Self {
        Self { from, to, ease }
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(SpecError::NonFiniteComponent);
        }
        if self.from.is_degenerate() || self.to.is_degenerate() {
            return Err(SpecError::DegeneratePose);
        }
        Ok(())
    }

    pub fn evaluate(&self, p: f32) -> Pose {
        let s = self.ease.apply(p.clamp(0.0, 1.0));
        self.from.lerp(&self.to, s)
    }
}

/// One unit of camera choreography, evaluated from a region's progress.
#[derive(Clone, Copy, Debug)]
pub enum Segment {
    Orbit(OrbitSpec),
    Transit(TransitSpec),
}

impl Segment {
    pub fn validate(&self) -> Result<(), SpecError> {
        match self {
            Segment::Orbit(o) => o.validate(),
            Segment::Transit(t) => t.validate(),
        }
    }

    /// Pose at progress `p` in \[0, 1\]. Pure: the same `p` always yields
    /// the same pose, which is what makes scrubbing backward free.
    pub fn evaluate(&self, p: f32) -> Pose {
        match self {
            Segment::Orbit(o) => o.evaluate(p),
            Segment::Transit(t) => t.evaluate(p),
        }
    }

    pub fn start_pose(&self) -> Pose {
        self.evaluate(0.0)
    }

    pub fn end_pose(&self) -> Pose {
        self.evaluate(1.0)
    }
}
