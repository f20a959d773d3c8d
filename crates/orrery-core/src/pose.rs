//! Camera pose value type.

use glam::Vec3;

/// Camera position plus look-at target for one instant.
///
/// Produced fresh on every segment evaluation and never mutated in place;
/// the rig keeps its own smoothed copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// True when every component is a real number.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }

    /// A pose whose position coincides with its look-at target has no view
    /// direction and cannot orient a camera.
    pub fn is_degenerate(&self) -> bool {
        self.position.distance_squared(self.look_at) <= f32::EPSILON
    }

    /// Component-wise lerp of position and look-at.
    pub fn lerp(&self, other: &Pose, s: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, s),
            look_at: self.look_at.lerp(other.look_at, s),
        }
    }

    /// Worst-case component distance to another pose; used for continuity
    /// checks and convergence tests.
    pub fn distance(&self, other: &Pose) -> f32 {
        self.position
            .distance(other.position)
            .max(self.look_at.distance(other.look_at))
    }
}
