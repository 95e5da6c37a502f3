//! Process-wide rotation state
//!
//! One [`RotationState`] is shared by every live shape. Toggling a plane
//! recomputes the composite transform and bumps a generation counter; shapes
//! compare that counter against the last one they applied to notice that
//! their transform is stale.

use hypercube_math::mat4::Mat4;
use hypercube_math::{PlaneSet, RotationComposer, RotationPlane};

/// Default rotation applied per tick, in radians
pub const DEFAULT_ROTATION_ANGLE: f32 = 0.01;

/// Active rotation planes, per-tick angle and the resulting transform
#[derive(Clone, Debug)]
pub struct RotationState {
    composer: RotationComposer,
    angle: f32,
    composite: Mat4,
    generation: u64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_ANGLE)
    }
}

impl RotationState {
    /// Create a state with no active planes and the given per-tick angle
    pub fn new(angle: f32) -> Self {
        let composer = RotationComposer::new();
        Self {
            composer,
            angle,
            composite: composer.composite(angle),
            generation: 0,
        }
    }

    /// Start with the given planes active
    pub fn with_active(mut self, planes: PlaneSet) -> Self {
        self.composer = RotationComposer::with_active(planes);
        self.recompute();
        self
    }

    /// Switch a plane on or off.
    ///
    /// Always bumps the generation, even if the plane was already in the
    /// requested state, so every shape restarts from its base pose.
    pub fn set_active(&mut self, plane: RotationPlane, active: bool) {
        self.composer.set_active(plane, active);
        self.recompute();
        log::debug!(
            "Rotation plane {} {} (generation {})",
            plane,
            if active { "on" } else { "off" },
            self.generation
        );
    }

    /// Flip a plane, returning its new state
    pub fn toggle(&mut self, plane: RotationPlane) -> bool {
        let active = !self.composer.is_active(plane);
        self.set_active(plane, active);
        active
    }

    /// Change the per-tick angle
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.composite = self.composer.composite(self.angle);
        self.generation += 1;
    }

    /// Per-tick transform for the active planes
    #[inline]
    pub fn composite(&self) -> &Mat4 {
        &self.composite
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn active(&self) -> PlaneSet {
        self.composer.active()
    }

    #[inline]
    pub fn is_active(&self, plane: RotationPlane) -> bool {
        self.composer.is_active(plane)
    }
}
