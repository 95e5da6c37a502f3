//! Hypercube vertices
//!
//! A [`Vertex`] is one corner of a d-cube. It keeps its base position fixed
//! and rotates a separate working copy, one step per tick.

use hypercube_math::hypercube::{parity, unit_coordinates};
use hypercube_math::mat4::{self, Mat4, IDENTITY};
use hypercube_math::{Projection, Vec3, Vec4};

use crate::ShapeOptions;

/// One corner of a hypercube with its rotation state
#[derive(Clone, Debug)]
pub struct Vertex {
    /// Bit pattern identifying the corner
    value: u32,
    /// Corner coordinates plus offset; never changes after construction
    base: Vec4,
    /// Current rotated position
    rotated: Vec4,
    /// Per-tick rotation currently installed
    transform: Mat4,
    scaling_factor: f32,
    projection: Projection,
}

impl Vertex {
    /// Create the vertex for bit pattern `value`, placed with `options`
    pub fn new(value: u32, options: &ShapeOptions) -> Self {
        let base = unit_coordinates(value) + options.offset;
        Self {
            value,
            base,
            rotated: base,
            transform: IDENTITY,
            scaling_factor: options.scaling_factor,
            projection: options.projection,
        }
    }

    /// The bit pattern of this corner
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Popcount of the bit pattern, mod 2
    #[inline]
    pub fn parity(&self) -> u32 {
        parity(self.value)
    }

    /// True for even-parity corners.
    ///
    /// Only used to pick edge-generating anchors; every corner is part of the
    /// drawn shape regardless.
    #[inline]
    pub fn is_main_corner(&self) -> bool {
        self.parity() == 0
    }

    /// Pattern of the corner reached by flipping `bit`
    #[inline]
    pub fn neighbor(&self, bit: u32) -> u32 {
        self.value ^ (1 << bit)
    }

    #[inline]
    pub fn base(&self) -> Vec4 {
        self.base
    }

    #[inline]
    pub fn rotated(&self) -> Vec4 {
        self.rotated
    }

    #[inline]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Stereographic projection of the current rotated position
    pub fn project(&self) -> Vec3 {
        self.projection.project(self.rotated, self.scaling_factor)
    }

    /// Advance one tick: rotate the current position by the installed transform.
    ///
    /// Steps are incremental. Every call turns the vertex by the same fixed
    /// angle, so the apparent speed follows the tick rate.
    pub fn apply_rotation_tick(&mut self) {
        self.rotated = mat4::transform(self.transform, self.rotated);
    }

    /// Install a new per-tick transform and snap back to the base position.
    ///
    /// Orientation is not carried over: after a rotation-plane change the
    /// vertex restarts from its base pose.
    pub fn reset_transform(&mut self, transform: Mat4) {
        self.rotated = self.base;
        self.transform = transform;
    }
}
