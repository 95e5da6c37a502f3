//! Stereographic projection from 4-space into 3-space

use serde::{Serialize, Deserialize};

use crate::{Vec3, Vec4};

/// Stereographic projection parameters
///
/// A point `(x, y, z, w)` maps to `(x, y, z) / (distance - w)`. At
/// `w == distance` the divisor vanishes and `fallback_factor` is used in place
/// of `1 / (distance - w)`, so the result is always finite for finite input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Distance of the projection pole along W
    pub distance: f32,
    /// Factor used at the pole
    pub fallback_factor: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            distance: std::f32::consts::PI,
            fallback_factor: 1.0,
        }
    }
}

impl Projection {
    pub fn new(distance: f32, fallback_factor: f32) -> Self {
        Self { distance, fallback_factor }
    }

    /// The factor `(x, y, z)` is multiplied by for a point at depth `w`
    #[inline]
    pub fn factor(&self, w: f32) -> f32 {
        let denom = self.distance - w;
        if denom != 0.0 {
            1.0 / denom
        } else {
            self.fallback_factor
        }
    }

    /// Project `v` and apply a uniform `scale` to the result
    #[inline]
    pub fn project(&self, v: Vec4, scale: f32) -> Vec3 {
        v.xyz() * (self.factor(v.w) * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_default_distance_is_pi() {
        let p = Projection::default();
        assert_eq!(p.distance, PI);
        assert_eq!(p.fallback_factor, 1.0);
    }

    #[test]
    fn test_project_origin_w() {
        let p = Projection::default();
        let v = Vec4::new(1.0, 2.0, 3.0, 0.0);
        let r = p.project(v, 1.0);
        assert!((r.x - 1.0 / PI).abs() < 1e-6);
        assert!((r.y - 2.0 / PI).abs() < 1e-6);
        assert!((r.z - 3.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_project_applies_scale() {
        let p = Projection::new(2.0, 1.0);
        let r = p.project(Vec4::new(1.0, 0.0, 0.0, 1.0), 3.0);
        // 1 / (2 - 1) * 3
        assert_eq!(r, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_pole_uses_fallback() {
        let p = Projection::default();
        let v = Vec4::new(1.0, -1.0, 0.5, PI);
        let r = p.project(v, 1.0);
        assert!(r.is_finite());
        assert_eq!(r, Vec3::new(1.0, -1.0, 0.5));

        let custom = Projection::new(1.0, 0.25);
        assert_eq!(custom.project(Vec4::new(4.0, 0.0, 0.0, 1.0), 2.0), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_far_side_of_pole_flips_sign() {
        let p = Projection::new(1.0, 1.0);
        let r = p.project(Vec4::new(1.0, 0.0, 0.0, 2.0), 1.0);
        assert_eq!(r.x, -1.0);
    }
}
