//! Rotation planes of 4-space and their composition
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//! Any subset of them can be switched on; the active subset is folded into a
//! single matrix by [`RotationComposer::composite`].

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4, IDENTITY};

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - standard yaw
    XY,
    /// XZ plane - standard pitch
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Every plane, in composition order.
    ///
    /// The order is all 2-element subsets of `{X, Y, Z, W}` in lexicographic
    /// axis order. Matrix products do not commute, so this order is what makes
    /// a composite reproducible.
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices (0=X, 1=Y, 2=Z, 3=W) spanning this plane
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }

    /// Elementary rotation by `angle` in this plane
    pub fn matrix(self, angle: f32) -> Mat4 {
        let (a, b) = self.axes();
        mat4::plane_rotation(angle, a, b)
    }

    /// The flag bit representing this plane in a [`PlaneSet`]
    pub const fn flag(self) -> PlaneSet {
        match self {
            RotationPlane::XY => PlaneSet::XY,
            RotationPlane::XZ => PlaneSet::XZ,
            RotationPlane::XW => PlaneSet::XW,
            RotationPlane::YZ => PlaneSet::YZ,
            RotationPlane::YW => PlaneSet::YW,
            RotationPlane::ZW => PlaneSet::ZW,
        }
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a rotation plane
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rotation plane '{0}' (expected one of XY, XZ, XW, YZ, YW, ZW)")]
pub struct PlaneParseError(pub String);

impl FromStr for RotationPlane {
    type Err = PlaneParseError;

    /// Case-insensitive; axis order within the name does not matter ("WX" is XW).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let mut chars = upper.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => return Err(PlaneParseError(s.to_string())),
        };
        let index = |c: char| "XYZW".find(c);
        let (a, b) = match (index(first), index(second)) {
            (Some(a), Some(b)) if a != b => (a.min(b), a.max(b)),
            _ => return Err(PlaneParseError(s.to_string())),
        };
        RotationPlane::ALL
            .into_iter()
            .find(|plane| plane.axes() == (a, b))
            .ok_or_else(|| PlaneParseError(s.to_string()))
    }
}

bitflags! {
    /// Set of active rotation planes
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PlaneSet: u8 {
        const XY = 1 << 0;
        const XZ = 1 << 1;
        const XW = 1 << 2;
        const YZ = 1 << 3;
        const YW = 1 << 4;
        const ZW = 1 << 5;
    }
}

impl PlaneSet {
    /// Iterate the planes in this set, in composition order
    pub fn planes(self) -> impl Iterator<Item = RotationPlane> {
        RotationPlane::ALL
            .into_iter()
            .filter(move |plane| self.contains(plane.flag()))
    }
}

impl FromIterator<RotationPlane> for PlaneSet {
    fn from_iter<I: IntoIterator<Item = RotationPlane>>(iter: I) -> Self {
        iter.into_iter().fold(PlaneSet::empty(), |set, plane| set | plane.flag())
    }
}

/// Tracks which of the six planes are active and composes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationComposer {
    active: PlaneSet,
}

impl RotationComposer {
    /// Create a composer with every plane inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with the given planes active
    pub fn with_active(active: PlaneSet) -> Self {
        Self { active }
    }

    /// Switch a plane on or off
    pub fn set_active(&mut self, plane: RotationPlane, active: bool) {
        self.active.set(plane.flag(), active);
    }

    #[inline]
    pub fn is_active(&self, plane: RotationPlane) -> bool {
        self.active.contains(plane.flag())
    }

    #[inline]
    pub fn active(&self) -> PlaneSet {
        self.active
    }

    /// Product of the active planes' elementary matrices for `angle`.
    ///
    /// Multiplies left to right in [`RotationPlane::ALL`] order, skipping
    /// inactive planes. With nothing active the result is the identity.
    pub fn composite(&self, angle: f32) -> Mat4 {
        self.active
            .planes()
            .fold(IDENTITY, |acc, plane| mat4::mul(acc, plane.matrix(angle)))
    }
}
