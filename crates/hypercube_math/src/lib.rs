//! 4D Mathematics Library
//!
//! This crate provides the vector, matrix, rotation and projection types used
//! to animate hypercube wireframes.
//!
//! ## Core Types
//!
//! - [`Vec4`] / [`Vec3`] - 4D vectors and their 3D projections
//! - [`Mat4`] - 4x4 column-major matrix
//! - [`RotationPlane`] / [`PlaneSet`] - the six rotation planes of 4-space
//! - [`RotationComposer`] - folds the active planes into one matrix
//! - [`Projection`] - stereographic 4D -> 3D projection
//!
//! The [`hypercube`] module holds the bit-pattern helpers for d-cube vertices.

mod vec4;
pub mod mat4;
pub mod rotation;
pub mod projection;
pub mod hypercube;

pub use vec4::{Vec3, Vec4};
pub use mat4::Mat4;
pub use rotation::{PlaneParseError, PlaneSet, RotationComposer, RotationPlane};
pub use projection::Projection;
