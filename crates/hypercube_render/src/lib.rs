//! Wireframe buffer preparation
//!
//! This crate turns the projected geometry of live shapes into flat,
//! `Pod` vertex buffers plus a list of draw ranges, ready to upload to any
//! line-strip / point-list pipeline.
//!
//! ## Key Components
//!
//! - [`types::LineVertex`] - position and colour of one buffer entry
//! - [`types::DrawRange`] - a line strip or point run inside the buffer
//! - [`renderable::RenderableGeometry`] - collects a [`ShapeWorld`] into buffers

pub mod types;
pub mod renderable;

// Re-export core types for convenience
pub use hypercube_core::{Color, Shape, ShapeGeometry, ShapeKey, ShapeWorld};

pub use types::{DrawRange, LineVertex, Topology};
pub use renderable::{position_gradient_color, RenderableGeometry};
