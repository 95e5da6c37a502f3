//! Core types for animating hypercube wireframes
//!
//! This crate builds d-cubes for d = 0..=4 and keeps them rotating:
//!
//! - [`Vertex`] / [`Edge`] - corners and edges of a d-cube, keyed by bit pattern
//! - [`AdjacencyGraph`] - edge multigraph with odd-degree repair
//! - [`Circuit`] - closed walk covering every edge, drawn as one polyline
//! - [`Shape`] - a d-cube with its circuit and projected geometry
//! - [`RotationState`] - active rotation planes shared by all shapes
//! - [`ShapeWorld`] - live shapes keyed by [`ShapeKey`]
//! - [`Catalog`] - serializable list of predefined shape groups

mod error;
mod color;
mod vertex;
mod edge;
mod graph;
mod circuit;
mod rotation_state;
mod shape;
mod world;
mod catalog;

pub use error::{CatalogError, ShapeError};
pub use color::Color;
pub use vertex::Vertex;
pub use edge::Edge;
pub use graph::AdjacencyGraph;
pub use circuit::Circuit;
pub use rotation_state::{RotationState, DEFAULT_ROTATION_ANGLE};
pub use shape::{build_edges, Shape, ShapeGeometry, ShapeOptions};
pub use world::{LiveShape, ShapeKey, ShapeWorld};
pub use catalog::{Catalog, CatalogEntry, CatalogKind, ShapeInstance};

// Re-export commonly used types from hypercube_math for convenience
pub use hypercube_math::{Mat4, PlaneSet, Projection, RotationPlane, Vec3, Vec4};
