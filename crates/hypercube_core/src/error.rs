//! Error types for shape construction and catalog IO
//!
//! Every [`ShapeError`] is raised while a shape is being built. A shape that
//! fails to build is never handed out, so no partially built geometry exists.

use std::io;

use hypercube_math::hypercube::MAX_DIMENSION;
use thiserror::Error;

/// Error building a shape, its edges or its circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// An endpoint is missing, or the endpoints are not one bit apart
    #[error("invalid edge {a}-{b}: endpoint missing or not a hypercube edge")]
    InvalidEdge { a: u32, b: u32 },
    /// Circuit construction was given no edges
    #[error("cannot build a circuit from zero edges")]
    EmptyGraph,
    /// Degree repair found an odd vertex with no odd neighbour to pair with
    #[error("odd-degree vertex {vertex} has no adjacent odd-degree partner")]
    UnresolvableOddVertex { vertex: u32 },
    /// The edge set does not form a single connected component
    #[error("edge set is not connected; no closed walk can cover it")]
    DisconnectedGraph,
    /// Dimension too large to embed in 4-space
    #[error("dimension {0} is not supported (maximum is {max})", max = MAX_DIMENSION)]
    UnsupportedDimension(u32),
    /// Scaling, offset or projection parameters cannot give finite points
    #[error("invalid shape options: {reason}")]
    InvalidOptions { reason: String },
}

/// Error loading or saving a shape catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid RON syntax or schema mismatch
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Serialization error
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}
