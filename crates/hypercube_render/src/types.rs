//! Buffer layouts for wireframe drawing
//!
//! All vertex types derive Pod and Zeroable so they can be cast straight to
//! bytes for upload.

use bytemuck::{Pod, Zeroable};

/// A projected 3D point with colour
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// How a range of vertices is assembled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Consecutive vertices joined by line segments
    LineStrip,
    /// Each vertex drawn on its own
    PointList,
}

/// One draw call's slice of the vertex buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRange {
    pub topology: Topology,
    /// Index of the first vertex in the buffer
    pub first: u32,
    /// Number of vertices
    pub count: u32,
}

impl DrawRange {
    /// Vertex index range, for slicing the CPU-side buffer
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.first as usize..(self.first + self.count) as usize
    }

    /// Number of line segments drawn (zero for points)
    pub fn segment_count(&self) -> u32 {
        match self.topology {
            Topology::LineStrip => self.count.saturating_sub(1),
            Topology::PointList => 0,
        }
    }
}
