//! Renderable geometry - bridges ShapeWorld to GPU buffers
//!
//! Every shape contributes one draw range: a closed line strip following its
//! circuit, or a single point for a 0-cube. Shapes are collected in world
//! iteration order into one shared vertex buffer.

use hypercube_core::{Color, Shape, ShapeGeometry, ShapeWorld};
use hypercube_math::Vec3;

use crate::types::{DrawRange, LineVertex, Topology};

/// Per-vertex colour function
pub type ColorFn = dyn Fn(&Vec3, Color) -> [f32; 4];

/// GPU-ready wireframe buffers collected from shapes
#[derive(Clone, Debug, Default)]
pub struct RenderableGeometry {
    /// Projected positions with colours
    pub vertices: Vec<LineVertex>,
    /// One range per shape
    pub ranges: Vec<DrawRange>,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, range_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            ranges: Vec::with_capacity(range_capacity),
        }
    }

    /// Collect geometry from a single shape, coloured with the shape's colour
    pub fn from_shape(shape: &Shape) -> Self {
        let mut result = Self::new();
        result.add_shape(shape);
        result
    }

    /// Collect geometry from every shape in a world
    pub fn from_world(world: &ShapeWorld) -> Self {
        Self::from_world_with_color(world, &shape_color)
    }

    pub fn from_world_with_color(world: &ShapeWorld, color_fn: &ColorFn) -> Self {
        let total_vertices = world.iter().map(|(_, live)| live.shape.geometry().len()).sum();
        let mut result = Self::with_capacity(total_vertices, world.len());
        for (_, live) in world.iter() {
            result.add_shape_with_color(&live.shape, color_fn);
        }
        result
    }

    pub fn add_shape(&mut self, shape: &Shape) {
        self.add_shape_with_color(shape, &shape_color);
    }

    /// Append a shape's current projected geometry as one draw range
    pub fn add_shape_with_color(&mut self, shape: &Shape, color_fn: &ColorFn) {
        let geometry = shape.geometry();
        let topology = match geometry {
            ShapeGeometry::Point(_) => Topology::PointList,
            ShapeGeometry::Polyline(_) => Topology::LineStrip,
        };

        let first = self.vertices.len() as u32;
        let color = shape.color();
        self.vertices.extend(
            geometry
                .points()
                .iter()
                .map(|p| LineVertex::new(p.to_array(), color_fn(p, color))),
        );
        self.ranges.push(DrawRange {
            topology,
            first,
            count: geometry.len() as u32,
        });
    }

    /// Rebuild from the world in place.
    ///
    /// Returns true if the vertex count changed and the GPU buffer must be
    /// reallocated rather than overwritten.
    pub fn update_from_world(&mut self, world: &ShapeWorld) -> bool {
        let previous = self.vertices.len();
        self.clear();
        for (_, live) in world.iter() {
            self.add_shape(&live.shape);
        }

        let realloc = self.vertices.len() != previous;
        if realloc {
            log::debug!(
                "Wireframe buffer resized: {} -> {} vertices in {} ranges",
                previous,
                self.vertices.len(),
                self.ranges.len()
            );
        }
        realloc
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.ranges.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total line segments over all strips
    pub fn segment_count(&self) -> usize {
        self.ranges.iter().map(|r| r.segment_count() as usize).sum()
    }

    /// Vertex buffer as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Default colour function - the shape's colour for every vertex
fn shape_color(_position: &Vec3, color: Color) -> [f32; 4] {
    color.to_rgba()
}

/// Blend the shape colour 50/50 with a gradient over the projected position
pub fn position_gradient_color(position: &Vec3, color: Color) -> [f32; 4] {
    let base = color.to_rgba();
    let gradient = [
        ((position.x + 1.0) / 2.0).clamp(0.0, 1.0),
        ((position.y + 1.0) / 2.0).clamp(0.0, 1.0),
        ((position.z + 1.0) / 2.0).clamp(0.0, 1.0),
    ];
    [
        (gradient[0] + base[0]) * 0.5,
        (gradient[1] + base[1]) * 0.5,
        (gradient[2] + base[2]) * 0.5,
        base[3],
    ]
}
