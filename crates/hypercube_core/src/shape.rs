//! Hypercube wireframe shapes
//!
//! A [`Shape`] is a d-cube (0 = point, 1 = line, 2 = square, 3 = cube,
//! 4 = tesseract) built once: all `2^d` vertices, the edge set, and a closed
//! walk through every edge that the renderer draws as one polyline. After
//! construction only the vertex positions change, one rotation step per tick.

use hypercube_math::hypercube::{self, MAX_DIMENSION};
use hypercube_math::mat4::Mat4;
use hypercube_math::{Projection, Vec3, Vec4};
use serde::{Serialize, Deserialize};

use crate::{Circuit, Color, Edge, RotationState, ShapeError, Vertex};

/// Construction-time placement and appearance of a shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    /// Uniform scale applied after projection
    pub scaling_factor: f32,
    /// Added to every corner before rotation
    pub offset: Vec4,
    pub color: Color,
    pub projection: Projection,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            scaling_factor: 1.0,
            offset: Vec4::ZERO,
            color: Color::GREEN,
            projection: Projection::default(),
        }
    }
}

impl ShapeOptions {
    pub fn with_scaling_factor(mut self, scaling_factor: f32) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    pub fn with_offset(mut self, offset: Vec4) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Check that every projected point will be finite.
    ///
    /// The scaling factor must be finite and positive; offset and projection
    /// parameters must be finite.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let invalid = |reason: String| Err(ShapeError::InvalidOptions { reason });
        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return invalid(format!(
                "scaling factor must be positive and finite, got {}",
                self.scaling_factor
            ));
        }
        if !self.offset.is_finite() {
            return invalid(format!("offset must be finite, got {:?}", self.offset));
        }
        if !self.projection.distance.is_finite() || !self.projection.fallback_factor.is_finite() {
            return invalid(format!(
                "projection parameters must be finite, got distance {} and fallback {}",
                self.projection.distance, self.projection.fallback_factor
            ));
        }
        Ok(())
    }
}

/// What the renderer draws for a shape
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// A 0-cube
    Point(Vec3),
    /// Closed polyline following the shape's circuit
    Polyline(Vec<Vec3>),
}

impl ShapeGeometry {
    /// The projected points, in drawing order
    pub fn points(&self) -> &[Vec3] {
        match self {
            ShapeGeometry::Point(p) => std::slice::from_ref(p),
            ShapeGeometry::Polyline(points) => points,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

/// A rotating hypercube wireframe
#[derive(Clone, Debug)]
pub struct Shape {
    dimension: u32,
    /// Indexed by bit pattern
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    /// None for a point
    circuit: Option<Circuit>,
    /// Vertex indices in drawing order
    path: Vec<usize>,
    color: Color,
    geometry: ShapeGeometry,
    /// Generation of the last [`RotationState`] applied
    synced_generation: Option<u64>,
}

impl Shape {
    /// Build a `dimension`-cube.
    ///
    /// Fails for dimensions above 4, for options that cannot give finite
    /// points, or if the circuit cannot be built.
    pub fn new(dimension: u32, options: ShapeOptions) -> Result<Self, ShapeError> {
        if dimension > MAX_DIMENSION {
            return Err(ShapeError::UnsupportedDimension(dimension));
        }
        options.validate()?;

        let vertices: Vec<Vertex> = (0..hypercube::vertex_count(dimension) as u32)
            .map(|value| Vertex::new(value, &options))
            .collect();

        let (edges, circuit, path) = if dimension > 0 {
            let edges = build_edges(&vertices, dimension)?;
            let circuit = Circuit::build(&edges)?;
            // Vertex index equals bit pattern
            let path = circuit.walk().iter().map(|&value| value as usize).collect();
            (edges, Some(circuit), path)
        } else {
            (Vec::new(), None, vec![0])
        };

        let geometry = project_geometry(dimension, &vertices, &path);

        log::debug!(
            "Built {}-cube: {} vertices, {} edges, {} path points",
            dimension,
            vertices.len(),
            edges.len(),
            path.len()
        );

        Ok(Self {
            dimension,
            vertices,
            edges,
            circuit,
            path,
            color: options.color,
            geometry,
            synced_generation: None,
        })
    }

    /// A single point (0-cube)
    pub fn point(options: ShapeOptions) -> Result<Self, ShapeError> {
        Self::new(0, options)
    }

    /// A line segment (1-cube)
    pub fn line(options: ShapeOptions) -> Result<Self, ShapeError> {
        Self::new(1, options)
    }

    /// A square (2-cube)
    pub fn square(options: ShapeOptions) -> Result<Self, ShapeError> {
        Self::new(2, options)
    }

    /// A cube (3-cube)
    pub fn cube(options: ShapeOptions) -> Result<Self, ShapeError> {
        Self::new(3, options)
    }

    /// A tesseract (4-cube)
    pub fn tesseract(options: ShapeOptions) -> Result<Self, ShapeError> {
        Self::new(4, options)
    }

    /// Advance one animation step against the shared rotation state.
    ///
    /// If the state changed since the last tick, every vertex first snaps back
    /// to its base pose and picks up the new transform. Then each vertex is
    /// rotated one step and the geometry is re-projected.
    pub fn tick(&mut self, rotation: &RotationState) {
        self.sync(rotation);
        self.step();
    }

    /// Apply the state's transform if this shape has not seen its generation
    pub fn sync(&mut self, rotation: &RotationState) {
        if self.synced_generation != Some(rotation.generation()) {
            self.set_rotation(*rotation.composite());
            self.synced_generation = Some(rotation.generation());
        }
    }

    /// Rotate every vertex one step with its installed transform
    pub fn step(&mut self) {
        for vertex in &mut self.vertices {
            vertex.apply_rotation_tick();
        }
        self.refresh_geometry();
    }

    /// Install a new per-tick transform on every vertex.
    ///
    /// Vertices return to their base pose, so the geometry afterwards shows
    /// the unrotated shape.
    pub fn set_rotation(&mut self, transform: Mat4) {
        for vertex in &mut self.vertices {
            vertex.reset_transform(transform);
        }
        self.refresh_geometry();
    }

    fn refresh_geometry(&mut self) {
        self.geometry = project_geometry(self.dimension, &self.vertices, &self.path);
    }

    #[inline]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn circuit(&self) -> Option<&Circuit> {
        self.circuit.as_ref()
    }

    /// Vertices in drawing order
    pub fn path_vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.path.iter().map(|&index| &self.vertices[index])
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }
}

/// Edge set of the d-cube, enumerated from even-parity anchors.
///
/// Every hypercube edge joins one even and one odd corner, so stepping along
/// each of the `d` bits from every even corner produces each edge exactly
/// once. Enumerating from all corners would produce every edge twice.
pub fn build_edges(vertices: &[Vertex], dimension: u32) -> Result<Vec<Edge>, ShapeError> {
    let mut edges = Vec::with_capacity(hypercube::edge_count(dimension));
    for anchor in vertices.iter().filter(|v| v.is_main_corner()) {
        for bit in 0..dimension {
            edges.push(Edge::between(vertices, anchor.value(), anchor.neighbor(bit))?);
        }
    }
    Ok(edges)
}

fn project_geometry(dimension: u32, vertices: &[Vertex], path: &[usize]) -> ShapeGeometry {
    if dimension == 0 {
        ShapeGeometry::Point(vertices[0].project())
    } else {
        ShapeGeometry::Polyline(path.iter().map(|&index| vertices[index].project()).collect())
    }
}
