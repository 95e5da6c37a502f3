//! Hypercube edges

use hypercube_math::hypercube::hamming_distance;

use crate::{ShapeError, Vertex};

/// An undirected unit edge between two corners one bit apart
///
/// Stores only the two bit patterns; the vertices themselves live in the
/// owning shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    a: u32,
    b: u32,
}

impl Edge {
    /// Create an edge between two existing vertices
    pub fn new(a: &Vertex, b: &Vertex) -> Result<Self, ShapeError> {
        Self::from_values(a.value(), b.value())
    }

    /// Create an edge by looking both endpoints up in `vertices`.
    ///
    /// Fails with [`ShapeError::InvalidEdge`] if either endpoint is not
    /// present.
    pub fn between(vertices: &[Vertex], a: u32, b: u32) -> Result<Self, ShapeError> {
        let find = |value: u32| vertices.iter().find(|v| v.value() == value);
        match (find(a), find(b)) {
            (Some(va), Some(vb)) => Self::new(va, vb),
            _ => Err(ShapeError::InvalidEdge { a, b }),
        }
    }

    fn from_values(a: u32, b: u32) -> Result<Self, ShapeError> {
        if hamming_distance(a, b) != 1 {
            return Err(ShapeError::InvalidEdge { a, b });
        }
        Ok(Self { a, b })
    }

    #[inline]
    pub fn a(&self) -> u32 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> u32 {
        self.b
    }

    /// The endpoint opposite `value`, if `value` is an endpoint
    pub fn other(&self, value: u32) -> Option<u32> {
        if value == self.a {
            Some(self.b)
        } else if value == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// The two adjacency entries this edge contributes: `a -> b` and `b -> a`
    #[inline]
    pub fn adjacency(&self) -> [(u32, u32); 2] {
        [(self.a, self.b), (self.b, self.a)]
    }

    /// Endpoints ordered low-high, for set comparisons
    #[inline]
    pub fn canonical(&self) -> (u32, u32) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeOptions;

    fn vertices(dimension: u32) -> Vec<Vertex> {
        let options = ShapeOptions::default();
        (0..1u32 << dimension).map(|i| Vertex::new(i, &options)).collect()
    }

    #[test]
    fn test_edge_between_existing_vertices() {
        let vs = vertices(2);
        let edge = Edge::between(&vs, 0, 2).unwrap();
        assert_eq!(edge.a(), 0);
        assert_eq!(edge.b(), 2);
        assert_eq!(edge.adjacency(), [(0, 2), (2, 0)]);
    }

    #[test]
    fn test_missing_endpoint_is_invalid() {
        let vs = vertices(2);
        assert_eq!(Edge::between(&vs, 1, 5), Err(ShapeError::InvalidEdge { a: 1, b: 5 }));
        assert_eq!(Edge::between(&[], 0, 1), Err(ShapeError::InvalidEdge { a: 0, b: 1 }));
    }

    #[test]
    fn test_non_adjacent_corners_are_invalid() {
        let vs = vertices(2);
        assert_eq!(Edge::between(&vs, 0, 3), Err(ShapeError::InvalidEdge { a: 0, b: 3 }));
        assert_eq!(Edge::new(&vs[1], &vs[1]), Err(ShapeError::InvalidEdge { a: 1, b: 1 }));
    }

    #[test]
    fn test_other_endpoint() {
        let vs = vertices(3);
        let edge = Edge::new(&vs[5], &vs[4]).unwrap();
        assert_eq!(edge.other(5), Some(4));
        assert_eq!(edge.other(4), Some(5));
        assert_eq!(edge.other(0), None);
        assert_eq!(edge.canonical(), (4, 5));
    }
}
