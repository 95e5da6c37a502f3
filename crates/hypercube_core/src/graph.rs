//! Adjacency lists keyed by vertex bit pattern
//!
//! Neighbour lists are sequences, not sets: after odd-degree repair a
//! neighbour can appear twice, and each copy is a separate edge to walk.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::{Edge, ShapeError};

/// Undirected multigraph as `vertex -> neighbours`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<u32, Vec<u32>>,
}

impl AdjacencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the adjacency entries of every edge.
    ///
    /// An entry already present for a vertex is not added again, so listing
    /// the same edge twice yields a single edge.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            for (from, to) in edge.adjacency() {
                let neighbors = graph.adjacency.entry(from).or_default();
                if !neighbors.contains(&to) {
                    neighbors.push(to);
                }
            }
        }
        graph
    }

    /// Neighbour list of `vertex` (empty if the vertex is unknown)
    pub fn neighbors(&self, vertex: u32) -> &[u32] {
        self.adjacency.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, vertex: u32) -> usize {
        self.neighbors(vertex).len()
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        self.adjacency.keys().copied()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total adjacency entries over all vertices (twice the edge count)
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of undirected edges, duplicates included
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.entry_count() / 2
    }

    /// Vertices of odd degree, ascending
    pub fn odd_vertices(&self) -> Vec<u32> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.len() % 2 != 0)
            .map(|(&vertex, _)| vertex)
            .collect()
    }

    /// True if every vertex can reach every other one
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };

        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &next in self.neighbors(vertex) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len() == self.vertex_count()
    }

    /// Connected with every degree even
    pub fn is_eulerian(&self) -> bool {
        self.odd_vertices().is_empty() && self.is_connected()
    }

    /// Pair up odd-degree vertices by duplicating an edge between them.
    ///
    /// Odd vertices are taken from the back of the worklist. Each one is
    /// paired with the first vertex in its own neighbour list that is still
    /// odd, and that edge gets a second copy. This is a local pairing, not a
    /// general matching: it only works when every odd vertex still has an odd
    /// neighbour when its turn comes, which holds for the 1-cube and the 3-cube.
    ///
    /// Returns the number of edges duplicated. On failure the graph may be
    /// partly repaired; callers work on a copy.
    pub fn repair_odd_degrees(&mut self) -> Result<usize, ShapeError> {
        let mut odd = self.odd_vertices();
        let mut duplicated = 0;

        while let Some(v1) = odd.pop() {
            let partner = self
                .neighbors(v1)
                .iter()
                .find_map(|n| odd.iter().position(|o| o == n));
            let Some(index) = partner else {
                return Err(ShapeError::UnresolvableOddVertex { vertex: v1 });
            };
            let v2 = odd.remove(index);

            self.adjacency.entry(v1).or_default().push(v2);
            self.adjacency.entry(v2).or_default().push(v1);
            duplicated += 1;
        }

        Ok(duplicated)
    }

    pub(crate) fn lists(&self) -> &BTreeMap<u32, Vec<u32>> {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShapeOptions, Vertex};

    fn edges(pairs: &[(u32, u32)]) -> Vec<Edge> {
        let options = ShapeOptions::default();
        let vertices: Vec<Vertex> = (0..16).map(|i| Vertex::new(i, &options)).collect();
        pairs
            .iter()
            .map(|&(a, b)| Edge::between(&vertices, a, b).unwrap())
            .collect()
    }

    #[test]
    fn test_from_edges_is_bidirectional() {
        let graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (0, 2)]));
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert_eq!(graph.entry_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_from_edges_merges_duplicates() {
        let graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (1, 0), (0, 1)]));
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn test_unknown_vertex_has_no_neighbors() {
        let graph = AdjacencyGraph::from_edges(&edges(&[(0, 1)]));
        assert!(graph.neighbors(9).is_empty());
        assert_eq!(graph.degree(9), 0);
    }

    #[test]
    fn test_odd_vertices() {
        // Path 1 - 0 - 2: ends are odd, middle is even
        let graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (0, 2)]));
        assert_eq!(graph.odd_vertices(), vec![1, 2]);
    }

    #[test]
    fn test_connectivity() {
        let connected = AdjacencyGraph::from_edges(&edges(&[(0, 1), (1, 3), (3, 2)]));
        assert!(connected.is_connected());

        let split = AdjacencyGraph::from_edges(&edges(&[(0, 1), (6, 7)]));
        assert!(!split.is_connected());

        assert!(AdjacencyGraph::new().is_connected());
    }

    #[test]
    fn test_repair_single_edge() {
        let mut graph = AdjacencyGraph::from_edges(&edges(&[(0, 1)]));
        assert_eq!(graph.repair_odd_degrees(), Ok(1));
        assert_eq!(graph.neighbors(0), &[1, 1]);
        assert_eq!(graph.neighbors(1), &[0, 0]);
        assert!(graph.is_eulerian());
    }

    #[test]
    fn test_repair_noop_when_even() {
        let mut graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (1, 3), (3, 2), (2, 0)]));
        let before = graph.clone();
        assert_eq!(graph.repair_odd_degrees(), Ok(0));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_repair_path_with_distant_ends_fails() {
        // 1 - 0 - 2 - 6 - 7: only the two ends are odd and they are far apart
        let mut graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (0, 2), (2, 6), (6, 7)]));
        assert_eq!(graph.odd_vertices(), vec![1, 7]);
        assert_eq!(
            graph.repair_odd_degrees(),
            Err(ShapeError::UnresolvableOddVertex { vertex: 7 })
        );
    }

    #[test]
    fn test_repair_star_fails_explicitly() {
        // Centre 0 with three leaves: 4 pairs with 0, then 2 has no odd neighbour
        let mut graph = AdjacencyGraph::from_edges(&edges(&[(0, 1), (0, 2), (0, 4)]));
        assert_eq!(graph.odd_vertices(), vec![0, 1, 2, 4]);
        assert_eq!(
            graph.repair_odd_degrees(),
            Err(ShapeError::UnresolvableOddVertex { vertex: 2 })
        );
    }
}
