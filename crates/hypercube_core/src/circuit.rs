//! Closed walks covering every edge
//!
//! [`Circuit::build`] merges edges into an [`AdjacencyGraph`], duplicates
//! edges until every degree is even, and then walks the result with a
//! stack-based Hierholzer traversal.

use std::collections::BTreeMap;

use crate::{AdjacencyGraph, Edge, ShapeError};

/// A closed walk that uses every edge of its (repaired) graph exactly once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    /// Graph after odd-degree repair
    graph: AdjacencyGraph,
    /// Edges added by the repair step
    repairs: usize,
    /// Vertex sequence; first and last entries are equal
    walk: Vec<u32>,
}

impl Circuit {
    /// Build a circuit over `edges`
    pub fn build(edges: &[Edge]) -> Result<Self, ShapeError> {
        if edges.is_empty() {
            return Err(ShapeError::EmptyGraph);
        }
        Self::from_graph(AdjacencyGraph::from_edges(edges))
    }

    /// Repair `graph` and walk it
    pub fn from_graph(mut graph: AdjacencyGraph) -> Result<Self, ShapeError> {
        if graph.is_empty() {
            return Err(ShapeError::EmptyGraph);
        }

        let repairs = graph.repair_odd_degrees()?;
        if !graph.is_connected() {
            return Err(ShapeError::DisconnectedGraph);
        }

        let walk = traverse(&graph);
        log::debug!(
            "Built circuit over {} vertices: {} edges ({} duplicated), walk length {}",
            graph.vertex_count(),
            graph.edge_count(),
            repairs,
            walk.len()
        );

        Ok(Self { graph, repairs, walk })
    }

    /// The vertex sequence of the walk
    #[inline]
    pub fn walk(&self) -> &[u32] {
        &self.walk
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walk.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walk.is_empty()
    }

    /// Graph the walk was taken on, repair duplicates included
    #[inline]
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// How many edges the repair step duplicated
    #[inline]
    pub fn repairs(&self) -> usize {
        self.repairs
    }

    /// True if the walk ends where it starts
    pub fn is_closed(&self) -> bool {
        self.walk.first() == self.walk.last()
    }

    /// Consecutive vertex pairs of the walk
    pub fn steps(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.walk.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Stack-based Hierholzer walk on a private copy of the adjacency lists.
///
/// The top of the stack takes its last remaining neighbour, and the matching
/// back-reference is removed from that neighbour's list so the edge is used
/// up in both directions. A vertex with nothing left is popped onto the walk.
fn traverse(graph: &AdjacencyGraph) -> Vec<u32> {
    let mut remaining: BTreeMap<u32, Vec<u32>> = graph.lists().clone();
    let Some(start) = graph.vertices().next() else {
        return Vec::new();
    };

    let mut stack = vec![start];
    let mut walk = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&current) = stack.last() {
        match remaining.get_mut(&current).and_then(Vec::pop) {
            Some(next) => {
                if let Some(back) = remaining.get_mut(&next) {
                    if let Some(index) = back.iter().position(|&n| n == current) {
                        back.remove(index);
                    }
                }
                stack.push(next);
            }
            None => {
                stack.pop();
                walk.push(current);
            }
        }
    }

    walk
}
