// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-source shortest paths over an acyclic digraph.
//!
//! Relaxing every vertex's edges once, in topological order, is
//! enough: by the time a vertex is used as a relaxation source every
//! edge into it has already been seen, so its distance is final.  No
//! priority queue, O(V + E).

use super::digraph::EdgeWeightedDigraph;
use super::edge::DirectedEdge;
use super::topological::Topological;
use crate::errors::{CarveError, Result};

/// The shortest-path tree rooted at one source vertex.
#[derive(Debug, Clone)]
pub struct AcyclicShortestPath {
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl AcyclicShortestPath {
    /// Solve from `source`.  `graph` must be acyclic.
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let count = graph.vertex_count();
        if source >= count {
            return Err(CarveError::out_of_bounds("source vertex", source, count));
        }

        let mut sp = AcyclicShortestPath {
            dist_to: vec![std::f64::INFINITY; count],
            edge_to: vec![None; count],
        };
        sp.dist_to[source] = 0.0;

        for &v in Topological::new(graph).order() {
            for edge in graph.out_edges(v) {
                sp.relax(edge);
            }
        }
        Ok(sp)
    }

    // Strictly-less keeps the first edge found on a tie.
    fn relax(&mut self, edge: &DirectedEdge) {
        let (v, w) = (edge.from(), edge.to());
        let candidate = self.dist_to[v] + edge.weight();
        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(*edge);
        }
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.dist_to.len() {
            return Err(CarveError::out_of_bounds("vertex", v, self.dist_to.len()));
        }
        Ok(())
    }

    /// Length of the shortest path to `v`; infinite if unreachable.
    pub fn dist_to(&self, v: usize) -> Result<f64> {
        self.check_vertex(v)?;
        Ok(self.dist_to[v])
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)?.is_finite())
    }

    /// The edges of the shortest path from the source to `v`, in
    /// travel order.  Empty if `v` is unreachable or is the source.
    pub fn path_to(&self, v: usize) -> Result<Vec<DirectedEdge>> {
        self.check_vertex(v)?;
        let mut path = Vec::new();
        let mut cursor = self.edge_to[v];
        while let Some(edge) = cursor {
            path.push(edge);
            cursor = self.edge_to[edge.from()];
        }
        path.reverse();
        Ok(path)
    }
}
