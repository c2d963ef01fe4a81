// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::edge::DirectedEdge;
use crate::errors::{CarveError, Result};
use std::fmt;

/// An append-only, edge-weighted directed graph over the vertices
/// `0..vertex_count`.  Each vertex keeps its outgoing edges in
/// insertion order, which is what makes seam search deterministic.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph {
    adj: Vec<Vec<DirectedEdge>>,
    edge_count: usize,
}

impl EdgeWeightedDigraph {
    pub fn new(vertex_count: usize) -> Self {
        EdgeWeightedDigraph {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.adj.len() {
            return Err(CarveError::out_of_bounds("vertex", v, self.adj.len()));
        }
        Ok(())
    }

    /// Append `e` to the adjacency list of its tail.
    pub fn add_edge(&mut self, e: DirectedEdge) -> Result<()> {
        self.check_vertex(e.from())?;
        self.check_vertex(e.to())?;
        self.adj[e.from()].push(e);
        self.edge_count += 1;
        Ok(())
    }

    /// The edges leaving `v`, in the order they were added.
    pub fn adjacent(&self, v: usize) -> Result<&[DirectedEdge]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    // Unchecked access for the traversals in this module tree, which
    // only ever walk vertices they got from the graph itself.
    pub(crate) fn out_edges(&self, v: usize) -> &[DirectedEdge] {
        &self.adj[v]
    }

    /// Every edge, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.adj.iter().flatten()
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;
        for (v, edges) in self.adj.iter().enumerate() {
            write!(f, "  {}:", v)?;
            for e in edges {
                write!(f, " {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: usize, to: usize, weight: f64) -> DirectedEdge {
        DirectedEdge::new(from, to, weight).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut g = EdgeWeightedDigraph::new(4);
        g.add_edge(edge(0, 3, 1.0)).unwrap();
        g.add_edge(edge(0, 1, 2.0)).unwrap();
        g.add_edge(edge(2, 0, 0.5)).unwrap();
        let heads: Vec<usize> = g.adjacent(0).unwrap().iter().map(|e| e.to()).collect();
        assert_eq!(heads, vec![3, 1]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges().count(), 3);
        assert!(g.adjacent(3).unwrap().is_empty());
    }

    #[test]
    fn rejects_foreign_vertices() {
        let mut g = EdgeWeightedDigraph::new(2);
        assert_eq!(
            g.add_edge(edge(0, 2, 1.0)),
            Err(CarveError::OutOfBounds {
                what: "vertex",
                index: 2,
                bound: 2
            })
        );
        assert!(g.add_edge(edge(5, 0, 1.0)).is_err());
        assert!(g.adjacent(2).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn empty_graph_is_legal() {
        let g = EdgeWeightedDigraph::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.to_string(), "0 vertices, 0 edges\n");
    }
}
