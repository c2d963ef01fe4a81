// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Topological order by reverse depth-first postorder.
//!
//! The search starts from every unvisited vertex in ascending order
//! and follows each vertex's edges in insertion order, so the result
//! is fully determined by how the graph was built.  The walk keeps its
//! own stack rather than recursing: a seam digraph over a tall image
//! is as deep as the image is high.

use super::digraph::EdgeWeightedDigraph;
use crate::errors::{CarveError, Result};

/// A topological ordering of a digraph's vertices.
#[derive(Debug, Clone)]
pub struct Topological {
    order: Vec<usize>,
}

impl Topological {
    /// Order the vertices of `graph`, which must be acyclic.  Nothing
    /// checks this; a graph with a cycle gets back some order, but not
    /// a topological one.
    pub fn new(graph: &EdgeWeightedDigraph) -> Self {
        // Without cycle detection the search cannot fail.
        let order = reverse_postorder(graph, false).unwrap_or_default();
        Topological { order }
    }

    /// As `new`, but fails with `InvalidArgument` on the first back
    /// edge found.
    pub fn checked(graph: &EdgeWeightedDigraph) -> Result<Self> {
        Ok(Topological {
            order: reverse_postorder(graph, true)?,
        })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

fn reverse_postorder(graph: &EdgeWeightedDigraph, detect_cycles: bool) -> Result<Vec<usize>> {
    let count = graph.vertex_count();
    let mut marked = vec![false; count];
    let mut on_stack = vec![false; count];
    let mut postorder = Vec::with_capacity(count);
    // (vertex, index of the next outgoing edge to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..count {
        if marked[root] {
            continue;
        }
        marked[root] = true;
        on_stack[root] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            match graph.out_edges(v).get(next) {
                Some(edge) => {
                    top.1 += 1;
                    let w = edge.to();
                    if !marked[w] {
                        marked[w] = true;
                        on_stack[w] = true;
                        stack.push((w, 0));
                    } else if detect_cycles && on_stack[w] {
                        return Err(CarveError::InvalidArgument(format!(
                            "digraph has a cycle through {} -> {}",
                            v, w
                        )));
                    }
                }
                None => {
                    stack.pop();
                    on_stack[v] = false;
                    postorder.push(v);
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}
