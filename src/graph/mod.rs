// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The minimal weighted-graph toolkit the seam search is reduced to:
//! edges, an adjacency-list digraph, topological order, and shortest
//! paths over acyclic graphs.

mod digraph;
mod edge;
mod shortest_path;
mod topological;

pub use digraph::EdgeWeightedDigraph;
pub use edge::DirectedEdge;
pub use shortest_path::AcyclicShortestPath;
pub use topological::Topological;
