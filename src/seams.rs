// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam search as shortest path
//!
//! Every pixel becomes a vertex, numbered exactly as the energy map
//! indexes it (`y * width + x`), plus a super-source and a super-sink.
//! The picture is cut into *layers* (rows for a vertical seam, columns
//! for a horizontal one); each pixel gets an edge to its up to three
//! neighbors in the next layer, weighted by its own energy.  The source
//! feeds the first layer for free and the last layer drains into the
//! sink at its own energy, so every pixel on a path is counted once.
//!
//! Both orientations share one builder.  `Layout` maps a (position,
//! layer) pair to picture coordinates and a vertex back to the index a
//! seam records; nothing else knows which way the seam runs.

use crate::errors::{CarveError, Result};
use crate::graph::{AcyclicShortestPath, DirectedEdge, EdgeWeightedDigraph};
use crate::twodmap::TwoDimensionalMap;
use tracing::trace;

/// One index per layer: the column removed from each row of a vertical
/// seam, or the row removed from each column of a horizontal one.
pub type Seam = Vec<u32>;

/// Which way a seam runs across the picture.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Top to bottom, one pixel per row.  Removing it narrows the
    /// picture.
    Vertical,
    /// Left to right, one pixel per column.  Removing it shortens the
    /// picture.
    Horizontal,
}

impl Orientation {
    /// The other one.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

// Maps (position within a layer, layer) to picture coordinates for a
// given orientation.
#[derive(Debug, Copy, Clone)]
struct Layout {
    width: u32,
    height: u32,
    orientation: Orientation,
}

impl Layout {
    fn layers(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    fn span(&self) -> u32 {
        match self.orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    fn point(&self, position: u32, layer: u32) -> (u32, u32) {
        match self.orientation {
            Orientation::Vertical => (position, layer),
            Orientation::Horizontal => (layer, position),
        }
    }

    // The inverse of the vertex numbering, projected onto the axis the
    // seam records.
    fn position_of(&self, vertex: usize) -> u32 {
        let width = self.width as usize;
        match self.orientation {
            Orientation::Vertical => (vertex % width) as u32,
            Orientation::Horizontal => (vertex / width) as u32,
        }
    }
}

/// The seam-search digraph for one orientation of one energy map.
#[derive(Debug)]
pub struct SeamDigraph {
    graph: EdgeWeightedDigraph,
    source: usize,
    sink: usize,
    layout: Layout,
}

impl SeamDigraph {
    /// Build the digraph.  Edge insertion order is fixed (source and
    /// sink edges per position first, then layer by layer, neighbors in
    /// ascending position) so that ties always resolve the same way.
    pub fn build(energy: &TwoDimensionalMap<f64>, orientation: Orientation) -> Result<Self> {
        let (width, height) = energy.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot search a {}x{} energy map for seams",
                width, height
            )));
        }
        let layout = Layout {
            width,
            height,
            orientation,
        };
        let pixels = width as usize * height as usize;
        let (source, sink) = (pixels, pixels + 1);
        let mut graph = EdgeWeightedDigraph::new(pixels + 2);

        let vertex = |position, layer| {
            let (x, y) = layout.point(position, layer);
            energy.get_index(x, y)
        };
        let weight = |position, layer| energy[layout.point(position, layer)];

        let last = layout.layers() - 1;
        for position in 0..layout.span() {
            graph.add_edge(DirectedEdge::new(source, vertex(position, 0), 0.0)?)?;
            graph.add_edge(DirectedEdge::new(
                vertex(position, last),
                sink,
                weight(position, last),
            )?)?;
        }

        let max_position = layout.span() - 1;
        for layer in 0..last {
            for position in 0..layout.span() {
                let from = vertex(position, layer);
                let e = weight(position, layer);
                let low = if position == 0 { 0 } else { position - 1 };
                let high = if position == max_position {
                    max_position
                } else {
                    position + 1
                };
                for next in low..=high {
                    graph.add_edge(DirectedEdge::new(from, vertex(next, layer + 1), e)?)?;
                }
            }
        }

        trace!(
            "{:?} seam digraph: {} vertices, {} edges",
            orientation,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(SeamDigraph {
            graph,
            source,
            sink,
            layout,
        })
    }

    pub fn graph(&self) -> &EdgeWeightedDigraph {
        &self.graph
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Solve the digraph and read the seam off the shortest path,
    /// together with its total energy.
    pub fn shortest_seam(&self) -> Result<(Seam, f64)> {
        let sp = AcyclicShortestPath::new(&self.graph, self.source)?;
        let seam = sp
            .path_to(self.sink)?
            .iter()
            .map(DirectedEdge::to)
            .filter(|&v| v != self.sink)
            .map(|v| self.layout.position_of(v))
            .collect();
        Ok((seam, sp.dist_to(self.sink)?))
    }
}

/// Given an energy map, find the cheapest seam running in the given
/// orientation.
pub fn find_seam(energy: &TwoDimensionalMap<f64>, orientation: Orientation) -> Result<Seam> {
    let (seam, _) = SeamDigraph::build(energy, orientation)?.shortest_seam()?;
    Ok(seam)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., //
        9., 1., 9., 8., 9., //
        9., 9., 9., 9., 0., //
        9., 9., 9., 0., 9.,
    ];

    fn energies() -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let (seam, cost) = SeamDigraph::build(&energies(), Orientation::Vertical)
            .unwrap()
            .shortest_seam()
            .unwrap();
        assert_eq!(seam, vec![2, 3, 4, 3]);
        assert_eq!(cost, 8.0);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let (seam, cost) = SeamDigraph::build(&energies(), Orientation::Horizontal)
            .unwrap()
            .shortest_seam()
            .unwrap();
        // Three rows tie on the first column; the bottom-most one that
        // reaches (1, 1) is relaxed first.
        assert_eq!(seam, vec![2, 1, 0, 1, 2]);
        assert_eq!(cost, 18.0);
    }

    #[test]
    fn empty_map_is_rejected() {
        let empty: TwoDimensionalMap<f64> = TwoDimensionalMap::new(0, 3);
        assert!(matches!(
            find_seam(&empty, Orientation::Vertical),
            Err(CarveError::InvalidArgument(_))
        ));
    }

    #[test]
    fn digraph_shape() {
        // 5 sources + 5 sinks, then rows 0..3 with 2 + 3 + 3 + 3 + 2
        // edges each.
        let sd = SeamDigraph::build(&energies(), Orientation::Vertical).unwrap();
        assert_eq!(sd.graph().vertex_count(), 22);
        assert_eq!(sd.graph().edge_count(), 10 + 3 * 13);
        assert_eq!((sd.source(), sd.sink()), (20, 21));
        let heads: Vec<usize> = sd
            .graph()
            .adjacent(6)
            .unwrap()
            .iter()
            .map(|e| e.to())
            .collect();
        assert_eq!(heads, vec![10, 11, 12]);
        assert!(sd.graph().adjacent(6).unwrap().iter().all(|e| e.weight() == 1.0));
    }

    #[test]
    fn single_layer_and_single_position() {
        let row = TwoDimensionalMap::from_vec(3, 1, vec![5.0, 2.0, 7.0]).unwrap();
        assert_eq!(find_seam(&row, Orientation::Vertical).unwrap(), vec![1]);
        assert_eq!(
            find_seam(&row, Orientation::Horizontal).unwrap(),
            vec![0, 0, 0]
        );
        let pixel = TwoDimensionalMap::from_vec(1, 1, vec![1000.0]).unwrap();
        assert_eq!(find_seam(&pixel, Orientation::Vertical).unwrap(), vec![0]);
        assert_eq!(find_seam(&pixel, Orientation::Horizontal).unwrap(), vec![0]);
    }

    #[test]
    fn layout_maps_both_orientations_onto_one_numbering() {
        let (width, height) = (4u32, 3u32);
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let layout = Layout {
                width,
                height,
                orientation,
            };
            assert_eq!(layout.layers() * layout.span(), width * height);
            for layer in 0..layout.layers() {
                for position in 0..layout.span() {
                    let (x, y) = layout.point(position, layer);
                    assert!(x < width && y < height);
                    let vertex = (y * width + x) as usize;
                    assert_eq!(layout.position_of(vertex), position);
                }
            }
        }
        let vertical = Layout {
            width,
            height,
            orientation: Orientation::Vertical,
        };
        assert_eq!((vertical.layers(), vertical.span()), (3, 4));
        assert_eq!(vertical.point(1, 2), (1, 2));
        let horizontal = Layout {
            orientation: Orientation::Horizontal,
            ..vertical
        };
        assert_eq!((horizontal.layers(), horizontal.span()), (4, 3));
        assert_eq!(horizontal.point(1, 2), (2, 1));
    }

    #[test]
    fn turning_twice_is_identity() {
        assert_eq!(Orientation::Vertical.turn(), Orientation::Horizontal);
        assert_eq!(Orientation::Vertical.turn().turn(), Orientation::Vertical);
    }
}
