// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::errors::{CarveError, Result};
use std::fmt;

/// A weighted arc from one vertex to another.  Immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    /// Fails if the weight is negative, NaN, or infinite.
    pub fn new(from: usize, to: usize, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(CarveError::InvalidArgument(format!(
                "edge {} -> {} needs a finite, non-negative weight, got {}",
                from, to, weight
            )));
        }
        Ok(DirectedEdge { from, to, weight })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
