// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the picture, the graph, and the seam carver.

use thiserror::Error;

/// Everything that can go wrong inside the carving engine.  None of
/// these are retryable; all of them are raised before any mutation
/// takes place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarveError {
    /// Malformed constructor input: zero dimensions, a pixel buffer of
    /// the wrong length, a negative or non-finite edge weight.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate, seam entry or vertex outside its valid range.
    #[error("{what} {index} out of bounds (must be less than {bound})")]
    OutOfBounds {
        what: &'static str,
        index: usize,
        bound: usize,
    },

    /// A seam that cannot be applied to the picture as it stands.
    #[error("Invalid seam: {0}")]
    InvalidSeam(String),
}

impl CarveError {
    pub(crate) fn out_of_bounds(what: &'static str, index: usize, bound: usize) -> Self {
        CarveError::OutOfBounds { what, index, bound }
    }
}

/// Type alias for Result with the carving error type.
pub type Result<T> = std::result::Result<T, CarveError>;
