// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A seam is a connected path of pixels, one per row or one per
//! column, whose total energy is as small as possible.  Finding one is
//! reduced to a shortest path over an acyclic digraph built from the
//! picture's energy map; removing one shrinks the picture by exactly
//! one column or row.
//!
//! ```no_run
//! use graphseam::{Picture, SeamCarver, SeamFinder};
//!
//! let img = image::open("in.png").unwrap();
//! let picture = Picture::from_dynamic_image(&img).unwrap();
//! let mut carver = SeamCarver::new(&picture);
//! let seam = carver.find_vertical_seam().unwrap();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.picture().to_rgb_image().save("out.png").unwrap();
//! ```

pub mod color;
pub mod energy;
pub mod errors;
pub mod graph;
pub mod picture;
pub mod seamcarver;
pub mod seamfinder;
pub mod seams;
pub mod twodmap;

pub use color::Color;
pub use energy::{calculate_energy, dual_gradient, energy_to_image};
pub use errors::{CarveError, Result};
pub use picture::Picture;
pub use seamcarver::SeamCarver;
pub use seamfinder::SeamFinder;
pub use seams::{Orientation, Seam};
pub use twodmap::TwoDimensionalMap;
