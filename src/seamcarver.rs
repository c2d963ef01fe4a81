// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main struct
//!
//! The carver owns a private copy of the picture it was given.  Every
//! call is a pure function of that picture's current state: the energy
//! map and the seam digraph are rebuilt from scratch for each search
//! and thrown away afterwards.

use crate::energy::{calculate_energy, dual_gradient};
use crate::errors::{CarveError, Result};
use crate::picture::Picture;
use crate::seamfinder::SeamFinder;
use crate::seams::{self, Orientation, Seam};
use crate::twodmap::TwoDimensionalMap;
use tracing::{debug, trace};

/// A picture to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: Picture,
}

impl SeamCarver {
    /// Creates a new SeamCarver over a copy of `picture`; the caller's
    /// picture is never touched.
    pub fn new(picture: &Picture) -> Self {
        SeamCarver {
            picture: picture.clone(),
        }
    }

    /// The current, possibly carved, picture.
    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn into_picture(self) -> Picture {
        self.picture
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// Dual-gradient energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        dual_gradient(&self.picture, x, y)
    }

    /// The energy of every pixel at once.
    pub fn energy_map(&self) -> Result<TwoDimensionalMap<f64>> {
        calculate_energy(&self.picture)
    }

    /// Dump the energy matrix at trace level, one row per event.
    pub fn log_energy_matrix(&self) -> Result<()> {
        let emap = self.energy_map()?;
        for y in 0..emap.height() {
            let row: Vec<String> = emap.row(y).iter().map(|e| format!("{:8.2}", e)).collect();
            trace!("energy row {:4}: {}", y, row.join(" "));
        }
        Ok(())
    }

    /// The cheapest seam running in `orientation`.
    pub fn find_seam(&self, orientation: Orientation) -> Result<Seam> {
        let seam = seams::find_seam(&self.energy_map()?, orientation)?;
        debug!("{:?} seam: {:?}", orientation, seam);
        Ok(seam)
    }

    // The number of entries a seam of this orientation must have.
    fn seam_length(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Vertical => self.height(),
            Orientation::Horizontal => self.width(),
        }
    }

    fn check_seam_length(&self, seam: &[u32], orientation: Orientation) -> Result<()> {
        let expected = self.seam_length(orientation);
        if seam.len() != expected as usize {
            return Err(CarveError::InvalidSeam(format!(
                "expected {} entries for a {:?} seam on a {}x{} picture, got {}",
                expected,
                orientation,
                self.width(),
                self.height(),
                seam.len()
            )));
        }
        Ok(())
    }

    /// Remove a seam, shrinking the picture by one column (vertical)
    /// or one row (horizontal).
    pub fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        self.check_seam_length(seam, orientation)?;
        match orientation {
            Orientation::Vertical => self.picture.remove_vertical_seam(seam)?,
            Orientation::Horizontal => self.picture.remove_horizontal_seam(seam)?,
        }
        debug!(
            "removed {:?} seam, now {}x{}",
            orientation,
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Paint a seam with the marker color without resizing.
    pub fn highlight_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        self.check_seam_length(seam, orientation)?;
        match orientation {
            Orientation::Vertical => self.picture.highlight_vertical_seam(seam),
            Orientation::Horizontal => self.picture.highlight_horizontal_seam(seam),
        }
    }

    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    pub fn highlight_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.highlight_seam(seam, Orientation::Horizontal)
    }

    pub fn highlight_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.highlight_seam(seam, Orientation::Vertical)
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<()> {
        let seam = self.find_seam(orientation)?;
        self.remove_seam(&seam, orientation)
    }

    // This is absurdly inefficient, as the entire energy map and
    // seam digraph is recalculated every time.  It should be possible
    // to find the span of columns or rows affected by the carve and
    // recalculate only those.

    /// Given a desired new width and height, repeatedly find and remove
    /// seams, alternating direction while both dimensions are too big.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot carve down to {}x{}",
                new_width, new_height
            )));
        }
        if self.width() < new_width || self.height() < new_height {
            return Err(CarveError::InvalidArgument(format!(
                "seam carving cannot upscale {}x{} to {}x{}",
                self.width(),
                self.height(),
                new_width,
                new_height
            )));
        }

        let mut orientation = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(orientation)?;
            orientation = orientation.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
        }
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Result<Seam> {
        self.find_seam(Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Result<Seam> {
        self.find_seam(Orientation::Vertical)
    }
}
