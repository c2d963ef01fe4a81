// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Picture - the mutable pixel store
//!
//! The only thing in the crate allowed to change its own size.  A
//! picture is ingested from an `image` buffer or a flat byte slice,
//! shrunk one row or column at a time by seam removal, and exported
//! back out as an `image` buffer.  Every mutation validates the whole
//! seam first, so a failed call leaves the picture untouched.

use crate::color::Color;
use crate::errors::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage};
use itertools::iproduct;

/// A rectangular grid of colors, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pixels: TwoDimensionalMap<Color>,
}

impl Picture {
    /// A black picture of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Picture {
            pixels: TwoDimensionalMap::new(width, height),
        })
    }

    /// Ingest a flat row-major buffer of `channels` bytes per pixel,
    /// keeping only the first three.
    fn from_raw(width: u32, height: u32, data: &[u8], channels: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(CarveError::InvalidArgument(format!(
                "a {}x{} buffer needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        let mut pixels = TwoDimensionalMap::new(width, height);
        iproduct!(0..height, 0..width)
            .zip(data.chunks_exact(channels))
            .for_each(|((y, x), p)| pixels[(x, y)] = Color::new(p[0], p[1], p[2]));
        Ok(Picture { pixels })
    }

    /// Ingest `width * height` RGB triples in row-major order.
    pub fn from_raw_rgb(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Picture::from_raw(width, height, data, 3)
    }

    /// Ingest `width * height` RGBA quads in row-major order.  Alpha is
    /// ignored.
    pub fn from_raw_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Picture::from_raw(width, height, data, 4)
    }

    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        Picture::from_raw_rgb(image.width(), image.height(), image.as_raw())
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self> {
        Picture::from_raw_rgba(image.width(), image.height(), image.as_raw())
    }

    /// Ingest anything the `image` crate can decode, converting it to
    /// eight-bit RGB first.
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        Picture::from_rgb_image(&image.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// The color at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        self.check_point(x, y)?;
        Ok(self.pixels[(x, y)])
    }

    /// Overwrite the color at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check_point(x, y)?;
        self.pixels[(x, y)] = color;
        Ok(())
    }

    fn check_point(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() {
            return Err(CarveError::out_of_bounds(
                "column",
                x as usize,
                self.width() as usize,
            ));
        }
        if y >= self.height() {
            return Err(CarveError::out_of_bounds(
                "row",
                y as usize,
                self.height() as usize,
            ));
        }
        Ok(())
    }

    /// Export as an RGB buffer at the current size.
    pub fn to_rgb_image(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| self.pixels[(x, y)].into())
    }

    /// Export as an RGBA buffer at the current size, fully opaque.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let (width, height) = self.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| self.pixels[(x, y)].into())
    }

    /// Delete one pixel per column, at row `seam[x]`, shifting the
    /// pixels below it up by one.  The picture loses one row.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_seam(seam, self.width(), self.height(), "horizontal", "row")?;
        if self.height() == 1 {
            return Err(CarveError::InvalidSeam(
                "cannot remove a horizontal seam from a picture one row high".to_string(),
            ));
        }

        let (width, height) = self.dimensions();
        let mut carved = TwoDimensionalMap::new(width, height - 1);
        for (x, y) in iproduct!(0..width, 0..height) {
            let seam_row = seam[x as usize];
            if y != seam_row {
                carved[(x, if y < seam_row { y } else { y - 1 })] = self.pixels[(x, y)];
            }
        }
        self.pixels = carved;
        Ok(())
    }

    /// Delete one pixel per row, at column `seam[y]`, shifting the
    /// pixels right of it left by one.  The picture loses one column.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_seam(seam, self.height(), self.width(), "vertical", "column")?;
        if self.width() == 1 {
            return Err(CarveError::InvalidSeam(
                "cannot remove a vertical seam from a picture one column wide".to_string(),
            ));
        }

        let (width, height) = self.dimensions();
        let mut carved = TwoDimensionalMap::new(width - 1, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let seam_col = seam[y as usize];
            if x != seam_col {
                carved[(if x < seam_col { x } else { x - 1 }, y)] = self.pixels[(x, y)];
            }
        }
        self.pixels = carved;
        Ok(())
    }

    /// Paint a horizontal seam with the marker color.  Size unchanged.
    pub fn highlight_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_seam(seam, self.width(), self.height(), "horizontal", "row")?;
        for (x, &y) in seam.iter().enumerate() {
            self.pixels[(x as u32, y)] = Color::MARKER;
        }
        Ok(())
    }

    /// Paint a vertical seam with the marker color.  Size unchanged.
    pub fn highlight_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.check_seam(seam, self.height(), self.width(), "vertical", "column")?;
        for (y, &x) in seam.iter().enumerate() {
            self.pixels[(x, y as u32)] = Color::MARKER;
        }
        Ok(())
    }

    // A seam has one entry per `length` and every entry must name a
    // pixel that exists across `span`.
    fn check_seam(
        &self,
        seam: &[u32],
        length: u32,
        span: u32,
        kind: &str,
        what: &'static str,
    ) -> Result<()> {
        if seam.len() != length as usize {
            return Err(CarveError::InvalidSeam(format!(
                "a {} seam on a {}x{} picture needs {} entries, got {}",
                kind,
                self.width(),
                self.height(),
                length,
                seam.len()
            )));
        }
        match seam.iter().find(|&&i| i >= span) {
            Some(&i) => Err(CarveError::out_of_bounds(what, i as usize, span as usize)),
            None => Ok(()),
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidArgument(format!(
            "picture dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}
