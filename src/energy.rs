// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a picture
//!
//! The dual-gradient energy function: a pixel's importance is the
//! square root of the squared color distance between its left and
//! right neighbors plus that between its upper and lower neighbors.
//! Pixels on the frame get a fixed, deliberately high energy so that
//! seams stay off the border.

use crate::color::Color;
use crate::errors::{CarveError, Result};
use crate::picture::Picture;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::{iproduct, Itertools};
use num_traits::{cast, pow};

/// The energy of every pixel on the edge of the picture.
pub const BORDER_ENERGY: f64 = 1000.0;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
fn energy_of_pair(p1: &Color, p2: &Color) -> u32 {
    let (c1s, c2s) = (p1.channels(), p2.channels());
    c1s.iter()
        .zip_eq(c2s.iter())
        .map(|(&c1, &c2)| pow(i32::from(c1) - i32::from(c2), 2) as u32)
        .sum()
}

/// The dual-gradient energy of the pixel at column `x`, row `y`.
pub fn dual_gradient(picture: &Picture, x: u32, y: u32) -> Result<f64> {
    let (width, height) = picture.dimensions();
    if x >= width {
        return Err(CarveError::out_of_bounds("column", x as usize, width as usize));
    }
    if y >= height {
        return Err(CarveError::out_of_bounds("row", y as usize, height as usize));
    }
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return Ok(BORDER_ENERGY);
    }

    let delta_x = energy_of_pair(&picture.get(x - 1, y)?, &picture.get(x + 1, y)?);
    let delta_y = energy_of_pair(&picture.get(x, y - 1)?, &picture.get(x, y + 1)?);
    Ok(f64::from(delta_x + delta_y).sqrt())
}

/// Compute the energy of every pixel in a picture.
pub fn calculate_energy(picture: &Picture) -> Result<TwoDimensionalMap<f64>> {
    let (width, height) = picture.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = dual_gradient(picture, x, y)?;
    }
    Ok(emap)
}

/// Render an energy map as a grayscale image, scaled so the most
/// energetic pixel is white.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = if factor > 0.0 {
            energy[(x, y)] * 255.0 / factor
        } else {
            0.0
        };
        Luma([cast::<f64, u8>(scaled.round().min(255.0)).unwrap_or(0)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 3x4 picture from the Princeton assignment this energy
    // function comes from, with its published energies.
    const PIXELS: [u8; 36] = [
        255, 101, 51, 255, 101, 153, 255, 101, 255, //
        255, 153, 51, 255, 153, 153, 255, 153, 255, //
        255, 203, 51, 255, 204, 153, 255, 205, 255, //
        255, 255, 51, 255, 255, 153, 255, 255, 255,
    ];

    fn sample() -> Picture {
        Picture::from_raw_rgb(3, 4, &PIXELS).unwrap()
    }

    #[test]
    fn pair_energy_sums_squared_channel_differences() {
        let a = Color::new(255, 101, 51);
        let b = Color::new(255, 153, 255);
        assert_eq!(energy_of_pair(&a, &b), 52 * 52 + 204 * 204);
        assert_eq!(energy_of_pair(&b, &a), energy_of_pair(&a, &b));
        assert_eq!(energy_of_pair(&a, &a), 0);
        let (black, white) = (Color::new(0, 0, 0), Color::new(255, 255, 255));
        assert_eq!(energy_of_pair(&black, &white), 3 * 255 * 255);
    }

    #[test]
    fn border_pixels_are_fixed() {
        let picture = sample();
        for (x, y) in &[(0, 0), (2, 0), (0, 1), (2, 2), (1, 3), (1, 0)] {
            assert_eq!(dual_gradient(&picture, *x, *y).unwrap(), BORDER_ENERGY);
        }
    }

    #[test]
    fn interior_pixels_use_both_gradients() {
        let picture = sample();
        // (1, 1): 204² across plus 103² down.
        assert_eq!(dual_gradient(&picture, 1, 1).unwrap(), 52225f64.sqrt());
        // (1, 2): 2² + 204² across plus 102² down.
        assert_eq!(dual_gradient(&picture, 1, 2).unwrap(), 52024f64.sqrt());
    }

    #[test]
    fn flat_neighborhood_has_no_energy() {
        let mut picture = Picture::new(3, 3).unwrap();
        picture.set(1, 1, Color::new(255, 255, 255)).unwrap();
        assert_eq!(dual_gradient(&picture, 1, 1).unwrap(), 0.0);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let picture = sample();
        assert!(matches!(
            dual_gradient(&picture, 3, 0),
            Err(CarveError::OutOfBounds { what: "column", .. })
        ));
        assert!(matches!(
            dual_gradient(&picture, 0, 4),
            Err(CarveError::OutOfBounds { what: "row", .. })
        ));
    }

    #[test]
    fn energy_map_matches_pointwise_energy() {
        let picture = sample();
        let emap = calculate_energy(&picture).unwrap();
        assert_eq!(emap.dimensions(), (3, 4));
        for (y, x) in iproduct!(0..4, 0..3) {
            assert_eq!(emap[(x, y)], dual_gradient(&picture, x, y).unwrap());
        }
    }

    #[test]
    fn energy_image_is_normalized() {
        let emap = calculate_energy(&sample()).unwrap();
        let img = energy_to_image(&emap);
        assert_eq!(img.dimensions(), (3, 4));
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(1, 1).0[0], 58);
    }
}
