// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A plain three-channel, eight-bit color.

use image::{Rgb, Rgba};

/// An immutable RGB triple.  Equality is structural.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// The color painted over a highlighted seam.
    pub const MARKER: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// The channels in (R, G, B) order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb<u8>> for Color {
    fn from(p: Rgb<u8>) -> Self {
        let [r, g, b] = p.0;
        Color::new(r, g, b)
    }
}

// Alpha is dropped on the way in.
impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, _] = p.0;
        Color::new(r, g, b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb(c.channels())
    }
}

// ... and always comes back fully opaque.
impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_dropped_and_restored_opaque() {
        let c = Color::from(Rgba([10, 20, 30, 7]));
        assert_eq!(c, Color::new(10, 20, 30));
        assert_eq!(Rgba::<u8>::from(c), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default().channels(), [0, 0, 0]);
    }
}
