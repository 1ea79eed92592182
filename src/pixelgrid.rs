// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! An owned RGB copy of the image being carved.  It never shares
//! storage with the caller: it is copied in on construction and copied
//! out again by `to_image`.  It presents itself to the rest of the
//! world as an ImageRS `GenericImageView`, which is how the flipper
//! and the snapshot code read it.

use crate::error::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Rgb<u8>>,
}

impl PixelGrid {
    /// Copy any eight-bit image into a new grid, converting each pixel
    /// to RGB.
    pub fn from_image<I, P>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        let (width, height) = image.dimensions();
        PixelGrid {
            pixels: TwoDimensionalMap::from_fn(width, height, |x, y| {
                image.get_pixel(x, y).to_rgb()
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        self.check(x, y)?;
        Ok(self.pixels[(x, y)])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb<u8>) -> Result<()> {
        self.check(x, y)?;
        self.pixels[(x, y)] = color;
        Ok(())
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.pixels.contains(x, y) {
            Ok(())
        } else {
            Err(SeamError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Remove the pixel at `seam[y]` from every row.  See
    /// `TwoDimensionalMap::splice_out_column` for the preconditions.
    pub fn splice_out_column(&mut self, seam: &[u32]) {
        self.pixels.splice_out_column(seam)
    }

    pub fn transpose(&self) -> Self {
        PixelGrid {
            pixels: self.pixels.transpose(),
        }
    }

    /// A deep copy of the grid, as an ordinary image.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self.pixels[(x, y)])
    }
}

impl GenericImageView for PixelGrid {
    type Pixel = Rgb<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        (0, 0, self.pixels.width, self.pixels.height)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.pixels[(x, y)]
    }
}
