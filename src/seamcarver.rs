// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - The main engine
//!
//! Holds a private copy of the image and its energy map, and hands out
//! one seam at a time.  Everything the caller sees is in the caller's
//! coordinates; horizontal operations quietly flip the data over and
//! run the vertical code, and leave it flipped for the next request.
//!
//! Deciding how many seams to take, and in which order, is left to
//! whoever drives the carver.

use crate::energy::{energy_to_image, EnergyMap};
use crate::error::{Result, SeamError};
use crate::flipper::{Orientation, Oriented};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{energy_to_seam, SeamFinder};
use crate::seamremoval::remove_seam;
use image::{GenericImageView, GrayImage, Pixel, RgbImage};
use tracing::{debug, trace};

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    data: Oriented,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a copy of an image, and computes
    /// its energy map.
    pub fn new<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::InvalidArgument("image has no pixels"));
        }
        debug!(width, height, "building seam carver");
        Ok(SeamCarver {
            data: Oriented::new(PixelGrid::from_image(image)),
        })
    }

    /// A copy of the current image.
    pub fn picture(&self) -> RgbImage {
        self.data.picture()
    }

    /// The current energy map drawn as a grayscale image.
    pub fn energy_picture(&self) -> GrayImage {
        energy_to_image(&self.data.energy_map())
    }

    /// A copy of the current energy map, one value per pixel.
    pub fn energy_map(&self) -> EnergyMap {
        self.data.energy_map()
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Energy of the pixel at column x and row y.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(SeamError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(self.data.energy_at(x, y))
    }

    /// Remove a top-to-bottom seam: one column index per row.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove(Orientation::Normal, seam)
    }

    /// Remove a left-to-right seam: one row index per column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove(Orientation::Transposed, seam)
    }

    fn find(&mut self, orientation: Orientation) -> Vec<u32> {
        self.data.orient(orientation);
        energy_to_seam(self.data.current().1)
    }

    fn remove(&mut self, orientation: Orientation, seam: &[u32]) -> Result<()> {
        if seam.is_empty() {
            return Err(SeamError::InvalidArgument("seam is empty"));
        }
        self.data.orient(orientation);
        let (grid, energy) = self.data.current_mut();
        if let Err(err) = remove_seam(grid, energy, seam) {
            debug!(?orientation, %err, "seam rejected");
            return Err(err);
        }
        trace!(
            ?orientation,
            width = self.width(),
            height = self.height(),
            "seam removed"
        );
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.find(Orientation::Transposed)
    }

    fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.find(Orientation::Normal)
    }
}
