// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! The seam finder and the seam remover only know how to deal with
//! vertical seams.  Horizontal seams are handled by flipping the
//! pixel grid and the energy map over their diagonal, so that what
//! used to be a column is now stored as a contiguous row, and then
//! running the vertical code unchanged.
//!
//! `Oriented` keeps track of which way up the data currently sits and
//! translates between that and the caller's coordinates.  `Flipper`
//! is a read-only proxy for the ImageRS `GenericImageView` trait that
//! maps the width to the height, and every x to y, without copying.

use crate::energy::{calculate_energy, EnergyMap};
use crate::pixelgrid::PixelGrid;
use image::{GenericImageView, ImageBuffer, Pixel, RgbImage};
use tracing::trace;

pub struct Flipper<'a, I>
where
    I: GenericImageView,
{
    pub image: &'a I,
}

impl<'a, I> GenericImageView for Flipper<'a, I>
where
    I: GenericImageView,
{
    type Pixel = I::Pixel;

    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.image.dimensions();
        (y, x)
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        let (x1, y1, x2, y2) = self.image.bounds();
        (y1, x1, y2, x2)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        self.image.get_pixel(y, x)
    }
}

/// Which way up the stored data sits, relative to the caller.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Rows are the caller's rows.  Vertical seams run down them.
    Normal,
    /// Rows are the caller's columns.  Horizontal seams run down them.
    Transposed,
}

impl Orientation {
    pub fn turn(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Transposed,
            Orientation::Transposed => Orientation::Normal,
        }
    }
}

/// The pixel grid and its energy map, together with the flag saying
/// whether both are currently stored transposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Oriented {
    grid: PixelGrid,
    energy: EnergyMap,
    orientation: Orientation,
}

impl Oriented {
    pub fn new(grid: PixelGrid) -> Self {
        let energy = calculate_energy(&grid);
        Oriented {
            grid,
            energy,
            orientation: Orientation::Normal,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width in the caller's coordinates.
    pub fn width(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.grid.width(),
            Orientation::Transposed => self.grid.height(),
        }
    }

    /// Height in the caller's coordinates.
    pub fn height(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.grid.height(),
            Orientation::Transposed => self.grid.width(),
        }
    }

    /// The stored energy of the caller's pixel (x, y).  The caller
    /// checks the bounds.
    pub fn energy_at(&self, x: u32, y: u32) -> f64 {
        match self.orientation {
            Orientation::Normal => self.energy[(x, y)],
            Orientation::Transposed => self.energy[(y, x)],
        }
    }

    /// Flip both matrices over the diagonal into new storage, and flip
    /// the flag to match.
    pub fn toggle(&mut self) {
        trace!(
            from = ?self.orientation,
            width = self.grid.width(),
            height = self.grid.height(),
            "transposing"
        );
        self.grid = self.grid.transpose();
        self.energy = self.energy.transpose();
        self.orientation = self.orientation.turn();
    }

    /// Toggle only if the data is not already stored the requested way
    /// up.  The orientation is left where it lands, so repeated
    /// requests for the same direction pay nothing.
    pub fn orient(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.toggle();
        }
    }

    /// The grid and energy map in the current orientation.
    pub fn current(&self) -> (&PixelGrid, &EnergyMap) {
        (&self.grid, &self.energy)
    }

    pub fn current_mut(&mut self) -> (&mut PixelGrid, &mut EnergyMap) {
        (&mut self.grid, &mut self.energy)
    }

    /// A deep copy of the image in the caller's orientation.
    pub fn picture(&self) -> RgbImage {
        match self.orientation {
            Orientation::Normal => self.grid.to_image(),
            Orientation::Transposed => copy_view(&Flipper { image: &self.grid }),
        }
    }

    /// The energy map, in the caller's orientation.
    pub fn energy_map(&self) -> EnergyMap {
        match self.orientation {
            Orientation::Normal => self.energy.clone(),
            Orientation::Transposed => self.energy.transpose(),
        }
    }
}

fn copy_view<I>(view: &I) -> RgbImage
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = view.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| view.get_pixel(x, y).to_rgb())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    const IMAGE_DATA: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn sample() -> Oriented {
        let buf: GrayImage = ImageBuffer::from_raw(5, 4, IMAGE_DATA.to_vec()).unwrap();
        Oriented::new(PixelGrid::from_image(&buf))
    }

    #[test]
    fn flipper_swaps_coordinates() {
        let buf: GrayImage = ImageBuffer::from_raw(5, 4, IMAGE_DATA.to_vec()).unwrap();
        let flipped = Flipper { image: &buf };
        assert_eq!(flipped.dimensions(), (4, 5));
        assert_eq!(flipped.get_pixel(1, 3), Luma([8]));
        assert_eq!(flipped.bounds(), (0, 0, 4, 5));
    }

    #[test]
    fn dimensions_follow_the_caller() {
        let mut oriented = sample();
        oriented.toggle();
        assert_eq!(oriented.orientation(), Orientation::Transposed);
        assert_eq!((oriented.width(), oriented.height()), (5, 4));
        assert_eq!(oriented.current().0.dimensions(), (4, 5));
        assert_eq!(oriented.picture().get_pixel(3, 1), &Rgb([8, 8, 8]));
    }

    #[test]
    fn toggling_twice_is_the_identity() {
        let original = sample();
        let mut oriented = original.clone();
        oriented.toggle();
        assert_ne!(oriented, original);
        oriented.toggle();
        assert_eq!(oriented, original);
    }

    #[test]
    fn energy_lookups_agree_across_orientations() {
        let mut oriented = sample();
        let before = oriented.energy_map();
        oriented.orient(Orientation::Transposed);
        assert_eq!(oriented.energy_map(), before);
        assert_eq!(oriented.energy_at(3, 1), before[(3, 1)]);
    }

    #[test]
    fn orient_is_lazy() {
        let mut oriented = sample();
        oriented.orient(Orientation::Normal);
        assert_eq!(oriented.orientation(), Orientation::Normal);
        oriented.orient(Orientation::Transposed);
        oriented.orient(Orientation::Transposed);
        assert_eq!(oriented.orientation(), Orientation::Transposed);
    }
}
