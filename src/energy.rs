// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient of its four neighbors:
//! the color distance between the pixels to its left and right, plus
//! the color distance between the pixels above and below it.  Pixels
//! on the border of the image are given a fixed, very high energy so
//! that seams prefer to run through the interior.

use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Rgb};
use itertools::iproduct;

/// The energy of every pixel on the edge of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

/// One `f64` per pixel, addressed the same way as the pixel grid.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = √(|Δx|²+|Δy|²)
#[inline]
fn energy_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> f64 {
    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(c1, c2)| {
            let d = f64::from(*c2) - f64::from(*c1);
            d * d
        })
        .sum()
}

/// The energy of the pixel at (x, y).  Calling this with a coordinate
/// outside the grid is a bug in the caller, and panics.
pub fn pixel_energy(grid: &PixelGrid, x: u32, y: u32) -> f64 {
    let (width, height) = grid.dimensions();
    assert!(
        x < width && y < height,
        "pixel ({}, {}) outside {}x{} grid",
        x,
        y,
        width,
        height
    );
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    let dx = energy_of_pair(&grid.get_pixel(x - 1, y), &grid.get_pixel(x + 1, y));
    let dy = energy_of_pair(&grid.get_pixel(x, y - 1), &grid.get_pixel(x, y + 1));
    (dx + dy).sqrt()
}

/// Compute the energy of every pixel in the grid.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();
    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = pixel_energy(grid, x, y);
    }
    emap
}

/// Compute the energy of every pixel in the grid.
///
/// The map is broken up into bands of whole rows with `chunks_mut`,
/// and each band is filled in on its own thread.  Every pixel is
/// computed by the same function as the single-threaded version, so
/// the results are identical.
#[cfg(feature = "threaded")]
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();
    let mut emap = EnergyMap::new(width, height);
    let rows_per_band = (height as usize + num_cpus::get() - 1) / num_cpus::get();
    let band_len = rows_per_band.max(1) * width as usize;

    let outcome = crossbeam::scope(|scope| {
        for (band, cells) in emap.as_mut_slice().chunks_mut(band_len).enumerate() {
            scope.spawn(move |_| {
                let first = band * band_len;
                for (offset, cell) in cells.iter_mut().enumerate() {
                    let index = first + offset;
                    let (x, y) = (index % width as usize, index / width as usize);
                    *cell = pixel_energy(grid, x as u32, y as u32);
                }
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    emap
}

/// Render an energy map as a grayscale image, scaled so the most
/// energetic pixel is white.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = iproduct!(0..energy.height, 0..energy.width)
        .map(|(y, x)| energy[(x, y)])
        .fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width, energy.height, |x, y| {
        let scaled = if factor > 0.0 {
            (energy[(x, y)] / factor * 255.0).round()
        } else {
            0.0
        };
        Luma([scaled.max(0.0).min(255.0) as u8])
    })
}
