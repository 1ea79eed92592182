// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional storage
//!
//! An addressable two-dimensional field holding one value per pixel:
//! a color for the pixel grid, an `f64` for the energy map, or an
//! energy + parent address for the seam digraph.  The field can be
//! transposed into fresh storage, and can have one column per row
//! spliced out of it in place.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map.  The content type must implement
    /// the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A map with every cell set to the same value.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// A map populated by calling `f(x, y)` for every cell, in row
    /// order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// A single row, as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// The raw row-major storage.  Chunking this by `width` yields the
    /// rows in order.
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Flip the map over its diagonal into newly allocated storage.
    /// Every (x, y) of the source lands at (y, x) of the result.
    pub fn transpose(&self) -> Self {
        TwoDimensionalMap::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }

    /// Delete the cell at column `seam[y]` from every row `y`, sliding
    /// the rest of the row left by one.  The map becomes one column
    /// narrower.
    ///
    /// The caller guarantees `seam.len() == height`, every entry is
    /// below `width`, and `width > 0`.
    pub fn splice_out_column(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        let width = self.width as usize;
        let newwidth = width - 1;

        // Rows are compacted front to back, so every destination lies
        // at or before its source and nothing unread is overwritten.
        for (y, &cut) in seam.iter().enumerate() {
            let cut = cut as usize;
            let (src, dst) = (y * width, y * newwidth);
            self.data.copy_within(src..src + cut, dst);
            self.data.copy_within(src + cut + 1..src + width, dst + cut);
        }
        self.data.truncate(newwidth * self.height as usize);
        self.width -= 1;
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One vertex of the seam digraph: the cheapest known distance to
/// reach it, and the column it was reached from in the row above.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
