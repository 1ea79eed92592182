// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a vertical seam
//!
//! The seam is checked against the grid before anything is touched.
//! Then one pixel is cut out of every row of the grid, and the same
//! cell out of every row of the energy map.  Only the two pixels in
//! each row that now border the cut have new neighbors, so only their
//! energies are recalculated; everything else is carried over.

use crate::energy::{pixel_energy, EnergyMap};
use crate::error::{Result, SeamError};
use crate::pixelgrid::PixelGrid;
use itertools::Itertools;

/// Check a seam against a grid of the given dimensions.
pub fn validate_seam(seam: &[u32], width: u32, height: u32) -> Result<()> {
    if seam.is_empty() {
        return Err(SeamError::InvalidArgument("seam is empty"));
    }
    if width <= 1 {
        return Err(SeamError::IllegalState(width));
    }
    if seam.len() != height as usize {
        return Err(SeamError::InvalidSeam(format!(
            "length {} does not match image height {}",
            seam.len(),
            height
        )));
    }
    if let Some((row, (a, b))) = seam
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a, b))| (**a as i64 - **b as i64).abs() > 1)
    {
        return Err(SeamError::InvalidSeam(format!(
            "rows {} and {} jump from column {} to {}",
            row,
            row + 1,
            a,
            b
        )));
    }
    if let Some((row, x)) = seam.iter().enumerate().find(|(_, x)| **x >= width) {
        return Err(SeamError::InvalidSeam(format!(
            "row {} names column {} of a {} pixel wide image",
            row, x, width
        )));
    }
    Ok(())
}

/// Cut the seam out of the grid and patch up the energy map to match.
pub fn remove_seam(grid: &mut PixelGrid, energy: &mut EnergyMap, seam: &[u32]) -> Result<()> {
    validate_seam(seam, grid.width(), grid.height())?;

    grid.splice_out_column(seam);
    energy.splice_out_column(seam);

    // The rows above and below have to be spliced before any energy
    // is recalculated, since the new energies depend on them.
    let newwidth = grid.width();
    for (y, &x) in (0u32..).zip(seam.iter()) {
        if x > 0 {
            energy[(x - 1, y)] = pixel_energy(grid, x - 1, y);
        }
        if x < newwidth {
            energy[(x, y)] = pixel_energy(grid, x, y);
        }
    }
    Ok(())
}
