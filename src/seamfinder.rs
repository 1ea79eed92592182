// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the seam of least energy
//!
//! The energy map is treated as an implicit directed acyclic graph:
//! a virtual source with an edge to every pixel of the top row, an
//! edge from every pixel to the (up to) three pixels touching it in
//! the row below, and an edge from every pixel of the bottom row to a
//! virtual sink.  Each edge weighs the energy of the pixel it leads
//! to; edges into the sink weigh nothing.  The cheapest source-to-sink
//! path is the seam.
//!
//! Because every edge points one row down, the rows already are a
//! topological order, and a single pass of edge relaxation over them
//! finds all the shortest distances.  No priority queue required.

use crate::energy::EnergyMap;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use tracing::trace;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers.
pub trait SeamFinder {
    /// Request a seam running left to right: one row index per column.
    fn find_horizontal_seam(&mut self) -> Vec<u32>;

    /// Request a seam running top to bottom: one column index per row.
    fn find_vertical_seam(&mut self) -> Vec<u32>;
}

type Distances = TwoDimensionalMap<EnergyAndBackPointer<f64>>;

// relax edge (from_x, y - 1) → (x, y): if the edge gives a shorter
// path to (x, y), take it.  Strictly shorter only, so among equal
// paths the one relaxed first wins.
#[inline]
fn relax(target: &mut Distances, from: (u32, f64), (x, y): (u32, u32), weight: f64) {
    let (from_x, from_energy) = from;
    let candidate = from_energy + weight;
    if target[(x, y)].energy > candidate {
        target[(x, y)] = EnergyAndBackPointer {
            energy: candidate,
            parent: from_x,
        };
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = energy.dimensions();
    let mut target: Distances = TwoDimensionalMap::filled(
        width,
        height,
        EnergyAndBackPointer {
            energy: f64::INFINITY,
            parent: 0,
        },
    );

    // The source sits at distance zero above the top row.
    for x in 0..width {
        relax(&mut target, (x, 0.0), (x, 0), energy[(x, 0)]);
    }

    let maxwidth = width - 1;
    for y in 0..height - 1 {
        for x in 0..width {
            let from = (x, target[(x, y)].energy);
            let below = x.saturating_sub(1)..=(x + 1).min(maxwidth);
            for to_x in below {
                relax(&mut target, from, (to_x, y + 1), energy[(to_x, y + 1)]);
            }
        }
    }

    // Edges into the sink are free, so the sink's parent is the
    // leftmost bottom-row pixel of least distance.
    let bottom = height - 1;
    let (mut seam_col, total) = (0..width).fold((0, f64::INFINITY), |best, x| {
        let distance = target[(x, bottom)].energy;
        if best.1 > distance {
            (x, distance)
        } else {
            best
        }
    });
    trace!(width, height, total, "found seam");

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn energies(width: u32, height: u32, data: &[f64]) -> EnergyMap {
        TwoDimensionalMap::from_fn(width, height, |x, y| data[(y * width + x) as usize])
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let expected = [2, 3, 4, 3];
        assert_eq!(energy_to_seam(&energies(5, 4, &ENERGY_DATA)), expected);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let expected = [0, 1, 0, 1, 2];
        assert_eq!(energy_to_seam(&energies(5, 4, &ENERGY_DATA).transpose()), expected);
    }

    #[test]
    fn ties_go_to_the_leftmost_path() {
        let flat = [1.0; 12];
        assert_eq!(energy_to_seam(&energies(4, 3, &flat)), [0, 0, 0]);
    }

    #[test]
    fn single_column_and_single_row() {
        assert_eq!(energy_to_seam(&energies(1, 3, &[5.0, 6.0, 7.0])), [0, 0, 0]);
        assert_eq!(energy_to_seam(&energies(3, 1, &[5.0, 2.0, 7.0])), [1]);
    }

    #[test]
    fn seam_steps_diagonally_at_most_one_column() {
        let data = [
            0.0, 9.0, 9.0, 9.0, 9.0, //
            9.0, 9.0, 9.0, 9.0, 9.0, //
            9.0, 9.0, 9.0, 9.0, 0.0,
        ];
        let seam = energy_to_seam(&energies(5, 3, &data));
        assert_eq!(seam.len(), 3);
        assert!(seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1));
    }
}
