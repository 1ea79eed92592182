// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! ```no_run
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let image = image::open("in.png").unwrap();
//! let mut carver = SeamCarver::new(&image).unwrap();
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam).unwrap();
//! carver.picture().save("out.png").unwrap();
//! ```

pub mod energy;
pub use energy::{calculate_energy, energy_to_image, pixel_energy, EnergyMap, BORDER_ENERGY};

pub mod error;
pub use error::SeamError;

pub mod flipper;
pub use flipper::{Flipper, Orientation};

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod seamfinder;
pub use seamfinder::{energy_to_seam, SeamFinder};

pub mod seamremoval;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;
