// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a caller can misuse the seam carver.  Every one of them is
//! reported before anything is changed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeamError {
    /// A required input was missing: an empty image, or an empty seam.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A pixel coordinate outside the current image.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A seam of the wrong length, with a broken step, or pointing
    /// outside the image.
    #[error("invalid seam: {0}")]
    InvalidSeam(String),

    /// The image is already a single pixel across in the direction
    /// being carved.
    #[error("cannot remove a seam from an image {0} pixel(s) across")]
    IllegalState(u32),
}

pub type Result<T> = std::result::Result<T, SeamError>;
