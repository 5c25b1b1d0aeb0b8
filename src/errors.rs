// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong happens at the boundary, before any
//! worker is started.  The kernel itself is total.

/// Reasons a render request is refused.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// One of the image dimensions is zero.
    #[fail(display = "image dimensions must be positive, got {}x{}", width, height)]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The pixel buffer cannot hold the whole image.
    #[fail(display = "pixel buffer holds {} bytes but {} are required", actual, required)]
    BufferTooSmall {
        /// Bytes the image needs.
        required: usize,
        /// Bytes the caller supplied.
        actual: usize,
    },

    /// Zero worker threads were requested.
    #[fail(display = "thread count must be at least 1")]
    NoThreads,

    /// More bands than rows; some workers would receive nothing.
    #[fail(display = "cannot split {} rows into {} bands", height, bands)]
    TooManyBands {
        /// Requested band count.
        bands: usize,
        /// Image height in rows.
        height: usize,
    },

    /// Only BGRA32 is rendered.
    #[fail(display = "unsupported pixel depth of {} bytes, expected 4", _0)]
    UnsupportedDepth(usize),

    /// A band rectangle is inverted or reaches past the image.
    #[fail(
        display = "band {:?}..{:?} does not fit inside the image",
        start, end
    )]
    BandOutsideImage {
        /// Upper-left corner, as column and row.
        start: (usize, usize),
        /// Lower-right corner, exclusive.
        end: (usize, usize),
    },

    /// The image's byte length does not fit in memory addressing.
    #[fail(display = "a {}x{} image is too large to address", width, height)]
    ImageTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A configuration field is out of range.
    #[fail(display = "invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// A worker thread panicked before its band was filled.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}
