#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Row-band Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which `z = z*z + c`, started from zero, never runs off to
//! infinity.  Once `|z|` passes 2 it is guaranteed to, so the number of
//! iterations a point takes to get there (its escape time) measures how
//! far outside the set it lies.  This crate colors each pixel by that
//! number and paints points that have not escaped after the iteration
//! cap black.
//!
//! Each pixel depends only on its own coordinates, so the image is
//! split into horizontal bands, one per thread.  Every thread gets an
//! exclusive slice of the shared pixel buffer and the result is the
//! same byte for byte no matter how many bands were used.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod bands;
pub mod complex;
pub mod config;
pub mod errors;
pub mod output;
pub mod planes;
pub mod render;

pub use complex::ComplexNumber;
pub use config::RenderConfig;
pub use errors::RenderError;
pub use render::{render_band, RenderTask, Renderer};
