// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time kernel.  Every pixel of a band is mapped onto the
//! complex plane, iterated as `z = z*z + c` from `z = 0` until it
//! leaves the escape radius or hits the iteration cap, and the number
//! of iterations it took is turned into a red intensity.  Points that
//! never leave are black.

use itertools::iproduct;
use num::{clamp, Zero};
use std::time::{Duration, Instant};

use bands::{render_bands, split_bands};
use complex::ComplexNumber;
use config::RenderConfig;
use errors::RenderError;
use planes::{Pixel, PlaneMapper, BYTES_PER_PIXEL};

/// The largest value a color channel can take, plus one.
const MAX_COLOR: f64 = 256.0;

/// Describes the rectangle of the image one invocation of
/// `render_band` is responsible for, along with the full image extent
/// needed to place that rectangle on the complex plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderTask {
    /// First column of the rectangle.
    pub start_x: usize,
    /// First row of the rectangle.
    pub start_y: usize,
    /// One past the last column.
    pub end_x: usize,
    /// One past the last row.
    pub end_y: usize,
    /// Width of the whole image.
    pub image_width: usize,
    /// Height of the whole image.
    pub image_height: usize,
    bytes_per_pixel: usize,
}

impl RenderTask {
    /// A checked task for an arbitrary rectangle.  Only BGRA32 pixels
    /// are rendered, so `bytes_per_pixel` must be 4.
    pub fn new(
        (start_x, start_y): (usize, usize),
        (end_x, end_y): (usize, usize),
        (image_width, image_height): (usize, usize),
        bytes_per_pixel: usize,
    ) -> Result<Self, RenderError> {
        if bytes_per_pixel != BYTES_PER_PIXEL {
            return Err(RenderError::UnsupportedDepth(bytes_per_pixel));
        }
        if start_x > end_x || start_y > end_y || end_x > image_width || end_y > image_height {
            return Err(RenderError::BandOutsideImage {
                start: (start_x, start_y),
                end: (end_x, end_y),
            });
        }
        Ok(RenderTask {
            start_x,
            start_y,
            end_x,
            end_y,
            image_width,
            image_height,
            bytes_per_pixel,
        })
    }

    /// A full-width band covering rows `start_y..end_y`.
    pub fn rows(start_y: usize, end_y: usize, image_width: usize, image_height: usize) -> Self {
        RenderTask {
            start_x: 0,
            start_y,
            end_x: image_width,
            end_y,
            image_width,
            image_height,
            bytes_per_pixel: BYTES_PER_PIXEL,
        }
    }

    /// Bytes per pixel; always 4.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Number of pixels the rectangle covers.
    pub fn len(&self) -> usize {
        (self.end_x - self.start_x) * (self.end_y - self.start_y)
    }

    /// Whether the rectangle is empty.
    pub fn is_empty(&self) -> bool {
        self.end_x <= self.start_x || self.end_y <= self.start_y
    }

    /// Bytes the rectangle occupies in the pixel buffer.
    pub fn byte_len(&self) -> usize {
        self.len() * self.bytes_per_pixel
    }
}

/// Iterates `z = z*z + c` from zero.  Returns the iteration on which
/// `z` left the escape radius, or `None` if it was still inside when
/// the cap was reached.
#[inline]
pub fn escape_time(config: &RenderConfig, c: ComplexNumber) -> Option<u32> {
    let bound = config.bound_squared();
    let mut z = ComplexNumber::zero();
    for iteration in 1..config.max_iterations {
        z = z * z + c;
        if z.norm_squared() >= bound {
            return Some(iteration);
        }
    }
    None
}

/// Normalizes an escape time into `[0, 1)`.  Points presumed inside
/// the set are 0.
pub fn color_value(config: &RenderConfig, escape: Option<u32>) -> f64 {
    match escape {
        Some(iterations) => f64::from(iterations) / f64::from(config.max_iterations),
        None => 0.0,
    }
}

/// Converts a normalized escape time into a BGRA pixel.  Only the red
/// channel carries the ramp.
pub fn color(config: &RenderConfig, value: f64) -> [u8; 4] {
    let red = clamp(MAX_COLOR * value.powf(config.contrast), 0.0, 255.0) as u8;
    [0, 0, red, 255]
}

/// The BGRA pixel for one point on the complex plane.
#[inline]
pub fn color_of_point(config: &RenderConfig, c: ComplexNumber) -> [u8; 4] {
    color(config, color_value(config, escape_time(config, c)))
}

/// Fills one band.  `pixels` holds exactly the band's rectangle, row
/// by row, four bytes per pixel.  The caller
/// guarantees the slice and the task agree.
pub fn render_band(config: &RenderConfig, pixels: &mut [u8], task: &RenderTask) {
    debug_assert_eq!(pixels.len(), task.byte_len());
    let plane = PlaneMapper::centered(task.image_width, task.image_height, config);
    let coordinates = iproduct!(task.start_y..task.end_y, task.start_x..task.end_x);
    for (pixel, (row, column)) in pixels.chunks_exact_mut(task.bytes_per_pixel).zip(coordinates) {
        let bgra = color_of_point(config, plane.pixel_to_point(Pixel(column, row)));
        pixel[..BYTES_PER_PIXEL].copy_from_slice(&bgra);
    }
}

/// A Mandelbrot image of a fixed size, ready to be rendered into any
/// number of row-bands.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    plane: PlaneMapper,
}

impl Renderer {
    /// Validates the configuration and the image size.
    pub fn new(width: usize, height: usize, config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        let plane = PlaneMapper::new(width, height, &config)?;
        Ok(Renderer { config, plane })
    }

    /// The parameters every band is rendered with.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The pixel to complex-plane mapping of this image.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The color a single pixel renders as.
    pub fn color_at(&self, pixel: Pixel) -> [u8; 4] {
        color_of_point(&self.config, self.plane.pixel_to_point(pixel))
    }

    /// Renders the whole image into `buffer` using `threads` workers,
    /// one row-band each, and returns once every band is filled.
    /// Bytes past the end of the image are left alone.  The returned
    /// duration covers the workers only, not the validation.
    pub fn render(&self, buffer: &mut [u8], threads: usize) -> Result<Duration, RenderError> {
        let (width, height) = (self.plane.width(), self.plane.height());
        let bands = split_bands(buffer, width, height, threads)?;
        info!("rendering {}x{} in {} bands", width, height, bands.len());
        let started = Instant::now();
        render_bands(&self.config, bands)?;
        Ok(started.elapsed())
    }

    /// Allocates a buffer of exactly the image size and renders into it.
    pub fn render_to_vec(&self, threads: usize) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; self.plane.byte_len()];
        self.render(&mut buffer, threads)?;
        Ok(buffer)
    }
}
