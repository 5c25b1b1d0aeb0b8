// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0 in
//! the upper-left corner, and a window onto the complex plane centered
//! on the complex origin.  Screen rows grow downward while the
//! imaginary axis grows upward, so the y-axis is flipped.

use complex::ComplexNumber;
use config::RenderConfig;
use errors::RenderError;

/// Bytes per pixel of the BGRA32 buffers the renderer fills.
pub const BYTES_PER_PIXEL: usize = 4;

/// Bytes needed for a `width`x`height` BGRA32 image, or an error if
/// the image is empty or the count overflows.
pub fn image_byte_len(width: usize, height: usize) -> Result<usize, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(RenderError::ImageTooLarge { width, height })
}

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0; all values are non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// The column and row of a pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of an image onto the centered view of the complex plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Width and height of the image, in pixels.
    pub integral_plane: IntegralPlane,
    // Complex units per pixel; identical along both axes.
    scale: f64,
    // The pixel that lands on the complex origin, halved with integer
    // division so odd sizes round toward the upper-left.
    center: (i64, i64),
}

impl PlaneMapper {
    /// Constructor.  The shorter of the two image axes spans
    /// `view_scale * bound_radius` on the complex plane.
    pub fn new(width: usize, height: usize, config: &RenderConfig) -> Result<PlaneMapper, RenderError> {
        image_byte_len(width, height)?;
        Ok(PlaneMapper::centered(width, height, config))
    }

    // The unchecked constructor the kernel uses once the size has been
    // validated at the boundary.
    pub(crate) fn centered(width: usize, height: usize, config: &RenderConfig) -> PlaneMapper {
        let scale = config.view_scale * config.bound_radius / (width.min(height) as f64);
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            scale,
            center: ((width / 2) as i64, (height / 2) as i64),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of pixels in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Bytes needed to hold the whole image.  Cannot overflow once
    /// `new` has accepted the size.
    pub fn byte_len(&self) -> usize {
        self.len() * BYTES_PER_PIXEL
    }

    /// Complex units covered by one pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Given the column and row of a pixel, return the complex number
    /// at that location.
    #[inline]
    pub fn pixel_to_point(&self, pixel: Pixel) -> ComplexNumber {
        ComplexNumber::new(
            (pixel.0 as i64 - self.center.0) as f64 * self.scale,
            (self.center.1 - pixel.1 as i64) as f64 * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper::new(width, height, &RenderConfig::default()).unwrap()
    }

    #[test]
    fn planemapper_fails_on_empty_shape() {
        let config = RenderConfig::default();
        assert_eq!(
            PlaneMapper::new(0, 4, &config).unwrap_err(),
            RenderError::EmptyImage { width: 0, height: 4 }
        );
        assert!(PlaneMapper::new(4, 0, &config).is_err());
    }

    #[test]
    fn scale_follows_the_shorter_axis() {
        assert_eq!(mapper(800, 500).scale(), 2.5 / 500.0);
        assert_eq!(mapper(500, 800).scale(), 2.5 / 500.0);
    }

    #[test]
    fn center_pixel_is_the_origin() {
        let pm = mapper(640, 480);
        assert_eq!(pm.pixel_to_point(Pixel(320, 240)), ComplexNumber::new(0.0, 0.0));
    }

    #[test]
    fn odd_sizes_round_the_center_down() {
        let pm = mapper(5, 5);
        assert_eq!(pm.pixel_to_point(Pixel(2, 2)), ComplexNumber::new(0.0, 0.0));
        assert_eq!(pm.pixel_to_point(Pixel(0, 0)), ComplexNumber::new(-1.0, 1.0));
        assert_eq!(pm.pixel_to_point(Pixel(4, 4)), ComplexNumber::new(1.0, -1.0));
    }

    #[test]
    fn rows_grow_downward_and_imaginary_grows_upward() {
        let pm = mapper(100, 100);
        let upper = pm.pixel_to_point(Pixel(50, 10));
        let lower = pm.pixel_to_point(Pixel(50, 90));
        assert!(upper.imaginary > 0.0);
        assert!(lower.imaginary < 0.0);
        assert_eq!(upper.real, 0.0);
    }

    #[test]
    fn upper_left_corner_sits_on_the_view_edge() {
        let corner = mapper(400, 400).pixel_to_point(Pixel(0, 0));
        assert!((corner.real + 1.25).abs() < 1e-12);
        assert!((corner.imaginary - 1.25).abs() < 1e-12);
    }

    #[test]
    fn oversized_images_are_refused() {
        let config = RenderConfig::default();
        let width = usize::max_value() / 2;
        assert_eq!(
            PlaneMapper::new(width, 4, &config).unwrap_err(),
            RenderError::ImageTooLarge { width, height: 4 }
        );
        assert!(image_byte_len(usize::max_value(), 1).is_err());
        assert_eq!(image_byte_len(3, 2), Ok(24));
    }

    #[test]
    fn byte_len_counts_four_bytes_per_pixel() {
        let pm = mapper(7, 3);
        assert_eq!(pm.len(), 21);
        assert_eq!(pm.byte_len(), 84);
        assert!(!pm.is_empty());
    }
}
