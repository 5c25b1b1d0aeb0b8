// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a rendered BGRA32 buffer into something a viewer can open.

use failure::Error;
use image::ColorType;
use std::path::Path;

/// Swaps the blue and red channels of every pixel.
pub fn bgra_to_rgba(bgra: &[u8]) -> Vec<u8> {
    let mut rgba = bgra.to_vec();
    for pixel in rgba.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    rgba
}

/// Writes a BGRA32 buffer to `outfile`.  The encoder is chosen from
/// the file extension.
pub fn write_image<P: AsRef<Path>>(
    outfile: P,
    bgra: &[u8],
    bounds: (usize, usize),
) -> Result<(), Error> {
    let rgba = bgra_to_rgba(&bgra[..bounds.0 * bounds.1 * 4]);
    image::save_buffer(
        outfile,
        &rgba,
        bounds.0 as u32,
        bounds.1 as u32,
        ColorType::RGBA(8),
    )?;
    Ok(())
}
