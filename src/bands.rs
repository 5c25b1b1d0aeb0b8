// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits a pixel buffer into horizontal row-bands and renders each
//! band on its own scoped thread.
//!
//! Every band owns an exclusive `&mut [u8]` carved out of the buffer
//! with `split_at_mut`/`chunks_mut`, so the workers share nothing
//! mutable and need no locks.  Bands are `height / n` rows tall; the
//! last one also takes the `height % n` leftover rows so the whole
//! image is covered exactly once.

use crossbeam;

use config::RenderConfig;
use errors::RenderError;
use planes::{image_byte_len, BYTES_PER_PIXEL};
use render::{render_band, RenderTask};

/// One worker's share of the image: the rectangle it covers and the
/// bytes it may write.
#[derive(Debug)]
pub struct Band<'a> {
    /// Where the band sits in the image.
    pub task: RenderTask,
    /// The band's bytes, and no others.
    pub pixels: &'a mut [u8],
}

/// Carves `buffer` into `count` full-width row-bands of a
/// `width`x`height` BGRA32 image.  The buffer may be longer than the
/// image; the excess is not handed to any band.
pub fn split_bands(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    count: usize,
) -> Result<Vec<Band>, RenderError> {
    let required = image_byte_len(width, height)?;
    if count == 0 {
        return Err(RenderError::NoThreads);
    }
    if count > height {
        return Err(RenderError::TooManyBands {
            bands: count,
            height,
        });
    }
    let row_bytes = width * BYTES_PER_PIXEL;
    if buffer.len() < required {
        return Err(RenderError::BufferTooSmall {
            required,
            actual: buffer.len(),
        });
    }

    let rows_per_band = height / count;
    let (image, _) = buffer.split_at_mut(required);
    let (even, last) = image.split_at_mut(rows_per_band * (count - 1) * row_bytes);

    let mut bands: Vec<Band> = even
        .chunks_mut(rows_per_band * row_bytes)
        .enumerate()
        .map(|(index, pixels)| Band {
            task: RenderTask::rows(
                index * rows_per_band,
                (index + 1) * rows_per_band,
                width,
                height,
            ),
            pixels,
        })
        .collect();
    bands.push(Band {
        task: RenderTask::rows(rows_per_band * (count - 1), height, width, height),
        pixels: last,
    });
    Ok(bands)
}

/// Renders every band on its own thread and waits for all of them.
pub fn render_bands(config: &RenderConfig, bands: Vec<Band>) -> Result<(), RenderError> {
    crossbeam::scope(|spawner| {
        for band in bands {
            spawner.spawn(move |_| {
                debug!(
                    "band rows {}..{} started",
                    band.task.start_y, band.task.end_y
                );
                render_band(config, band.pixels, &band.task);
                debug!("band rows {}..{} done", band.task.start_y, band.task.end_y);
            });
        }
    })
    .map_err(|_| RenderError::WorkerPanicked)
}
