//! Reshape raw 24-bit pixel data into a row-major grid.

use alloc::vec::Vec;

use enough::Stop;

use super::RowStride;
use crate::error::BitmapError;
use crate::pixel::{CHANNELS, Pixel, PixelGrid};

/// Split `pixels` into `height` rows of `width` three-byte pixels.
///
/// The data must be exactly `row_bytes * height` long; padding bytes at the
/// end of each row (for [`RowStride::Padded`]) are dropped.
pub(crate) fn decode_grid(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: RowStride,
    stop: &dyn Stop,
) -> Result<PixelGrid, BitmapError> {
    let w = width as usize;
    let h = height as usize;
    let row_bytes = stride
        .row_bytes(width)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let expected = row_bytes
        .checked_mul(h)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(BitmapError::ShapeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    if w == 0 {
        if h == 0 {
            return Ok(Vec::new());
        }
        return Err(BitmapError::InvalidHeader("BMP width is zero".into()));
    }

    let packed = w * CHANNELS;
    let mut grid = Vec::with_capacity(h);
    for (row_idx, row) in pixels.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let row: Vec<Pixel> = row[..packed]
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2]])
            .collect();
        grid.push(row);
    }
    Ok(grid)
}
