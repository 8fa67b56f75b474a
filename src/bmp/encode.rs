//! Flatten a pixel grid back into raw bytes, optionally behind a 24-bit BMP header.

use alloc::vec::Vec;

use enough::{Stop, Unstoppable};

use super::RowStride;
use super::header::HEADERS_END;
use crate::error::BitmapError;
use crate::pixel::CHANNELS;

/// Flatten rows, then pixels, then channels into packed bytes.
///
/// This is the inverse of [`Bitmap::decode_pixel_grid`](crate::Bitmap::decode_pixel_grid).
/// Fails with [`BitmapError::InvalidGrid`] on ragged rows, rows without
/// pixels, or pixels that don't have exactly three channels.
pub fn encode_pixel_grid<R, P>(grid: &[R]) -> Result<Vec<u8>, BitmapError>
where
    R: AsRef<[P]>,
    P: AsRef<[u8]>,
{
    encode_pixel_grid_with(grid, RowStride::Packed, &Unstoppable)
}

/// Like [`encode_pixel_grid`], with an explicit row stride. Padding bytes are zero.
pub fn encode_pixel_grid_with<R, P>(
    grid: &[R],
    stride: RowStride,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError>
where
    R: AsRef<[P]>,
    P: AsRef<[u8]>,
{
    let (width, height) = grid_dimensions(grid)?;
    let pixel_data_size = pixel_data_size(width, height, stride)?;
    let mut out = Vec::with_capacity(pixel_data_size);
    write_rows(&mut out, grid, width, stride, stop)?;
    Ok(out)
}

/// Encode a grid as a complete uncompressed 24-bit BMP file.
///
/// Rows are written in grid order after a 54-byte header; no color table.
pub fn encode_bmp<R, P>(grid: &[R], stride: RowStride, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError>
where
    R: AsRef<[P]>,
    P: AsRef<[u8]>,
{
    let (width, height) = grid_dimensions(grid)?;
    let pixel_data_size = pixel_data_size(width, height, stride)?;
    let file_size = pixel_data_size
        .checked_add(HEADERS_END)
        .filter(|&s| u32::try_from(s).is_ok())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    stop.check()?;
    log::debug!("encoding {width}x{height} BMP ({stride:?} rows, {file_size} bytes)");

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, file_size, pixel_data_size, width, height);
    write_rows(&mut out, grid, width, stride, stop)?;
    Ok(out)
}

/// Validate shape and return `(width, height)`.
fn grid_dimensions<R, P>(grid: &[R]) -> Result<(u32, u32), BitmapError>
where
    R: AsRef<[P]>,
    P: AsRef<[u8]>,
{
    let width = grid.first().map_or(0, |row| row.as_ref().len());
    if width == 0 && !grid.is_empty() {
        return Err(BitmapError::InvalidGrid(alloc::format!(
            "grid has {} rows but no pixels",
            grid.len()
        )));
    }
    for (y, row) in grid.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(BitmapError::InvalidGrid(alloc::format!(
                "row {y} has {} pixels, expected {width}",
                row.len()
            )));
        }
        for (x, pixel) in row.iter().enumerate() {
            let channels = pixel.as_ref().len();
            if channels != CHANNELS {
                return Err(BitmapError::InvalidGrid(alloc::format!(
                    "pixel ({x}, {y}) has {channels} channels, expected {CHANNELS}"
                )));
            }
        }
    }
    let too_large = || {
        BitmapError::InvalidGrid(alloc::format!(
            "grid of {} rows x {width} pixels does not fit u32 dimensions",
            grid.len()
        ))
    };
    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(grid.len()).map_err(|_| too_large())?;
    Ok((width, height))
}

fn pixel_data_size(width: u32, height: u32, stride: RowStride) -> Result<usize, BitmapError> {
    stride
        .row_bytes(width)
        .and_then(|r| r.checked_mul(height as usize))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

fn write_rows<R, P>(
    out: &mut Vec<u8>,
    grid: &[R],
    width: u32,
    stride: RowStride,
    stop: &dyn Stop,
) -> Result<(), BitmapError>
where
    R: AsRef<[P]>,
    P: AsRef<[u8]>,
{
    let pad_bytes = stride
        .row_bytes(width)
        .map_or(0, |r| r - width as usize * CHANNELS);
    for (y, row) in grid.iter().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for pixel in row.as_ref() {
            out.extend_from_slice(pixel.as_ref());
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
    Ok(())
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADERS_END as u32).to_le_bytes()); // data offset

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
