use alloc::vec::Vec;
use core::mem::size_of;

use crate::error::BitmapError;
use crate::pixel::{CHANNELS, Pixel};

/// Caps applied by [`Bitmap::with_limits`](crate::Bitmap::with_limits)
/// before a pixel grid is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum heap bytes of a decoded [`PixelGrid`](crate::PixelGrid),
    /// counting each row's `Vec` header as well as its pixels.
    pub max_memory_bytes: Option<u64>,
}

/// Heap bytes of a `width` x `height` grid, or `None` on overflow.
pub(crate) fn grid_bytes(width: u32, height: u32) -> Option<u64> {
    let pixels = u64::from(width).checked_mul(CHANNELS as u64)?;
    let row = pixels.checked_add(size_of::<Vec<Pixel>>() as u64)?;
    row.checked_mul(u64::from(height))
}

impl Limits {
    /// Check grid dimensions and the grid's allocation size.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            match grid_bytes(width, height) {
                Some(bytes) if bytes <= max_mem => {}
                Some(bytes) => {
                    return Err(BitmapError::LimitExceeded(alloc::format!(
                        "{width}x{height} grid needs {bytes} bytes, over memory limit {max_mem}"
                    )));
                }
                None => {
                    return Err(BitmapError::LimitExceeded(alloc::format!(
                        "{width}x{height} grid overflows memory limit {max_mem}"
                    )));
                }
            }
        }
        Ok(())
    }
}
