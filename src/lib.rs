//! # bmpgrid
//!
//! Windows Bitmap (BMP) header accessors and a 24-bit pixel grid codec.
//!
//! A [`Bitmap`] borrows the bytes of a complete `.bmp` file and exposes the
//! file header, info header, color table and pixel data at their fixed
//! offsets. Uncompressed 24-bit pixel data can be reshaped into a
//! [`PixelGrid`] (rows of `[u8; 3]` pixels in stored channel order) and
//! flattened back with [`encode_pixel_grid`].
//!
//! ## Layout
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 2 | signature |
//! | 2 | 4 | file size |
//! | 6 | 4 | reserved |
//! | 10 | 4 | pixel data offset |
//! | 14 | 40 | info header |
//! | 54 | 4 × palette size | color table (bit count ≤ 8 only) |
//! | after | rest | pixel data |
//!
//! ## Non-Goals
//!
//! - RLE4/RLE8 decompression
//! - Palette lookup for 1/4/8-bit images
//! - File I/O (callers supply the bytes)
//!
//! ## Usage
//!
//! ```no_run
//! use bmpgrid::{Bitmap, Signature, encode_pixel_grid};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let bmp = Bitmap::new(data);
//! if bmp.type_of() == Signature::Bm {
//!     println!("{}x{}", bmp.width()?, bmp.height()?);
//!     let grid = bmp.decode_pixel_grid()?;
//!     let raw = encode_pixel_grid(grid)?;
//!     assert_eq!(raw, bmp.raw_pixel_data()?);
//! }
//! # Ok::<(), bmpgrid::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod limits;
mod pixel;
pub mod tables;

// Re-exports
pub use bmp::{
    Bitmap, FileHeader, InfoHeader, RowStride, Signature, encode_bmp, encode_pixel_grid,
    encode_pixel_grid_with,
};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::{CHANNELS, Pixel, PixelGrid, RgbRecord, rgb_record, rgb_tuple};
