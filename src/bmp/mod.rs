//! BMP header accessors and the 24-bit pixel grid codec.
//!
//! [`Bitmap`] borrows the bytes of a whole `.bmp` file and reads fields at
//! their fixed offsets on demand. Nothing is parsed up front, so a file with
//! an unsupported compression or bit depth can still have its unconditional
//! fields read.

mod decode;
mod encode;
mod header;

pub use encode::{encode_bmp, encode_pixel_grid, encode_pixel_grid_with};
pub use header::{FileHeader, InfoHeader, Signature};

use core::cell::OnceCell;

use enough::{Stop, Unstoppable};

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::{CHANNELS, PixelGrid};
use crate::tables::{self, BitDepthDescription, CompressionName};
use header::*;

/// Byte length of one stored pixel row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowStride {
    /// `width * 3` bytes, no padding between rows.
    #[default]
    Packed,
    /// Rows padded with zeros to a multiple of 4 bytes, as most BMP writers do.
    Padded,
}

impl RowStride {
    /// Bytes per row for `width` 24-bit pixels, or `None` on overflow.
    pub fn row_bytes(self, width: u32) -> Option<usize> {
        let packed = (width as usize).checked_mul(CHANNELS)?;
        match self {
            Self::Packed => Some(packed),
            Self::Padded => packed.checked_add(3).map(|r| r & !3),
        }
    }
}

/// A BMP file held as borrowed bytes.
#[derive(Debug)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    limits: Option<Limits>,
    grid: OnceCell<PixelGrid>,
}

impl<'a> Bitmap<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            grid: OnceCell::new(),
        }
    }

    /// Apply resource limits to pixel grid decoding.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self.grid = OnceCell::new();
        self
    }

    /// The whole input buffer.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    // ── File header ─────────────────────────────────────────────────

    pub fn signature(&self) -> Result<[u8; 2], BitmapError> {
        read_array(self.data, SIGNATURE)
    }

    /// The recognized file type. Never fails; short or unknown input is
    /// [`Signature::Unrecognized`].
    pub fn type_of(&self) -> Signature {
        self.signature()
            .map_or(Signature::Unrecognized, Signature::from_bytes)
    }

    /// The 14-byte file header.
    pub fn header(&self) -> Result<&'a [u8], BitmapError> {
        read_range(self.data, 0, FILE_HEADER_LEN)
    }

    /// Total file size as recorded in the header (not the buffer length).
    pub fn file_size(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, FILE_SIZE)
    }

    pub fn reserved(&self) -> Result<[u8; 4], BitmapError> {
        read_array(self.data, RESERVED)
    }

    /// The undecoded bytes of the pixel data offset field.
    pub fn pixel_data_offset_raw(&self) -> Result<[u8; 4], BitmapError> {
        read_array(self.data, PIXEL_DATA_OFFSET)
    }

    /// Pixel data offset as recorded in the header.
    ///
    /// Pixel extraction uses [`Bitmap::color_table_end`] instead of this field.
    pub fn pixel_data_offset(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, PIXEL_DATA_OFFSET)
    }

    pub fn file_header(&self) -> Result<FileHeader, BitmapError> {
        FileHeader::parse(self.data)
    }

    // ── Info header ─────────────────────────────────────────────────

    /// The 40-byte info header.
    pub fn info_header(&self) -> Result<&'a [u8], BitmapError> {
        read_range(self.data, FILE_HEADER_LEN, HEADERS_END)
    }

    /// All info header fields, decoded.
    pub fn info_header_fields(&self) -> Result<InfoHeader, BitmapError> {
        InfoHeader::parse(self.data)
    }

    pub fn info_header_size(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, INFO_HEADER_SIZE)
    }

    pub fn width(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, WIDTH)
    }

    pub fn height(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, HEIGHT)
    }

    pub fn planes(&self) -> Result<u16, BitmapError> {
        read_u16_le(self.data, PLANES)
    }

    /// Bits per pixel. Not range checked.
    pub fn bit_count(&self) -> Result<u16, BitmapError> {
        read_u16_le(self.data, BIT_COUNT)
    }

    /// Compression code: 0 none, 1 RLE8, 2 RLE4.
    pub fn compression(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, COMPRESSION)
    }

    pub fn image_size(&self) -> Result<u32, BitmapError> {
        read_u32_le(self.data, IMAGE_SIZE)
    }

    /// Horizontal resolution. Only defined for uncompressed images.
    pub fn x_pixels_per_meter(&self) -> Result<u32, BitmapError> {
        self.uncompressed_field(X_PIXELS_PER_METER)
    }

    /// Vertical resolution. Only defined for uncompressed images.
    pub fn y_pixels_per_meter(&self) -> Result<u32, BitmapError> {
        self.uncompressed_field(Y_PIXELS_PER_METER)
    }

    pub fn colors_used(&self) -> Result<u32, BitmapError> {
        self.uncompressed_field(COLORS_USED)
    }

    /// Number of important colors, 0 meaning all.
    pub fn colors_important(&self) -> Result<u32, BitmapError> {
        self.uncompressed_field(COLORS_IMPORTANT)
    }

    fn uncompressed_field(&self, offset: usize) -> Result<u32, BitmapError> {
        let compression = self.compression()?;
        if compression != 0 {
            return Err(BitmapError::UnsupportedCompression { compression });
        }
        read_u32_le(self.data, offset)
    }

    /// File header and info header together (54 bytes).
    pub fn header_and_info_header(&self) -> Result<&'a [u8], BitmapError> {
        read_range(self.data, 0, HEADERS_END)
    }

    pub fn bit_depth(&self) -> Result<BitDepthDescription, BitmapError> {
        tables::bit_depth_description(self.bit_count()?)
    }

    pub fn compression_name(&self) -> Result<CompressionName, BitmapError> {
        tables::compression_name(self.compression()?)
    }

    /// Check the signature, info header size and plane count.
    ///
    /// Accessors don't require this to pass.
    pub fn validate(&self) -> Result<(), BitmapError> {
        if !self.type_of().is_recognized() {
            return Err(BitmapError::UnrecognizedFormat);
        }
        let size = self.info_header_size()?;
        if size != INFO_HEADER_LEN as u32 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "info header size is {size}, expected {INFO_HEADER_LEN}"
            )));
        }
        let planes = self.planes()?;
        if planes != 1 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP planes field is {planes}, expected 1"
            )));
        }
        Ok(())
    }

    // ── Color table ─────────────────────────────────────────────────

    /// Offset one past the color table: `54 + 4 * palette size` for depths
    /// up to 8 bits, otherwise 54.
    pub fn color_table_end(&self) -> Result<usize, BitmapError> {
        let bit_count = self.bit_count()?;
        if bit_count > 8 {
            return Ok(HEADERS_END);
        }
        let colors = tables::palette_size(bit_count)? as usize;
        let end = HEADERS_END + 4 * colors;
        log::trace!("color table ends at {end} ({bit_count}-bit, {colors} colors)");
        Ok(end)
    }

    /// Palette bytes (4 per entry). Empty for depths above 8 bits.
    pub fn color_table(&self) -> Result<&'a [u8], BitmapError> {
        if self.bit_count()? > 8 {
            return Ok(&[]);
        }
        read_range(self.data, HEADERS_END, self.color_table_end()?)
    }

    // ── Pixel data ──────────────────────────────────────────────────

    /// Everything after the color table.
    pub fn raw_pixel_data(&self) -> Result<&'a [u8], BitmapError> {
        let start = self.color_table_end()?;
        self.data.get(start..).ok_or(BitmapError::UnexpectedEof {
            needed: start,
            actual: self.data.len(),
        })
    }

    /// Decode the pixel data into `height` rows of `width` pixels.
    ///
    /// Rows are assumed packed (no 4-byte alignment); see
    /// [`Bitmap::decode_pixel_grid_with`] for padded files. The grid is
    /// computed once and kept for later calls, so the returned reference
    /// borrows this `Bitmap`; bind the bitmap before decoding.
    pub fn decode_pixel_grid(&self) -> Result<&PixelGrid, BitmapError> {
        if let Some(grid) = self.grid.get() {
            return Ok(grid);
        }
        let grid = self.decode_pixel_grid_with(RowStride::Packed, &Unstoppable)?;
        Ok(self.grid.get_or_init(|| grid))
    }

    /// Decode without caching, with an explicit row stride and stop token.
    ///
    /// Only uncompressed 24-bit data can be decoded.
    pub fn decode_pixel_grid_with(
        &self,
        stride: RowStride,
        stop: &dyn Stop,
    ) -> Result<PixelGrid, BitmapError> {
        let compression = self.compression()?;
        if compression != 0 {
            return Err(BitmapError::UnsupportedCompression { compression });
        }
        let bit_count = self.bit_count()?;
        if bit_count != 24 {
            return Err(BitmapError::UnsupportedBitDepth(bit_count));
        }
        let width = self.width()?;
        let height = self.height()?;
        let pixels = self.raw_pixel_data()?;
        if let Some(limits) = &self.limits {
            limits.check(width, height)?;
        }
        stop.check()?;
        log::debug!(
            "decoding {width}x{height} pixel grid from {} bytes ({stride:?} rows)",
            pixels.len()
        );
        decode::decode_grid(pixels, width, height, stride, stop)
    }
}
