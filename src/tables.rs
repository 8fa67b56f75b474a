//! Descriptive lookup tables for BMP bit depths and compression codes.
//!
//! The 16 and 24-bit palette sizes are the number of representable colors,
//! not an on-disk palette. Only 1, 4 and 8-bit images carry a color table.

use crate::error::BitmapError;

/// Bit depths with a descriptive entry.
pub const KNOWN_BIT_DEPTHS: [u16; 5] = [1, 4, 8, 16, 24];

/// Type label and color count for a bit depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitDepthDescription {
    pub label: &'static str,
    pub palette_size: u32,
}

/// Compression scheme stored in the info header.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    /// `BI_RGB`
    None,
    /// `BI_RLE8`
    Rle8,
    /// `BI_RLE4`
    Rle4,
}

impl Compression {
    pub fn from_code(code: u32) -> Result<Self, BitmapError> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Rle8),
            2 => Ok(Self::Rle4),
            other => Err(BitmapError::UnknownCompression(other)),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Rle8 => 1,
            Self::Rle4 => 2,
        }
    }

    pub fn name(self) -> CompressionName {
        match self {
            Self::None => CompressionName {
                symbol: "BI_RGB",
                label: "no compression",
            },
            Self::Rle8 => CompressionName {
                symbol: "BI_RLE8",
                label: "8bit RLE encoding",
            },
            Self::Rle4 => CompressionName {
                symbol: "BI_RLE4",
                label: "4bit RLE encoding",
            },
        }
    }
}

/// Symbolic and human-readable name of a compression code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressionName {
    pub symbol: &'static str,
    pub label: &'static str,
}

/// How a palettized raster packs its pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterDescription {
    pub color_class: &'static str,
    pub compression: u32,
    /// Pixels stored in each byte of raster data.
    pub pixels_per_byte: u8,
}

/// Number of colors a bit depth can represent.
pub fn palette_size(bit_count: u16) -> Result<u32, BitmapError> {
    bit_depth_description(bit_count).map(|d| d.palette_size)
}

pub fn bit_depth_description(bit_count: u16) -> Result<BitDepthDescription, BitmapError> {
    let (label, palette_size) = match bit_count {
        1 => ("monochrome palette", 1),
        4 => ("4bit palletised", 16),
        8 => ("8bit palletised", 256),
        16 => ("16bit RGB", 65_536),
        24 => ("24bit RGB", 16_000_000),
        other => return Err(BitmapError::UnknownBitDepth(other)),
    };
    Ok(BitDepthDescription {
        label,
        palette_size,
    })
}

pub fn compression_name(code: u32) -> Result<CompressionName, BitmapError> {
    Compression::from_code(code).map(Compression::name)
}

/// Raster layout for palettized depths (1, 4, 8). Direct-color depths have no entry.
pub fn raster_description(bit_count: u16) -> Result<RasterDescription, BitmapError> {
    let (color_class, pixels_per_byte) = match bit_count {
        1 => ("black/white", 8),
        4 => ("16_color", 2),
        8 => ("256_color", 1),
        other => return Err(BitmapError::UnsupportedBitDepth(other)),
    };
    Ok(RasterDescription {
        color_class,
        compression: 0,
        pixels_per_byte,
    })
}
