//! Fixed-offset fields of the 14-byte file header and 40-byte info header.

use crate::error::BitmapError;

pub(crate) const FILE_HEADER_LEN: usize = 14;
pub(crate) const INFO_HEADER_LEN: usize = 40;
/// End of the info header; the color table (or pixel data) starts here.
pub(crate) const HEADERS_END: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

pub(crate) const SIGNATURE: usize = 0;
pub(crate) const FILE_SIZE: usize = 2;
pub(crate) const RESERVED: usize = 6;
pub(crate) const PIXEL_DATA_OFFSET: usize = 10;
pub(crate) const INFO_HEADER_SIZE: usize = 14;
pub(crate) const WIDTH: usize = 18;
pub(crate) const HEIGHT: usize = 22;
pub(crate) const PLANES: usize = 26;
pub(crate) const BIT_COUNT: usize = 28;
pub(crate) const COMPRESSION: usize = 30;
pub(crate) const IMAGE_SIZE: usize = 34;
pub(crate) const X_PIXELS_PER_METER: usize = 38;
pub(crate) const Y_PIXELS_PER_METER: usize = 42;
pub(crate) const COLORS_USED: usize = 46;
pub(crate) const COLORS_IMPORTANT: usize = 50;

/// Two-letter tag at the start of a BMP file.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signature {
    /// `BM`: Windows 3.1 or later
    Bm,
    /// `BA`: OS/2 bitmap array
    Ba,
    /// `CI`: OS/2 color icon
    Ci,
    /// `CP`: OS/2 color pointer
    Cp,
    /// `IC`: OS/2 icon
    Ic,
    /// `PT`: OS/2 pointer
    Pt,
    /// Anything else, including input shorter than two bytes.
    Unrecognized,
}

impl Signature {
    pub fn from_bytes(tag: [u8; 2]) -> Self {
        match &tag {
            b"BM" => Self::Bm,
            b"BA" => Self::Ba,
            b"CI" => Self::Ci,
            b"CP" => Self::Cp,
            b"IC" => Self::Ic,
            b"PT" => Self::Pt,
            _ => Self::Unrecognized,
        }
    }

    /// The magic bytes, or `None` for [`Signature::Unrecognized`].
    pub fn as_bytes(self) -> Option<[u8; 2]> {
        Some(match self {
            Self::Bm => *b"BM",
            Self::Ba => *b"BA",
            Self::Ci => *b"CI",
            Self::Cp => *b"CP",
            Self::Ic => *b"IC",
            Self::Pt => *b"PT",
            Self::Unrecognized => return None,
        })
    }

    pub fn is_recognized(self) -> bool {
        self != Self::Unrecognized
    }
}

pub(crate) fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], BitmapError> {
    let needed = offset + N;
    data.get(offset..needed)
        .and_then(|s| s.try_into().ok())
        .ok_or(BitmapError::UnexpectedEof {
            needed,
            actual: data.len(),
        })
}

pub(crate) fn read_u16_le(data: &[u8], offset: usize) -> Result<u16, BitmapError> {
    read_array(data, offset).map(u16::from_le_bytes)
}

pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, BitmapError> {
    read_array(data, offset).map(u32::from_le_bytes)
}

pub(crate) fn read_range(data: &[u8], start: usize, end: usize) -> Result<&[u8], BitmapError> {
    data.get(start..end).ok_or(BitmapError::UnexpectedEof {
        needed: end,
        actual: data.len(),
    })
}

/// The 14-byte file header, all fields decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: Signature,
    pub file_size: u32,
    pub reserved: [u8; 4],
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Parse from the start of a BMP file.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        Ok(Self {
            signature: Signature::from_bytes(read_array(data, SIGNATURE)?),
            file_size: read_u32_le(data, FILE_SIZE)?,
            reserved: read_array(data, RESERVED)?,
            pixel_data_offset: read_u32_le(data, PIXEL_DATA_OFFSET)?,
        })
    }
}

/// The 40-byte info header, all fields decoded.
///
/// Resolution and color-count fields are only meaningful for uncompressed
/// images and are `None` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: Option<u32>,
    pub y_pixels_per_meter: Option<u32>,
    pub colors_used: Option<u32>,
    pub colors_important: Option<u32>,
}

impl InfoHeader {
    /// Parse from a whole BMP file (the info header starts at byte 14).
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        // Bounds first, so a truncated header fails before any field is decoded.
        read_range(data, FILE_HEADER_LEN, HEADERS_END)?;
        let compression = read_u32_le(data, COMPRESSION)?;
        let gated = |offset| -> Result<Option<u32>, BitmapError> {
            if compression == 0 {
                read_u32_le(data, offset).map(Some)
            } else {
                Ok(None)
            }
        };
        Ok(Self {
            header_size: read_u32_le(data, INFO_HEADER_SIZE)?,
            width: read_u32_le(data, WIDTH)?,
            height: read_u32_le(data, HEIGHT)?,
            planes: read_u16_le(data, PLANES)?,
            bit_count: read_u16_le(data, BIT_COUNT)?,
            compression,
            image_size: read_u32_le(data, IMAGE_SIZE)?,
            x_pixels_per_meter: gated(X_PIXELS_PER_METER)?,
            y_pixels_per_meter: gated(Y_PIXELS_PER_METER)?,
            colors_used: gated(COLORS_USED)?,
            colors_important: gated(COLORS_IMPORTANT)?,
        })
    }
}
