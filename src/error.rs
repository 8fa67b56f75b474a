use alloc::string::String;
use enough::StopReason;

/// Errors from BMP header access and pixel grid decoding/encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized BMP signature")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("field requires uncompressed data, compression is {compression}")]
    UnsupportedCompression { compression: u32 },

    #[error("unknown bit depth: {0}")]
    UnknownBitDepth(u16),

    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("unknown compression code: {0}")]
    UnknownCompression(u32),

    #[error("pixel data is {actual} bytes, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid pixel grid: {0}")]
    InvalidGrid(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input: need {needed} bytes, got {actual}")]
    UnexpectedEof { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
