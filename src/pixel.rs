use alloc::vec::Vec;

/// One 24-bit pixel, channels in the order they are stored in the file.
///
/// BMP stores blue first; no swizzle is applied.
pub type Pixel = [u8; 3];

/// Rows of pixels, first row first as stored.
pub type PixelGrid = Vec<Vec<Pixel>>;

/// Channels per pixel in a decoded grid.
pub const CHANNELS: usize = 3;

/// Named-field view of a color triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbRecord {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Pack red, green and blue values into a tuple.
pub fn rgb_tuple(red: u8, green: u8, blue: u8) -> (u8, u8, u8) {
    (red, green, blue)
}

/// Name the fields of a `(red, green, blue)` tuple.
pub fn rgb_record(rgb: (u8, u8, u8)) -> RgbRecord {
    RgbRecord {
        red: rgb.0,
        green: rgb.1,
        blue: rgb.2,
    }
}

impl From<(u8, u8, u8)> for RgbRecord {
    fn from(rgb: (u8, u8, u8)) -> Self {
        rgb_record(rgb)
    }
}

impl From<RgbRecord> for (u8, u8, u8) {
    fn from(r: RgbRecord) -> Self {
        rgb_tuple(r.red, r.green, r.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<RgbRecord> for rgb::RGB8 {
    fn from(r: RgbRecord) -> Self {
        rgb::RGB8::new(r.red, r.green, r.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for RgbRecord {
    fn from(p: rgb::RGB8) -> Self {
        RgbRecord {
            red: p.r,
            green: p.g,
            blue: p.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_and_record() {
        let t = rgb_tuple(255, 128, 0);
        assert_eq!(t, (255, 128, 0));
        let r = rgb_record(t);
        assert_eq!(r.red, 255);
        assert_eq!(r.green, 128);
        assert_eq!(r.blue, 0);
        let back: (u8, u8, u8) = r.into();
        assert_eq!(back, t);
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn rgb8_conversion() {
        let r = RgbRecord {
            red: 1,
            green: 2,
            blue: 3,
        };
        let p: rgb::RGB8 = r.into();
        assert_eq!((p.r, p.g, p.b), (1, 2, 3));
        assert_eq!(RgbRecord::from(p), r);
    }
}
