//! Test corpus: roundtrips with various patterns and sizes, malformed input.

use bmpgrid::*;
use enough::{Stop, StopReason, Unstoppable};

fn checkerboard(w: usize, h: usize) -> PixelGrid {
    (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    if (x + y) % 2 == 0 {
                        [200, 220, 240]
                    } else {
                        [10, 40, 70]
                    }
                })
                .collect()
        })
        .collect()
}

fn noise_pattern(w: usize, h: usize) -> PixelGrid {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    (0..h)
        .map(|_| (0..w).map(|_| [next(), next(), next()]).collect())
        .collect()
}

/// Always reports cancellation.
struct Stopped;

impl Stop for Stopped {
    fn check(&self) -> Result<(), StopReason> {
        Err(StopReason::Cancelled)
    }
}

// ── Roundtrips ───────────────────────────────────────────────────────

#[test]
fn checkerboard_roundtrip_all_strides() {
    for stride in [RowStride::Packed, RowStride::Padded] {
        for (w, h) in [(1, 1), (2, 3), (5, 4), (8, 6), (13, 2)] {
            let grid = checkerboard(w, h);
            let file = encode_bmp(&grid, stride, &Unstoppable).unwrap();
            let bmp = Bitmap::new(&file);
            let decoded = bmp.decode_pixel_grid_with(stride, &Unstoppable).unwrap();
            assert_eq!(decoded, grid, "{w}x{h} {stride:?}");
        }
    }
}

#[test]
fn noise_roundtrip_large() {
    let grid = noise_pattern(67, 41);
    let file = encode_bmp(&grid, RowStride::Packed, &Unstoppable).unwrap();
    let bmp = Bitmap::new(&file);
    assert_eq!(bmp.decode_pixel_grid().unwrap(), &grid);
    let raw = encode_pixel_grid(bmp.decode_pixel_grid().unwrap()).unwrap();
    assert_eq!(raw, bmp.raw_pixel_data().unwrap());
}

#[test]
fn stop_cancels_decode_and_encode() {
    let grid = checkerboard(4, 4);
    let file = encode_bmp(&grid, RowStride::Packed, &Unstoppable).unwrap();
    let bmp = Bitmap::new(&file);
    assert!(matches!(
        bmp.decode_pixel_grid_with(RowStride::Packed, &Stopped),
        Err(BitmapError::Cancelled(_))
    ));
    assert!(matches!(
        encode_bmp(&grid, RowStride::Packed, &Stopped),
        Err(BitmapError::Cancelled(_))
    ));
    // cancellation leaves the bitmap usable
    assert_eq!(bmp.decode_pixel_grid().unwrap(), &grid);
}

// ── Recognized signatures ────────────────────────────────────────────

#[test]
fn all_signatures_recognized() {
    for (tag, sig) in [
        (b"BM", Signature::Bm),
        (b"BA", Signature::Ba),
        (b"CI", Signature::Ci),
        (b"CP", Signature::Cp),
        (b"IC", Signature::Ic),
        (b"PT", Signature::Pt),
    ] {
        assert_eq!(Bitmap::new(tag).type_of(), sig);
        assert_eq!(sig.as_bytes(), Some(*tag));
    }
    assert_eq!(Bitmap::new(b"P6").type_of(), Signature::Unrecognized);
    assert_eq!(Bitmap::new(b"").type_of(), Signature::Unrecognized);
}

// ── Palettized headers ───────────────────────────────────────────────

#[test]
fn palettized_color_table_end() {
    for (bits, end) in [(1u16, 58usize), (4, 118), (8, 1078)] {
        let mut data = encode_bmp(&checkerboard(1, 1), RowStride::Packed, &Unstoppable).unwrap();
        data[28..30].copy_from_slice(&bits.to_le_bytes());
        let bmp = Bitmap::new(&data);
        assert_eq!(bmp.color_table_end().unwrap(), end);
        assert_eq!(
            tables::raster_description(bits).unwrap().compression,
            0,
            "{bits}-bit"
        );
    }
}

// ── Malformed input ──────────────────────────────────────────────────

#[test]
fn truncated_input_reports_eof() {
    let file = encode_bmp(&checkerboard(2, 2), RowStride::Packed, &Unstoppable).unwrap();
    let short = &file[..20];
    let bmp = Bitmap::new(short);
    assert_eq!(bmp.type_of(), Signature::Bm);
    assert!(bmp.header().is_ok());
    assert!(matches!(
        bmp.height(),
        Err(BitmapError::UnexpectedEof {
            needed: 26,
            actual: 20
        })
    ));
    assert!(bmp.decode_pixel_grid().is_err());
    assert!(bmp.info_header_fields().is_err());
}

#[test]
fn garbage_never_panics() {
    let mut state: u32 = 0x1234_5678;
    for len in [0usize, 1, 2, 13, 14, 53, 54, 55, 60, 200, 1100] {
        let data: Vec<u8> = (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        let limits = Limits {
            max_pixels: Some(1 << 20),
            ..Default::default()
        };
        let bmp = Bitmap::new(&data).with_limits(limits);
        let _ = bmp.type_of();
        let _ = bmp.file_header();
        let _ = bmp.info_header_fields();
        let _ = bmp.color_table();
        let _ = bmp.raw_pixel_data();
        let _ = bmp.validate();
        let _ = bmp.decode_pixel_grid();
    }
}
