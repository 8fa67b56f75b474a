#![no_main]
use bmpgrid::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must reproduce the raw pixel data
    for stride in [RowStride::Packed, RowStride::Padded] {
        let bmp = Bitmap::new(data);
        let Ok(grid) = bmp.decode_pixel_grid_with(stride, &enough::Unstoppable) else {
            continue;
        };
        let raw = encode_pixel_grid_with(&grid, stride, &enough::Unstoppable)
            .expect("decoded grid must re-encode");
        if stride == RowStride::Packed {
            assert_eq!(&raw[..], bmp.raw_pixel_data().unwrap(), "roundtrip byte mismatch");
        }

        let file = encode_bmp(&grid, stride, &enough::Unstoppable).expect("grid must encode");
        let again = Bitmap::new(&file)
            .decode_pixel_grid_with(stride, &enough::Unstoppable)
            .expect("re-encoded data failed to decode");
        assert_eq!(grid, again, "roundtrip pixel mismatch");
    }
});
