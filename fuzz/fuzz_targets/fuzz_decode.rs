#![no_main]
use bmpgrid::{Bitmap, Limits, RowStride};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let bmp = Bitmap::new(data).with_limits(limits);

    // Every accessor must return, never panic
    let _ = bmp.type_of();
    let _ = bmp.file_header();
    let _ = bmp.info_header_fields();
    let _ = bmp.colors_used();
    let _ = bmp.color_table();
    let _ = bmp.raw_pixel_data();
    let _ = bmp.validate();
    let _ = bmp.decode_pixel_grid();
    let _ = bmp.decode_pixel_grid_with(RowStride::Padded, &enough::Unstoppable);
});
