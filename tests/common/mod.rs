#![allow(dead_code)]

use lodepng::{ChunkPosition, ColorType, Encoder, RGBA};

/// Builds a PNG in memory with full control over the on-disk color mode.
///
/// `pixels` must already be laid out in `colortype`/`bitdepth` order (packed
/// for sub-byte depths, big-endian for 16-bit). Palette entries with alpha
/// below 255 make the encoder emit a tRNS chunk. `grab` adds the private
/// `grAb` sprite-offset chunk right after IHDR.
pub fn make_png(
    colortype: ColorType,
    bitdepth: u32,
    palette: &[RGBA],
    grab: Option<(i32, i32)>,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.set_auto_convert(false);
    encoder.info_raw_mut().colortype = colortype;
    encoder.info_raw_mut().set_bitdepth(bitdepth);
    encoder.info_png_mut().color.colortype = colortype;
    encoder.info_png_mut().color.set_bitdepth(bitdepth);

    for &entry in palette {
        encoder.info_raw_mut().palette_add(entry).unwrap();
        encoder.info_png_mut().color.palette_add(entry).unwrap();
    }

    if let Some((x, y)) = grab {
        let mut payload = Vec::new();
        payload.extend_from_slice(&x.to_be_bytes());
        payload.extend_from_slice(&y.to_be_bytes());
        encoder
            .info_png_mut()
            .create_chunk(ChunkPosition::IHDR, b"grAb", &payload)
            .unwrap();
    }

    encoder.encode(pixels, width, height).unwrap()
}

pub fn rgb_png(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    make_png(ColorType::RGB, 8, &[], None, pixels, width, height)
}

pub fn gray_png(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    make_png(ColorType::GREY, 8, &[], None, pixels, width, height)
}

/// Adam7-interlaced RGB PNG; `pixels` are in plain row-major order.
pub fn rgb_png_interlaced(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.set_auto_convert(false);
    encoder.info_raw_mut().colortype = ColorType::RGB;
    encoder.info_raw_mut().set_bitdepth(8);
    encoder.info_png_mut().color.colortype = ColorType::RGB;
    encoder.info_png_mut().color.set_bitdepth(8);
    encoder.info_png_mut().interlace_method = 1;

    encoder.encode(pixels, width, height).unwrap()
}
