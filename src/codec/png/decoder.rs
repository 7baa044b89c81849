use log::{debug, error, info};
use lodepng::ColorType;
use rgb::ComponentBytes;
use std::io::Read;

use crate::codec::LoadError;
use crate::image::format::PixelFormat;
use crate::image::palette::Palette;
use crate::image::Image;

/// Private ancillary chunk carrying a sprite's hotspot as two big-endian
/// 32-bit integers. Doom-lineage engines stash it between IHDR and IDAT.
const OFFSET_CHUNK: &[u8; 4] = b"grAb";

/// Decodes a PNG stream into an engine image.
///
/// Output is always 8 bits per channel, de-interlaced and unpacked:
/// grayscale sources are expanded to RGB (RGBA when they carry alpha),
/// 16-bit channels are stripped to 8, and 8-bit paletted sources are kept
/// as raw indices with the palette reconstructed alongside.
pub fn load(reader: &mut dyn Read) -> Result<Image, LoadError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut decoder = lodepng::Decoder::new();
    decoder.remember_unknown_chunks(true);

    let (width, height) = decoder.inspect(&data)?;
    let color_type = decoder.info_png().color.colortype;
    let bit_depth = decoder.info_png().color.bitdepth();
    debug!(
        "PNG header: {}x{}, color type {:?}, bit depth {}",
        width, height, color_type, bit_depth
    );

    let format = match color_type {
        // Gray expands to one component per channel; gray+alpha goes to
        // full RGBA. Either way lodepng also strips 16-bit channels and
        // undoes interlacing on the way out.
        ColorType::GREY | ColorType::RGB => {
            decoder.info_raw_mut().colortype = ColorType::RGB;
            decoder.info_raw_mut().set_bitdepth(8);
            PixelFormat::Rgb
        }
        ColorType::GREY_ALPHA | ColorType::RGBA => {
            decoder.info_raw_mut().colortype = ColorType::RGBA;
            decoder.info_raw_mut().set_bitdepth(8);
            PixelFormat::Rgba
        }
        ColorType::PALETTE => match bit_depth {
            8 => {
                // Keep the raw indices; the palette travels separately.
                decoder.color_convert(false);
                PixelFormat::Index8
            }
            depth => {
                error!("Invalid PNG bit depth: {}", depth);
                return Err(LoadError::InvalidBitDepth(depth));
            }
        },
        other => {
            error!("Unknown PNG image color type: {:?}", other);
            return Err(LoadError::UnknownColorType(other));
        }
    };

    let pixels = match decoder.decode(&data)? {
        lodepng::Image::RGB(bitmap) => bitmap.buffer.as_bytes().to_owned(),
        lodepng::Image::RGBA(bitmap) => bitmap.buffer.as_bytes().to_owned(),
        lodepng::Image::RawData(bitmap) => bitmap.buffer,
        _ => return Err(LoadError::MalformedOutput),
    };

    let mut image = Image::from_raw(width as u32, height as u32, format, pixels)
        .ok_or(LoadError::MalformedOutput)?;

    if format.is_indexed() {
        read_palette(&decoder, &mut image)?;
    }

    image.set_offsets(read_offsets(&decoder));

    info!(
        "Decoded {}x{} PNG as {:?}",
        image.width(),
        image.height(),
        image.format()
    );
    Ok(image)
}

/// Rebuilds the image palette from the PLTE (and folded-in tRNS) data.
///
/// lodepng merges the tRNS table into its palette entries, so transparency
/// shows up as any entry with alpha below 255. With transparency present
/// the image gets a fresh RGBA palette sized to the PLTE table; without it
/// only the R/G/B bytes of the image's default palette are filled in.
fn read_palette(decoder: &lodepng::Decoder, image: &mut Image) -> Result<(), LoadError> {
    let color = &decoder.info_png().color;
    let plte = color.palette();

    if color.has_palette_alpha() {
        let mut palette = Palette::new(PixelFormat::Rgba, plte.len());
        for (i, c) in plte.iter().enumerate() {
            palette.entry_mut(i).copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }

        debug!("Installed RGBA palette with {} entries", palette.len());
        image.set_palette(palette);
    } else {
        let palette = image.palette_mut().ok_or(LoadError::MalformedOutput)?;
        let count = plte.len().min(palette.len());
        for (i, c) in plte.iter().take(count).enumerate() {
            palette.entry_mut(i)[..3].copy_from_slice(&[c.r, c.g, c.b]);
        }

        debug!("Filled RGB palette with {} entries", count);
    }

    Ok(())
}

/// Sprite offsets from the `grAb` chunk, `(0, 0)` when absent or short.
fn read_offsets(decoder: &lodepng::Decoder) -> (i32, i32) {
    match decoder.info_png().get(OFFSET_CHUNK) {
        Some(chunk) if chunk.data().len() >= 8 => {
            let d = chunk.data();
            let x = i32::from_be_bytes([d[0], d[1], d[2], d[3]]);
            let y = i32::from_be_bytes([d[4], d[5], d[6], d[7]]);
            debug!("Sprite offsets from grAb chunk: ({}, {})", x, y);
            (x, y)
        }
        _ => (0, 0),
    }
}
