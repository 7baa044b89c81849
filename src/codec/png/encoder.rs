use log::{debug, error, info};
use lodepng::ColorType;
use std::io::Write;

use crate::codec::SaveError;
use crate::image::format::PixelFormat;
use crate::image::Image;

/// Encodes an engine image as a PNG stream.
///
/// Always writes 8-bit, non-interlaced RGB or RGBA with default compression
/// and filtering. Indexed images are not re-encoded. Sprite offsets are not
/// round-tripped; no `grAb` chunk is ever written.
///
/// `Bgr`/`Bgra` buffers are written byte-for-byte, without reordering into
/// the RGB sample order PNG expects. Callers that need standard-compliant
/// output from BGR sources must swap channels first.
pub fn save(writer: &mut dyn Write, image: &Image) -> Result<(), SaveError> {
    let color_type = match image.format() {
        PixelFormat::Rgb | PixelFormat::Bgr => ColorType::RGB,
        PixelFormat::Rgba | PixelFormat::Bgra => ColorType::RGBA,
        format => {
            error!("Saving image with incompatible pixel format: {:?}", format);
            return Err(SaveError::IncompatibleFormat(format));
        }
    };

    let mut encoder = lodepng::Encoder::new();
    encoder.set_auto_convert(false);
    encoder.info_raw_mut().colortype = color_type;
    encoder.info_raw_mut().set_bitdepth(8);
    encoder.info_png_mut().color.colortype = color_type;
    encoder.info_png_mut().color.set_bitdepth(8);

    debug!(
        "Encoding {}x{} {:?} image as PNG color type {:?}",
        image.width(),
        image.height(),
        image.format(),
        color_type
    );

    let encoded = encoder.encode::<u8>(
        image.data(),
        image.width() as usize,
        image.height() as usize,
    )?;

    writer.write_all(&encoded)?;
    writer.flush()?;

    info!("Encoded PNG stream of {} bytes", encoded.len());
    Ok(())
}
