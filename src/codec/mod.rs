pub mod png;

use log::error;
use std::io::{Cursor, Read, Write};
use thiserror::Error;

use crate::image::format::PixelFormat;
use crate::image::Image;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read image stream")]
    Io(#[from] std::io::Error),
    #[error("Image decoder error: {0}")]
    Decoder(#[from] lodepng::Error),
    #[error("Invalid PNG bit depth: {0}")]
    InvalidBitDepth(u32),
    #[error("Unknown PNG image color type: {0:?}")]
    UnknownColorType(lodepng::ColorType),
    #[error("Decoder produced a buffer inconsistent with the image header")]
    MalformedOutput,
    #[error("No codec recognizes this image format")]
    UnknownFormat,
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to write image stream")]
    Io(#[from] std::io::Error),
    #[error("Image encoder error: {0}")]
    Encoder(#[from] lodepng::Error),
    #[error("Saving image with incompatible pixel format: {0:?}")]
    IncompatibleFormat(PixelFormat),
    #[error("No codec registered for format {0:?}")]
    UnknownFormat(String),
}

/// Contract every image codec plugs into the asset pipeline with.
///
/// `detect` is called speculatively across candidate codecs and must never
/// fail; the stream position it leaves behind is unspecified, so dispatch
/// hands each codec a fresh cursor.
pub trait ImageCodec {
    fn mimetype(&self) -> &'static str;
    fn detect(&self, reader: &mut dyn Read) -> bool;
    fn load(&self, reader: &mut dyn Read) -> Result<Image, LoadError>;
    fn save(&self, writer: &mut dyn Write, image: &Image) -> Result<(), SaveError>;
}

static CODECS: &[&(dyn ImageCodec + Sync)] = &[&png::PngCodec];

/// All registered codecs, in detection order.
pub fn codecs() -> &'static [&'static (dyn ImageCodec + Sync)] {
    CODECS
}

/// Decodes an in-memory image with the first codec whose signature matches.
pub fn from_memory(data: &[u8]) -> Result<Image, LoadError> {
    for codec in codecs() {
        if codec.detect(&mut Cursor::new(data)) {
            return codec.load(&mut Cursor::new(data));
        }
    }

    error!("No codec matched a {}-byte image", data.len());
    Err(LoadError::UnknownFormat)
}

/// Encodes `image` with the codec registered for `mimetype`.
pub fn save_as(
    writer: &mut dyn Write,
    image: &Image,
    mimetype: &str,
) -> Result<(), SaveError> {
    match codecs().iter().find(|c| c.mimetype() == mimetype) {
        Some(codec) => codec.save(writer, image),
        None => {
            error!("No codec registered for format {:?}", mimetype);
            Err(SaveError::UnknownFormat(mimetype.to_owned()))
        }
    }
}
