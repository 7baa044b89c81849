pub mod decoder;
pub mod encoder;

use std::io::{Read, Write};

use crate::codec::{ImageCodec, LoadError, SaveError};
use crate::image::Image;

/// Canonical PNG signature: the first 8 bytes of every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// PNG codec backed by lodepng.
///
/// Understands grayscale (with or without alpha), RGB, RGBA and 8-bit
/// paletted sources at any bit depth up to 16, plus the private `grAb`
/// sprite-offset chunk. Writes RGB/RGBA only.
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn mimetype(&self) -> &'static str {
        "png"
    }

    fn detect(&self, reader: &mut dyn Read) -> bool {
        let mut magic = [0u8; 8];
        match reader.read_exact(&mut magic) {
            Ok(()) => magic == PNG_SIGNATURE,
            // Short reads and I/O failures are a non-match, never an error.
            Err(_) => false,
        }
    }

    fn load(&self, reader: &mut dyn Read) -> Result<Image, LoadError> {
        decoder::load(reader)
    }

    fn save(&self, writer: &mut dyn Write, image: &Image) -> Result<(), SaveError> {
        encoder::save(writer, image)
    }
}
