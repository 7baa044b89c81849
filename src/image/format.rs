/// Pixel layouts the engine understands.
///
/// `Index8` pixels are 8-bit indices into the image's [`Palette`]; all other
/// formats store one byte per channel in the order the name spells out.
///
/// [`Palette`]: crate::image::palette::Palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Index8,
    Rgb,
    Bgr,
    Rgba,
    Bgra,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Index8 => 1,
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Bgra => 4,
        }
    }

    /// Color channels carried per pixel. A palette index counts as 1.
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Index8 => 1,
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
            PixelFormat::Rgba | PixelFormat::Bgra => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba | PixelFormat::Bgra)
    }

    pub const fn is_indexed(self) -> bool {
        matches!(self, PixelFormat::Index8)
    }

    /// Mask covering the addressable palette range of an indexed format.
    pub const fn index_mask(self) -> Option<u8> {
        match self {
            PixelFormat::Index8 => Some(0xff),
            _ => None,
        }
    }
}
