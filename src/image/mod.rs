pub mod format;
pub mod palette;

use log::debug;
use thiserror::Error;

pub use format::PixelFormat;
pub use palette::Palette;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unsupported pixel format conversion: {0:?} -> {1:?}")]
    Unsupported(PixelFormat, PixelFormat),
    #[error("Invalid palette index: {0} exceeds palette size of {1}")]
    InvalidPaletteIndex(usize, usize),
    #[error("Indexed image has no palette")]
    MissingPalette,
}

/// In-memory image as the engine consumes it.
///
/// The buffer always holds exactly `height` rows of `width` pixels in the
/// declared format. `Index8` images always carry a palette; it defaults to
/// 256 opaque black RGB entries until a codec fills it in. Sprite offsets
/// default to `(0, 0)`.
#[derive(Debug)]
pub struct Image {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
    palette: Option<Palette>,
    offsets: (i32, i32),
}

impl Image {
    /// Creates an image with a zeroed pixel buffer.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let size = width as usize * height as usize * format.bytes_per_pixel();

        Self {
            width,
            height,
            format,
            data: vec![0; size],
            palette: format
                .is_indexed()
                .then(|| Palette::new(PixelFormat::Rgb, palette::MAX_PALETTE_ENTRIES)),
            offsets: (0, 0),
        }
    }

    /// Wraps an existing pixel buffer, or `None` if its length does not
    /// match `width * height * bytes_per_pixel(format)`.
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Option<Self> {
        let size = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != size {
            return None;
        }

        Some(Self {
            width,
            height,
            format,
            data,
            palette: format
                .is_indexed()
                .then(|| Palette::new(PixelFormat::Rgb, palette::MAX_PALETTE_ENTRIES)),
            offsets: (0, 0),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per scanline.
    pub fn pitch(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn scanline(&self, row: u32) -> &[u8] {
        let pitch = self.pitch();
        let start = row as usize * pitch;
        &self.data[start..start + pitch]
    }

    pub fn scanline_mut(&mut self, row: u32) -> &mut [u8] {
        let pitch = self.pitch();
        let start = row as usize * pitch;
        &mut self.data[start..start + pitch]
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn palette_mut(&mut self) -> Option<&mut Palette> {
        self.palette.as_mut()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    /// Sprite hotspot offsets from the `grAb` chunk, `(0, 0)` if absent.
    pub fn offsets(&self) -> (i32, i32) {
        self.offsets
    }

    pub fn set_offsets(&mut self, offsets: (i32, i32)) {
        self.offsets = offsets;
    }

    /// Expands an `Index8` image through its palette into `Rgb` or `Rgba`.
    ///
    /// The engine does this right after loading a sprite whenever it does
    /// not want to keep the raw palette around. Converting an image that is
    /// already in the requested format is a no-op; any other conversion is
    /// unsupported.
    pub fn convert(&mut self, format: PixelFormat) -> Result<(), ConvertError> {
        if self.format == format {
            return Ok(());
        }
        if !self.format.is_indexed() || !matches!(format, PixelFormat::Rgb | PixelFormat::Rgba) {
            return Err(ConvertError::Unsupported(self.format, format));
        }

        let palette = self.palette.as_ref().ok_or(ConvertError::MissingPalette)?;
        let bpp = format.bytes_per_pixel();
        let mut out = Vec::with_capacity(self.data.len() * bpp);

        for &index in &self.data {
            let index = index as usize;
            if index >= palette.len() {
                return Err(ConvertError::InvalidPaletteIndex(index, palette.len()));
            }

            let entry = palette.entry(index);
            out.extend_from_slice(&entry[..3]);
            if format.has_alpha() {
                out.push(if palette.has_alpha() { entry[3] } else { 0xff });
            }
        }

        debug!(
            "Converted {}x{} image: {:?} -> {:?}",
            self.width, self.height, self.format, format
        );

        self.data = out;
        self.format = format;
        self.palette = None;
        Ok(())
    }
}
