use crate::image::format::PixelFormat;

pub const MAX_PALETTE_ENTRIES: usize = 256;

/// Color table for indexed images.
///
/// Entries are stored as a flat byte array in `format` order. The entry
/// count never exceeds the addressable range of an 8-bit index.
#[derive(Debug, Clone)]
pub struct Palette {
    format: PixelFormat,
    data: Vec<u8>,
}

impl Palette {
    /// Creates a zero-filled palette of `count` entries.
    ///
    /// Only `Rgb` and `Rgba` entry formats are meaningful; `count` must not
    /// exceed [`MAX_PALETTE_ENTRIES`]. Both are invariants of the callers
    /// inside this crate, so violations are programming errors.
    pub fn new(format: PixelFormat, count: usize) -> Self {
        assert!(
            matches!(format, PixelFormat::Rgb | PixelFormat::Rgba),
            "palette entries must be rgb or rgba"
        );
        assert!(count <= MAX_PALETTE_ENTRIES, "palette holds at most 256 entries");

        Self {
            format,
            data: vec![0; count * format.bytes_per_pixel()],
        }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.format.bytes_per_pixel()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_alpha(&self) -> bool {
        self.format.has_alpha()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bytes of one entry, in entry-format order.
    pub fn entry(&self, index: usize) -> &[u8] {
        let bpp = self.format.bytes_per_pixel();
        &self.data[index * bpp..(index + 1) * bpp]
    }

    pub fn entry_mut(&mut self, index: usize) -> &mut [u8] {
        let bpp = self.format.bytes_per_pixel();
        &mut self.data[index * bpp..(index + 1) * bpp]
    }
}
