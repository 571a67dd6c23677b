use crate::icon::geometry::CheckmarkGeometry;
use crate::icon::palette::Palette;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Square RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bytes of one row, without any filter prefix.
    pub fn row_len(&self) -> usize {
        self.size as usize * CHANNELS
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.row_len().max(1))
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.size as usize + x as usize) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Paint the checkmark icon for `size` using `palette`.
///
/// Each pixel starts as background, becomes panel inside the inset rectangle,
/// and becomes glyph when it is within stroke thickness of the checkmark.
pub fn render(size: u32, palette: &Palette) -> PixelGrid {
    let geometry = CheckmarkGeometry::for_size(size);
    let mut data = Vec::with_capacity(size as usize * size as usize * CHANNELS);

    for y in 0..size {
        for x in 0..size {
            let colour = if geometry.in_glyph(x, y) {
                palette.glyph
            } else if geometry.in_panel(x, y) {
                palette.panel
            } else {
                palette.background
            };
            data.extend_from_slice(&colour.to_rgba());
        }
    }

    PixelGrid { size, data }
}
