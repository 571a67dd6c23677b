//! Minimal PNG container writer and validator.
//!
//! Writes exactly three chunks: IHDR, a single IDAT holding zlib-compressed
//! unfiltered scanlines, and IEND. No ancillary chunks are emitted, so the
//! output depends only on the pixels.

pub mod chunk;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::{self, Write};

use crate::error::IconError;
use crate::icon::render::PixelGrid;
pub use chunk::{Chunk, ChunkType};

/// Fixed 8-byte file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
/// Bits per channel
pub const BIT_DEPTH: u8 = 8;
/// Colour type 6: truecolour with alpha
pub const COLOR_TYPE_RGBA: u8 = 6;
/// Scanline filter type 0: none
pub const FILTER_NONE: u8 = 0;

/// Decoded IHDR payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression: u8,
    pub filter: u8,
    pub interlace: u8,
}

impl Header {
    /// Header for a square 8-bit RGBA image.
    pub fn rgba(size: u32) -> Self {
        Header {
            width: size,
            height: size,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGBA,
            compression: 0,
            filter: 0,
            interlace: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = self.bit_depth;
        out[9] = self.color_type;
        out[10] = self.compression;
        out[11] = self.filter;
        out[12] = self.interlace;
        out
    }

    pub fn parse(data: &[u8]) -> Result<Self, IconError> {
        if data.len() != 13 {
            return Err(IconError::InvalidPng(format!(
                "IHDR must be 13 bytes, found {}",
                data.len()
            )));
        }
        Ok(Header {
            width: u32::from_be_bytes([data[0], data[1], data[2], data[3]]),
            height: u32::from_be_bytes([data[4], data[5], data[6], data[7]]),
            bit_depth: data[8],
            color_type: data[9],
            compression: data[10],
            filter: data[11],
            interlace: data[12],
        })
    }

    pub fn color_type_name(&self) -> &'static str {
        match self.color_type {
            0 => "grayscale",
            2 => "truecolor",
            3 => "indexed",
            4 => "grayscale with alpha",
            6 => "truecolor with alpha",
            _ => "unknown",
        }
    }
}

/// Prefix every row with the "no filter" byte.
fn scanlines(grid: &PixelGrid) -> Vec<u8> {
    let mut raw = Vec::with_capacity((grid.row_len() + 1) * grid.size() as usize);
    for row in grid.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

fn compress(raw: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    encoder.finish()
}

/// Encode a pixel grid as a complete PNG file.
pub fn encode(grid: &PixelGrid) -> io::Result<Vec<u8>> {
    let compressed = compress(&scanlines(grid))?;

    let mut out = Vec::with_capacity(SIGNATURE.len() + compressed.len() + 3 * 12 + 13);
    out.extend_from_slice(&SIGNATURE);
    chunk::write_chunk(&mut out, ChunkType::IHDR, &Header::rgba(grid.size()).to_bytes());
    chunk::write_chunk(&mut out, ChunkType::IDAT, &compressed);
    chunk::write_chunk(&mut out, ChunkType::IEND, &[]);
    Ok(out)
}

/// Validate a PNG byte stream and return its header and chunks.
///
/// Checks the signature, every chunk CRC, that IHDR comes first and that the
/// stream ends with IEND. Pixel data is not decompressed.
pub fn read(bytes: &[u8]) -> Result<(Header, Vec<Chunk<'_>>), IconError> {
    let rest = bytes
        .strip_prefix(&SIGNATURE[..])
        .ok_or_else(|| IconError::InvalidPng("missing PNG signature".to_string()))?;

    let chunks = chunk::split_chunks(rest)?;
    let first = chunks
        .first()
        .filter(|c| c.kind == ChunkType::IHDR)
        .ok_or_else(|| IconError::InvalidPng("first chunk is not IHDR".to_string()))?;
    let header = Header::parse(first.data)?;

    if !chunks.iter().any(|c| c.kind == ChunkType::IDAT) {
        return Err(IconError::InvalidPng("no IDAT chunk".to_string()));
    }

    Ok((header, chunks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Palette, render};
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    #[test]
    fn starts_with_signature() {
        let png = encode(&render(16, &Palette::default())).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);
    }

    #[test]
    fn header_declares_square_rgba() {
        let png = encode(&render(192, &Palette::default())).unwrap();
        let (header, _) = read(&png).unwrap();

        assert_eq!(header.width, 192);
        assert_eq!(header.height, 192);
        assert_eq!(header.bit_depth, 8);
        assert_eq!(header.color_type, COLOR_TYPE_RGBA);
        assert_eq!(header.color_type_name(), "truecolor with alpha");
        assert_eq!((header.compression, header.filter, header.interlace), (0, 0, 0));
    }

    #[test]
    fn writes_exactly_three_chunks() {
        let png = encode(&render(32, &Palette::default())).unwrap();
        let (_, chunks) = read(&png).unwrap();

        let kinds: Vec<_> = chunks.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, [ChunkType::IHDR, ChunkType::IDAT, ChunkType::IEND]);
        assert!(chunks[2].data.is_empty());
    }

    #[test]
    fn idat_holds_unfiltered_scanlines() {
        let grid = render(24, &Palette::default());
        let png = encode(&grid).unwrap();
        let (_, chunks) = read(&png).unwrap();

        let mut raw = Vec::new();
        ZlibDecoder::new(chunks[1].data).read_to_end(&mut raw).unwrap();

        assert_eq!(raw.len(), 24 * (1 + 24 * 4));
        for (i, line) in raw.chunks_exact(1 + 24 * 4).enumerate() {
            assert_eq!(line[0], FILTER_NONE);
            assert_eq!(&line[1..], grid.rows().nth(i).unwrap());
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode(&render(64, &Palette::default())).unwrap();
        let b = encode(&render(64, &Palette::default())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_missing_signature() {
        let err = read(b"GIF89a....").unwrap_err();
        assert!(err.to_string().contains("signature"));
    }

    #[test]
    fn rejects_stream_without_ihdr_first() {
        let mut png = SIGNATURE.to_vec();
        chunk::write_chunk(&mut png, ChunkType::IDAT, b"x");
        chunk::write_chunk(&mut png, ChunkType::IEND, &[]);

        let err = read(&png).unwrap_err();
        assert!(err.to_string().contains("IHDR"));
    }

    #[test]
    fn header_roundtrips_through_bytes() {
        let header = Header::rgba(512);
        assert_eq!(Header::parse(&header.to_bytes()).unwrap(), header);
        assert!(Header::parse(&[0; 12]).is_err());
    }
}
