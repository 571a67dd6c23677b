use flate2::Crc;

use crate::error::IconError;

/// Four-letter chunk type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

/// A chunk borrowed from an encoded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub kind: ChunkType,
    pub data: &'a [u8],
}

/// CRC-32 over the chunk type followed by its payload.
pub fn chunk_crc(kind: &ChunkType, data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(&kind.0);
    crc.update(data);
    crc.sum()
}

/// Append a length-prefixed, CRC-terminated chunk to `out`.
pub fn write_chunk(out: &mut Vec<u8>, kind: ChunkType, data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(&kind.0);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(&kind, data).to_be_bytes());
}

/// Split the bytes following the signature into chunks, checking every CRC.
///
/// Stops after IEND; trailing bytes after it are ignored.
pub fn split_chunks(mut rest: &[u8]) -> Result<Vec<Chunk<'_>>, IconError> {
    let mut chunks = Vec::new();

    loop {
        if rest.len() < 12 {
            return Err(IconError::InvalidPng(format!(
                "truncated chunk after {} chunk(s)",
                chunks.len()
            )));
        }

        let len = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]) as usize;
        let kind = ChunkType([rest[4], rest[5], rest[6], rest[7]]);
        if rest.len() - 12 < len {
            return Err(IconError::InvalidPng(format!(
                "{} chunk declares {} bytes but only {} remain",
                kind.as_str(),
                len,
                rest.len() - 12
            )));
        }

        let data = &rest[8..8 + len];
        let stored = u32::from_be_bytes([
            rest[8 + len],
            rest[9 + len],
            rest[10 + len],
            rest[11 + len],
        ]);
        let actual = chunk_crc(&kind, data);
        if stored != actual {
            return Err(IconError::InvalidPng(format!(
                "{} chunk CRC mismatch: stored {:08x}, computed {:08x}",
                kind.as_str(),
                stored,
                actual
            )));
        }

        chunks.push(Chunk { kind, data });
        rest = &rest[12 + len..];

        if kind == ChunkType::IEND {
            return Ok(chunks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_iend_chunk_has_well_known_crc() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IEND, &[]);

        assert_eq!(
            out,
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xae, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn chunk_layout_is_length_type_data_crc() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IDAT, b"abc");

        assert_eq!(&out[0..4], &3u32.to_be_bytes());
        assert_eq!(&out[4..8], b"IDAT");
        assert_eq!(&out[8..11], b"abc");
        assert_eq!(out.len(), 15);
    }

    #[test]
    fn splits_written_chunks() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IDAT, b"payload");
        write_chunk(&mut out, ChunkType::IEND, &[]);

        let chunks = split_chunks(&out).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].kind, ChunkType::IDAT);
        assert_eq!(chunks[0].data, b"payload");
        assert_eq!(chunks[1].kind, ChunkType::IEND);
    }

    #[test]
    fn corrupted_payload_fails_crc() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IDAT, b"payload");
        write_chunk(&mut out, ChunkType::IEND, &[]);
        out[9] ^= 0xff;

        let err = split_chunks(&out).unwrap_err();
        assert!(err.to_string().contains("CRC mismatch"));
    }

    #[test]
    fn missing_iend_is_truncated() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IDAT, b"payload");

        assert!(split_chunks(&out).is_err());
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut out = Vec::new();
        write_chunk(&mut out, ChunkType::IEND, &[]);
        out[3] = 200;

        let err = split_chunks(&out).unwrap_err();
        assert!(err.to_string().contains("declares 200 bytes"));
    }
}
