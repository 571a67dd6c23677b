use std::fs;
use std::io;
use std::path::Path;

use crate::error::IconError;
use crate::png::{self, Header};
use crate::utils::hash::hash_file;

/// Header, chunk layout and digest of a PNG file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectResult {
    pub header: Header,
    /// Chunk type tags in file order
    pub chunks: Vec<String>,
    pub file_size: usize,
    pub sha256: String,
}

pub fn run(file: &Path) -> Result<InspectResult, IconError> {
    let read_failed = |e: io::Error| IconError::ReadFailed {
        path: file.to_path_buf(),
        source: e,
    };

    let data = fs::read(file).map_err(read_failed)?;
    let (header, chunks) = png::read(&data)?;
    let sha256 = hash_file(file).map_err(read_failed)?;

    Ok(InspectResult {
        header,
        chunks: chunks.iter().map(|c| c.kind.as_str().to_string()).collect(),
        file_size: data.len(),
        sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::generate;
    use crate::icon::Palette;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn reports_generated_icon() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon-512.png");
        let icon = generate(512, &path, &Palette::default()).unwrap();

        let result = run(&path).unwrap();

        assert_eq!(result.header, Header::rgba(512));
        assert_eq!(result.chunks, vec!["IHDR", "IDAT", "IEND"]);
        assert_eq!(result.file_size, icon.bytes_written);
        assert_eq!(result.sha256, icon.sha256);
    }

    #[test]
    fn regenerated_icon_inspects_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon-192.png");

        generate(192, &path, &Palette::default()).unwrap();
        let first = run(&path).unwrap();
        generate(192, &path, &Palette::default()).unwrap();
        let second = run(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_png_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();

        let err = run(file.path()).unwrap_err();

        assert!(matches!(err, IconError::InvalidPng(_)));
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let err = run(Path::new("/nonexistent/icon.png")).unwrap_err();
        assert!(matches!(err, IconError::ReadFailed { .. }));
    }
}
