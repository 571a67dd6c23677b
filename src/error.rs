use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating or inspecting icons
#[derive(Debug)]
pub enum IconError {
    /// Requested edge length is outside the supported range
    InvalidSize { size: u32, max: u32 },
    /// Failed to create the destination's parent directory
    CreateDirFailed { path: PathBuf, source: io::Error },
    /// Failed to write the encoded image
    WriteFailed { path: PathBuf, source: io::Error },
    /// Failed to read a file
    ReadFailed { path: PathBuf, source: io::Error },
    /// Compression of the pixel data failed
    Encode(io::Error),
    /// Icon set file could not be loaded
    Config { path: PathBuf, reason: String },
    /// File is not a well-formed PNG
    InvalidPng(String),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InvalidSize { size, max } => {
                write!(f, "invalid icon size {}: must be between 1 and {}", size, max)
            }
            IconError::CreateDirFailed { path, source } => {
                write!(
                    f,
                    "failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            IconError::WriteFailed { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            IconError::ReadFailed { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            IconError::Encode(e) => write!(f, "failed to compress image data: {}", e),
            IconError::Config { path, reason } => {
                write!(f, "invalid icon set {}: {}", path.display(), reason)
            }
            IconError::InvalidPng(reason) => write!(f, "invalid PNG: {}", reason),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::CreateDirFailed { source, .. } => Some(source),
            IconError::WriteFailed { source, .. } => Some(source),
            IconError::ReadFailed { source, .. } => Some(source),
            IconError::Encode(e) => Some(e),
            _ => None,
        }
    }
}
