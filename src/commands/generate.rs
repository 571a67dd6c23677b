use std::fs;
use std::path::{Path, PathBuf};

use crate::config::IconSet;
use crate::error::IconError;
use crate::icon::{Palette, render};
use crate::png;
use crate::utils::hash::hash_bytes;

/// Largest edge length accepted
pub const MAX_ICON_SIZE: u32 = 8192;
/// Printed once every icon in a set has been written
pub const COMPLETION_LINE: &str = "Icons created!";

/// An icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub bytes_written: usize,
    pub sha256: String,
}

impl GeneratedIcon {
    /// `Created <path> (<size>x<size>)`
    pub fn status_line(&self) -> String {
        format!(
            "Created {} ({}x{})",
            self.path.display(),
            self.size,
            self.size
        )
    }
}

pub fn validate_size(size: u32) -> Result<(), IconError> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(IconError::InvalidSize {
            size,
            max: MAX_ICON_SIZE,
        });
    }
    Ok(())
}

/// Render and encode the icon for `size` without touching the filesystem.
pub fn encode_icon(size: u32, palette: &Palette) -> Result<Vec<u8>, IconError> {
    validate_size(size)?;
    let grid = render(size, palette);
    png::encode(&grid).map_err(IconError::Encode)
}

/// Write `data` to `destination`, creating missing parent directories.
/// An existing file is overwritten.
fn write_icon(data: &[u8], destination: &Path) -> Result<(), IconError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| IconError::CreateDirFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(destination, data).map_err(|e| IconError::WriteFailed {
        path: destination.to_path_buf(),
        source: e,
    })
}

/// Generate one `size`×`size` checkmark icon at `destination`.
pub fn generate(
    size: u32,
    destination: &Path,
    palette: &Palette,
) -> Result<GeneratedIcon, IconError> {
    let data = encode_icon(size, palette)?;
    write_icon(&data, destination)?;

    Ok(GeneratedIcon {
        path: destination.to_path_buf(),
        size,
        bytes_written: data.len(),
        sha256: hash_bytes(&data),
    })
}

/// Generate every icon in `set`, in order.
///
/// `on_created` is called after each successful write. The first failure
/// aborts the run; icons written before it are left in place.
pub fn run<F>(set: &IconSet, mut on_created: F) -> Result<Vec<GeneratedIcon>, IconError>
where
    F: FnMut(&GeneratedIcon),
{
    let mut generated = Vec::with_capacity(set.icons.len());
    for spec in &set.icons {
        let icon = generate(spec.size, &spec.path, &set.palette)?;
        on_created(&icon);
        generated.push(icon);
    }
    Ok(generated)
}
