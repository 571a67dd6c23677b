use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::icon::Palette;

/// Directory the default icon set is written to
pub const DEFAULT_OUTPUT_DIR: &str = "icons";
/// Edge lengths of the default icon set, in generation order
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

/// One icon to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub size: u32,
    pub path: PathBuf,
}

impl IconSpec {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        IconSpec {
            size,
            path: path.into(),
        }
    }

    /// `icon-<size>.png` inside `dir`.
    pub fn in_dir(dir: &Path, size: u32) -> Self {
        IconSpec::new(size, dir.join(format!("icon-{}.png", size)))
    }
}

/// The ordered list of icons to generate and the colours to paint them with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub icons: Vec<IconSpec>,
    #[serde(default)]
    pub palette: Palette,
}

impl IconSet {
    /// Default sizes written to `dir`.
    pub fn with_output_dir(dir: &Path) -> Self {
        IconSet {
            icons: DEFAULT_SIZES
                .iter()
                .map(|&size| IconSpec::in_dir(dir, size))
                .collect(),
            palette: Palette::default(),
        }
    }

    pub fn load(path: &Path) -> Result<IconSet, IconError> {
        let content = fs::read_to_string(path).map_err(|e| IconError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let set: IconSet = serde_json::from_str(&content).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if set.icons.is_empty() {
            return Err(IconError::Config {
                path: path.to_path_buf(),
                reason: "no icons listed".to_string(),
            });
        }
        Ok(set)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::with_output_dir(Path::new(DEFAULT_OUTPUT_DIR))
    }
}
