use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alpha channel written for every pixel. Icons are fully opaque.
pub const OPAQUE: u8 = 255;

/// An opaque 8-bit colour, written as `#rrggbb` in icon set files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    pub fn to_rgba(self) -> [u8; 4] {
        let [r, g, b] = self.0;
        [r, g, b, OPAQUE]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("colour '{}' must start with '#'", s))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("colour '{}' must be #rrggbb", s));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Colours used to paint an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Outer border
    pub background: Rgb,
    /// Inset panel behind the glyph
    pub panel: Rgb,
    /// The checkmark itself
    pub glyph: Rgb,
}

impl Palette {
    pub const BACKGROUND: Rgb = Rgb::new(13, 17, 23);
    pub const PANEL: Rgb = Rgb::new(22, 27, 34);
    pub const GLYPH: Rgb = Rgb::new(34, 197, 94);
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Self::BACKGROUND,
            panel: Self::PANEL,
            glyph: Self::GLYPH,
        }
    }
}
