//! Named material palettes for driver programs.
//!
//! A palette is a small TOML table mapping names to colors (0–255) and
//! optional PBR parameters, so a driver can write `palette.color("brick")`
//! instead of scattering literals. Palettes are caller-side convenience
//! only — they never change what the emitters produce.

use std::collections::HashMap;

use serde::Deserialize;

use crate::color::Rgb;
use crate::web::Finish;
use crate::Result;

fn default_roughness() -> f64 {
    1.0
}

/// One named palette entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteEntry {
    /// Color as `[r, g, b]` in 0–255.
    pub color: [f64; 3],
    /// Roughness in [0, 1]; defaults to fully diffuse.
    #[serde(default = "default_roughness")]
    pub roughness: f64,
    /// Metalness in [0, 1]; defaults to dielectric.
    #[serde(default)]
    pub metalness: f64,
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    materials: HashMap<String, PaletteEntry>,
}

/// A named material palette parsed from TOML.
///
/// ```rust
/// use scenesmith::Palette;
///
/// let palette = Palette::parse(
///     r#"
/// [materials.brick]
/// color = [170, 60, 40]
/// roughness = 0.8
/// "#,
/// )
/// .unwrap();
/// assert_eq!(palette.color("brick").unwrap().r, 170.0);
/// ```
#[derive(Debug)]
pub struct Palette {
    entries: HashMap<String, PaletteEntry>,
}

impl Palette {
    /// Parse a palette from a TOML string with a `[materials.*]` table.
    pub fn parse(text: &str) -> Result<Self> {
        let file: PaletteFile = toml::from_str(text)?;
        Ok(Self {
            entries: file.materials,
        })
    }

    /// Look up a full entry by name.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.get(name)
    }

    /// The color of a named entry.
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.get(name)
            .map(|e| Rgb::new(e.color[0], e.color[1], e.color[2]))
    }

    /// The PBR finish of a named entry.
    pub fn finish(&self, name: &str) -> Option<Finish> {
        self.get(name).map(|e| Finish::new(e.roughness, e.metalness))
    }

    /// Number of named entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
