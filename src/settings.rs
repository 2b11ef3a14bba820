// src/settings.rs

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fab-process constants consumed read-only by the layout engine and the
/// serializer. Loaded from a TOML file, or defaulted. Always passed by
/// reference, never held as global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Silkscreen stroke width, mm.
    pub line_width: f32,
    /// Property / label font size, mm.
    pub text_size: f32,
    /// Clearance between pad copper and silkscreen, mm.
    pub pad_to_silkscreen: f32,
    /// Solder mask expansion past the pad, mm.
    pub solder_mask_opening: f32,
    /// Solder paste margin as a ratio of pad size.
    pub solder_paste_ratio: f32,
    /// Thermal relief spoke angle, degrees.
    pub thermal_bridge_angle: f32,
    /// Courtyard expansion past the pad bounding box, mm.
    pub courtyard_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            line_width: 0.15,
            text_size: 1.0,
            pad_to_silkscreen: 0.2,
            solder_mask_opening: 0.05,
            solder_paste_ratio: 0.0,
            thermal_bridge_angle: 45.0,
            courtyard_margin: 0.25,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Distance from the pad bounding box to the silkscreen outline.
    pub fn silk_margin(&self) -> f32 {
        self.pad_to_silkscreen + 0.5 * self.line_width + self.solder_mask_opening
    }
}
