// src/writer.rs

use crate::error::Result;
use crate::kicad::KiFootprint;
use crate::settings::Settings;
use crate::uid::UidSource;
use std::fs;
use std::path::{Path, PathBuf};

/// Manages the output library directory (`<lib>.pretty`).
pub struct FootprintLibrary {
    pub path: PathBuf,
}

impl FootprintLibrary {
    /// Opens the library directory, creating it if absent.
    pub fn create(path: &Path) -> Result<FootprintLibrary> {
        fs::create_dir_all(path)?;
        Ok(FootprintLibrary {
            path: path.to_path_buf(),
        })
    }

    /// Writes a footprint to its own .kicad_mod file and returns the path.
    pub fn add_footprint(
        &self,
        footprint: &KiFootprint,
        settings: &Settings,
        uids: &mut dyn UidSource,
    ) -> Result<PathBuf> {
        let fp_path = self.path.join(format!("{}.kicad_mod", footprint.name));
        fs::write(&fp_path, footprint.to_kicad_mod(settings, uids))?;
        Ok(fp_path)
    }
}
