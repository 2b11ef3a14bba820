// src/lib.rs

pub mod error;
pub mod kicad;
pub mod layout;
pub mod record;
pub mod settings;
pub mod sheet;
pub mod silk;
pub mod uid;
pub mod writer;

use crate::error::Result;
use crate::settings::Settings;
use crate::uid::UidSource;
use std::path::Path;

/// Reads the parameter sheet at `input` and writes one footprint file per
/// record into `output_dir`, which is created on demand. Returns the number
/// of footprints written.
///
/// Rows are independent; the first failing row aborts the batch, leaving
/// already-written files in place. A missing input file fails before the
/// output directory is touched.
pub fn generate_library(
    input: &Path,
    output_dir: &Path,
    settings: &Settings,
    uids: &mut dyn UidSource,
) -> Result<usize> {
    let records = sheet::read_sheet(input)?;
    let library = writer::FootprintLibrary::create(output_dir)?;

    for record in &records {
        let footprint = layout::build_footprint(record, settings);
        let path = library.add_footprint(&footprint, settings, uids)?;
        log::info!("{} -> {}", record.name, path.display());
    }

    Ok(records.len())
}
