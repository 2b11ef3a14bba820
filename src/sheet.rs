// src/sheet.rs

use crate::error::{Error, Result};
use crate::record::{PartKind, PartRecord};
use csv::ReaderBuilder;
use std::fs::File;
use std::io;
use std::path::Path;

/// Cell value meaning "no courtyard override" / "no model".
pub const NOT_APPLICABLE: &str = "N/A";

/// Minimum cells for a usable row; anything shorter is skipped.
const MIN_CELLS: usize = 13;

/// Reads the parameter sheet at `path` into part records.
///
/// Row 0 is the header. Rows with fewer than 13 cells are skipped without
/// an error; a non-numeric cell where a number is expected aborts with the
/// offending row and column.
pub fn read_sheet(path: &Path) -> Result<Vec<PartRecord>> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    parse_sheet(File::open(path)?)
}

/// CSV → records, for any reader. Split out so tests can feed strings.
pub fn parse_sheet<R: io::Read>(input: R) -> Result<Vec<PartRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // Header is row 0 of the sheet.
        let row_number = i + 1;
        if row.len() < MIN_CELLS {
            log::debug!(
                "row {}: skipping, {} cells (need {})",
                row_number,
                row.len(),
                MIN_CELLS
            );
            continue;
        }
        records.push(parse_row(row_number, &row)?);
    }
    Ok(records)
}

fn parse_row(row_number: usize, row: &csv::StringRecord) -> Result<PartRecord> {
    let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

    let courtyard_x = cell(10);
    let courtyard_y = cell(11);
    // If either cell is the sentinel the other one is never parsed.
    let courtyard = if courtyard_x == NOT_APPLICABLE || courtyard_y == NOT_APPLICABLE {
        None
    } else {
        Some((
            parse_number(row_number, "courtyard_x", courtyard_x)?,
            parse_number(row_number, "courtyard_y", courtyard_y)?,
        ))
    };

    let alt_models = row
        .iter()
        .skip(MIN_CELLS)
        .map(str::trim)
        .filter(|cell| !cell.is_empty() && *cell != NOT_APPLICABLE)
        .map(String::from)
        .collect();

    Ok(PartRecord {
        name: cell(0).to_string(),
        description: cell(1).to_string(),
        version: cell(2).to_string(),
        kind: PartKind::from_tag(cell(3)),
        pad1_span: parse_number(row_number, "A", cell(4))?,
        pad2_span: parse_number(row_number, "B", cell(5))?,
        pad1_offset: parse_number(row_number, "C1", cell(6))?,
        pad2_offset: parse_number(row_number, "C2", cell(7))?,
        pad_width: parse_number(row_number, "D", cell(8))?,
        tested: cell(9).to_string(),
        courtyard,
        model_3d: match cell(12) {
            NOT_APPLICABLE | "" => None,
            path => Some(path.to_string()),
        },
        alt_models,
    })
}

fn parse_number(row: usize, column: &'static str, value: &str) -> Result<f32> {
    value.parse().map_err(|_| Error::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}
