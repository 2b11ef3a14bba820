use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Sheet read error: {0}")]
    SheetError(#[from] csv::Error),

    #[error("Settings file error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Row {row}: column '{column}' is not a number: \"{value}\"")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
