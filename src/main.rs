// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use footprint_gen::settings::Settings;
use footprint_gen::uid::RandomUids;

/// Generates one KiCad footprint file per row of a part parameter sheet.
///
/// The sheet lists two-terminal SMD parts (resistors, capacitors, diodes,
/// transistor-style packages) with their pad geometry; output goes into a
/// standard .pretty library directory.
#[derive(Parser, Debug)]
#[command(name = "footprint-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Library name: reads LIB.csv and writes into LIB.pretty/
    #[arg(value_name = "LIB")]
    library: String,

    /// TOML file overriding the default process settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let input = PathBuf::from(format!("{}.csv", args.library));
    let output_dir = PathBuf::from(format!("{}.pretty", args.library));

    match footprint_gen::generate_library(&input, &output_dir, &settings, &mut RandomUids) {
        Ok(count) => {
            log::info!("{} footprints written to {}", count, output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
