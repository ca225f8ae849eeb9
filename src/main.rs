use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use stockroom::core::config;
use stockroom::tui;

#[derive(Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Track household stock: how much is left and how old it is"
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    // Initialize file logger - writes to stockroom.log in current directory.
    // It starts wide open so config loading is recorded, then narrows to the
    // configured level.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    if let Ok(log_file) = File::create("stockroom.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let resolved = match config::load_config() {
        Ok(config) => config::resolve(&config),
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            config::resolve(&Default::default())
        }
    };
    log::set_max_level(resolved.log_filter());
    log::info!("Stockroom starting up: {:?}", resolved);

    match tui::run(&resolved) {
        Ok(()) => {
            log::info!("Stockroom shut down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal failure: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
