// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, is_config_update};
use commands::{handle_config_update_command, run_command};
use gridiron_lookup::config::Config;
use gridiron_lookup::error::AppError;
use gridiron_lookup::reference::ReferenceStore;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = args.command.as_ref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
    tracing::debug!("Loading reference data from {data_dir}");

    let store = ReferenceStore::load_from_dir(&data_dir).await?;

    for line in run_command(&store, config.thresholds(), command) {
        println!("{line}");
    }

    Ok(())
}
