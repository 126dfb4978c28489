//! Main application entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use prex_app::{App, Cli, Command};
use prex_core::EditorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    log::info!("Starting Prex");

    let mut config = match &cli.config_file {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::load_user()?,
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = Some(dir);
    }

    let storage = config.storage().context("Failed to open storage")?;
    log::debug!("Storage at {:?}", storage.base_path());

    let mut app = pollster::block_on(App::open(Arc::new(storage), &config));
    let output = app.execute(cli.command.unwrap_or(Command::Show))?;
    pollster::block_on(app.flush());

    println!("{}", output);
    Ok(())
}
