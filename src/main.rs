#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod app;
mod cli;

use cli::commands::Cli;
use pod042::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();

    // Initialize logging
    let level = config.observability.level();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level.unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    if level.is_none() {
        tracing::warn!(
            "Unknown log level '{}', falling back to info",
            config.observability.log_level
        );
    }

    app::dispatch::dispatch(cli, config)
}
