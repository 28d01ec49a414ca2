use anyhow::{Context, Result};
use clap::Parser;
use partyplay::config::Config;
use partyplay::logger::{self, Logger};
use partyplay::ui;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "partyplay", version, about = "Terminal client for server-driven party games")]
struct Cli {
    /// WebSocket URL of the game server (overrides the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// File holding a GAME_STARTED event to start from, skipping the lobby
    #[arg(short, long)]
    bootstrap: Option<PathBuf>,

    /// Configuration file to use instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.server.url = server;
    }
    config.validate()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger::install(logger.clone(), config.logging.level_filter()?)?;

    let bootstrap = match &cli.bootstrap {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read bootstrap file: {}", path.display()))?,
        ),
        None => None,
    };

    log::info!("partyplay {} starting, server {}", env!("CARGO_PKG_VERSION"), config.server.url);
    ui::run_app(config, bootstrap, logger).await
}
