use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing::{info, warn};

pub const ENV_FILE: &str = ".env";
pub const DEFAULT_SAVE_PATH: &str = "locations.json";

/// Keeps named coordinates for a Discord channel
#[derive(Clone, Parser)]
#[command(name = "bot", version, about)]
pub struct Config {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: String,

    /// File the locations are loaded from and saved to
    #[arg(long, env = "LOCATIONS_FILE", default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    /// Minutes between automatic saves
    #[arg(long, env = "AUTOSAVE_MINUTES", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub autosave_minutes: u64,
}

impl Config {
    pub fn autosave_period(&self) -> Duration {
        Duration::from_secs(self.autosave_minutes * 60)
    }
}

/// Loads `.env` into the process environment, then reads the command line.
pub fn get_config() -> Config {
    match dotenvy::from_filename(ENV_FILE) {
        Ok(path) => info!("Reading {}", path.display()),
        Err(e) => warn!("Could not load {ENV_FILE} file: {e}"),
    }
    Config::parse()
}
