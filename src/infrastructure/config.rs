use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::directory::DEFAULT_API_URL;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "ecoleta.log";

/// Command line and environment settings of the landing screen.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ecoleta",
    version,
    about = "Pick a state and a city to look for waste collection points"
)]
pub struct Config {
    /// Base URL of the IBGE localities API
    #[arg(long, env = "ECOLETA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait for each directory request
    #[arg(long, env = "ECOLETA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long, env = "ECOLETA_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}
