pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "feed-aggregator")]
#[command(about = "Aggregates posts, comments and authors from a content API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:10999/api/slow")]
    pub base_url: String,

    #[arg(long, default_value = "30")]
    pub connect_timeout_secs: u64,

    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Abandon the run if it has not finished within this many seconds.
    #[arg(long, default_value = "10")]
    pub run_timeout_secs: u64,

    /// Load settings from a TOML file instead of individual flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("connect_timeout_secs", self.connect_timeout_secs, 1, 300)?;
        validation::validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        validation::validate_positive_number("run_timeout_secs", self.run_timeout_secs as usize, 1)?;
        Ok(())
    }
}
