use std::time::Duration;

use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub timezone: String,
    /// Simulated processing delay of a transaction commit.
    pub latency_ms: u64,
    pub state_path: String,
    /// The terminal owns stdout, so logs only go to a file when one is set.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3003".to_string(),
            timezone: "Africa/Lagos".to_string(),
            latency_ms: 1200,
            state_path: "config/tui_state.json".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|err| AppError::InvalidConfig(format!("invalid timezone {}: {err}", self.timezone)))
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Parser)]
#[command(name = "skybank_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL of the mock store (e.g. http://127.0.0.1:3003).
    #[arg(long)]
    base_url: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override simulated commit latency, in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Override the preferences file path.
    #[arg(long)]
    state_path: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SKYBANK_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(latency_ms) = args.latency_ms {
        settings.latency_ms = latency_ms;
    }
    if let Some(state_path) = args.state_path {
        settings.state_path = state_path;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_store() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:3003");
        assert_eq!(config.latency(), Duration::from_millis(1200));
        assert_eq!(config.timezone().unwrap(), chrono_tz::Africa::Lagos);
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let config = AppConfig {
            timezone: "Mars/Olympus".to_string(),
            ..AppConfig::default()
        };
        assert!(config.timezone().is_err());
    }
}
