use std::path::PathBuf;

use anyhow::{Context, Result};
use rpg_core::config::LoggingSettings;
use rpg_infrastructure::{ConfigService, logging};

/// Builds the config service for an explicit path, or the default location.
pub fn config_service(path: Option<PathBuf>) -> Result<ConfigService> {
    match path {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => ConfigService::new().context("Failed to resolve the default config path"),
    }
}

/// Installs the tracing subscriber for every subcommand.
///
/// A config that fails to load falls back to the default level; the command
/// itself reports the load error.
pub fn init_logging(config_service: &ConfigService) {
    let level = config_service
        .get_config()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| LoggingSettings::default().level);
    logging::init(&level);
}
