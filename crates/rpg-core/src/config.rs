//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default, so a missing or partial file is always valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default simulated network latency.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 2000;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Settings for the activity source.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Artificial delay before the simulated source answers
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl FetchSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_FETCH_DELAY_MS,
        }
    }
}

/// Settings for report downloads.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory downloaded reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Logging settings; `RUST_LOG` takes priority when set.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY_MS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RootConfig = toml::from_str("[fetch]\ndelay_ms = 10\n").unwrap();
        assert_eq!(config.fetch.delay(), Duration::from_millis(10));
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.fetch.delay_ms, DEFAULT_FETCH_DELAY_MS);
    }
}
