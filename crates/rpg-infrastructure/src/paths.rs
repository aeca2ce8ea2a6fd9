//! Path management for rpg configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/rpg/               # Config directory (platform default via `dirs`)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

use rpg_core::RpgError;

const APP_DIR: &str = "rpg";
const CONFIG_FILE: &str = "config.toml";

pub struct RpgPaths;

impl RpgPaths {
    /// Returns the rpg configuration directory (e.g. `~/.config/rpg/`).
    pub fn config_dir() -> Result<PathBuf, RpgError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| RpgError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, RpgError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
