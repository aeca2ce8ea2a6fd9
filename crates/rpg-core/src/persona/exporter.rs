//! Persona exporter trait.
//!
//! Defines the interface for handing a rendered report to storage.

use std::path::PathBuf;

use crate::error::Result;

/// Writes a rendered persona report somewhere the user can pick it up.
///
/// This decouples the download action from the specific mechanism
/// (a file on disk, a browser download, an in-memory buffer in tests).
#[async_trait::async_trait]
pub trait PersonaExporter: Send + Sync {
    /// Stores `contents` under `file_name`.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Where the report ended up
    /// - `Err(RpgError)`: Error if the report could not be written
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf>;
}
