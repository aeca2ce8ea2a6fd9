//! File-backed persona exporter.
//!
//! Writes each report atomically: the contents go to a temporary sibling
//! file, are fsynced, and then renamed over the target. A crash never
//! leaves a half-written report behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rpg_core::persona::PersonaExporter;
use rpg_core::{Result, RpgError};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Saves reports into a directory on disk.
#[derive(Debug, Clone)]
pub struct FilePersonaExporter {
    output_dir: PathBuf,
}

impl FilePersonaExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("txt.tmp");

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PersonaExporter for FilePersonaExporter {
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        if file_name.trim().is_empty() {
            return Err(RpgError::invalid_input("Report file name is empty"));
        }

        fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(file_name);
        Self::write_atomic(&path, contents).await?;

        tracing::info!("Persona report written to {:?}", path);
        Ok(path)
    }
}
