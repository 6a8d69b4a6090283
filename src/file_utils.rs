use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::errors::ExportError;
use crate::session::SubtitleSheet;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: `<prefix>_YYYYMMDD.<ext>`
    pub fn export_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
        format!("{}_{}.{}", prefix, date.format("%Y%m%d"), extension)
    }

    // @generates: Output path for an exported sheet
    pub fn generate_output_path<P: AsRef<Path>>(
        output_dir: P,
        prefix: &str,
        date: NaiveDate,
        extension: &str,
    ) -> PathBuf {
        output_dir
            .as_ref()
            .join(Self::export_filename(prefix, date, extension))
    }

    /// Write document bytes, refusing to replace an existing file unless forced
    pub async fn write_document<P: AsRef<Path>>(
        path: P,
        bytes: &[u8],
        force_overwrite: bool,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        if Self::file_exists(path) && !force_overwrite {
            return Err(ExportError::AlreadyExists(path.display().to_string()));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, bytes).await?;

        info!("Saved {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }

    /// Read a JSON sheet for the `render` command
    pub async fn load_sheet<P: AsRef<Path>>(path: P) -> Result<SubtitleSheet> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read sheet: {:?}", path))?;
        let sheet: SubtitleSheet = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse sheet: {:?}", path))?;
        debug!("Loaded sheet with {} entries from {:?}", sheet.entries.len(), path);
        Ok(sheet)
    }
}
