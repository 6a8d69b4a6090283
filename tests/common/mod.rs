/*!
 * Common test utilities for the che2-subtitles test suite
 */

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use che2_subtitles::app_config::{Config, ExportFormat};
use che2_subtitles::parts::PartTag;
use che2_subtitles::subtitle_list::SubtitleList;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample JSON sheet
pub fn create_test_sheet(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"{
  "author": "홍길동",
  "date": "2025-03-09",
  "singer": "할렐루야 찬양대",
  "part_mode": true,
  "entries": [
    {"text": "전주 4마디", "parts": ["전주"]},
    {"text": "Hello", "parts": ["soprano", "alto"]},
    {"text": "다같이", "parts": []}
  ]
}"#;
    create_test_file(dir, filename, content)
}

/// Service date used across tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
}

/// Three-line list: "a", "b" (alto), "c"
pub fn sample_list() -> SubtitleList {
    let mut list = SubtitleList::new();
    list.append("a", &[]);
    list.append("b", &[PartTag::Alto]);
    list.append("c", &[]);
    list
}

/// Config exporting plain text into the given directory
pub fn text_config(output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.export.output_dir = output_dir.to_string_lossy().to_string();
    config.export.format = ExportFormat::Text;
    config
}
