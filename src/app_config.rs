use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration module
/// This module handles loading defaults and validating the settings of
/// the subtitle editor.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Shared access code checked at login
    #[serde(default = "default_access_code")]
    pub access_code: String,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Editor defaults for a new session
    #[serde(default)]
    pub session: SessionDefaults,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output format of the exported sheet
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    // @format: Word document
    #[default]
    Docx,
    // @format: Plain text
    Text,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Docx => write!(f, "docx"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "docx" | "word" => Ok(Self::Docx),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(anyhow!("Invalid export format: {}", s)),
        }
    }
}

/// Export configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    // @field: File name prefix, joined with the date as `<prefix>_YYYYMMDD`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    // @field: Output directory, empty means the documents directory
    #[serde(default)]
    pub output_dir: String,

    // @field: Output format
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
            output_dir: String::new(),
            format: ExportFormat::default(),
        }
    }
}

impl ExportConfig {
    /// Directory exports are written to
    pub fn resolve_output_dir(&self) -> PathBuf {
        if self.output_dir.trim().is_empty() {
            dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
        } else {
            PathBuf::from(&self.output_dir)
        }
    }
}

/// Initial form values of a new session
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SessionDefaults {
    // @field: Pre-filled choir or soloist label
    #[serde(default)]
    pub singer: String,

    // @field: Start with part-mode on
    #[serde(default)]
    pub part_mode: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_access_code() -> String {
    "0001".to_string()
}

fn default_filename_prefix() -> String {
    "찬양자막".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.access_code.is_empty() {
            return Err(anyhow!("Access code must not be empty"));
        }

        let prefix = &self.export.filename_prefix;
        if prefix.trim().is_empty() {
            return Err(anyhow!("Export filename prefix must not be empty"));
        }
        if prefix.contains(['/', '\\']) {
            return Err(anyhow!("Export filename prefix must not contain path separators: {}", prefix));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            access_code: default_access_code(),
            export: ExportConfig::default(),
            session: SessionDefaults::default(),
            log_level: LogLevel::default(),
        }
    }
}
