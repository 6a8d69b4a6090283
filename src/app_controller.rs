use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app_config::{Config, ExportFormat};
use crate::document::{render_document, DocumentWriter, DocxWriter, PlainTextWriter};
use crate::errors::ExportError;
use crate::file_utils::FileManager;
use crate::session::{Command, Outcome, SessionManager, SubtitleSession};

// @module: Application controller wiring the editor, renderer and files

const PROMPT: &str = "> ";
const BANNER: &str = "che2 자막 업로더 (help: 명령 목록)\n";

/// Main application controller for the subtitle editor
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: The single editing session
    manager: SessionManager,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let mut manager = SessionManager::new(config.access_code.clone());
        let meta = &mut manager.session_mut().meta;
        meta.singer = config.session.singer.clone();
        meta.part_mode = config.session.part_mode;

        Ok(Self { config, manager })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut SessionManager {
        &mut self.manager
    }

    // @returns: Writer for the configured export format
    fn writer(&self) -> Box<dyn DocumentWriter> {
        match self.config.export.format {
            ExportFormat::Docx => Box::new(DocxWriter),
            ExportFormat::Text => Box::new(PlainTextWriter),
        }
    }

    /// Plain-text rendition of the current session
    pub fn preview(&self) -> String {
        render_document(&self.manager.session().render_input()).plain_text()
    }

    /// Where an export lands when no explicit path, or only a directory, is given
    pub fn resolve_export_path(&self, session: &SubtitleSession, path: Option<&Path>) -> PathBuf {
        let extension = self.writer().extension();
        let prefix = &self.config.export.filename_prefix;
        match path {
            Some(p) if p.is_dir() => {
                FileManager::generate_output_path(p, prefix, session.meta.date, extension)
            }
            Some(p) => p.to_path_buf(),
            None => FileManager::generate_output_path(
                self.config.export.resolve_output_dir(),
                prefix,
                session.meta.date,
                extension,
            ),
        }
    }

    /// Render and save a session, returning the written path
    pub async fn export_session(
        &self,
        session: &SubtitleSession,
        path: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<PathBuf, ExportError> {
        let document = render_document(&session.render_input());
        let bytes = self.writer().write(&document)?;
        let output = self.resolve_export_path(session, path);
        FileManager::write_document(&output, &bytes, force_overwrite).await?;
        Ok(output)
    }

    /// Render a JSON sheet straight to a file
    pub async fn render_sheet(
        &self,
        sheet_path: &Path,
        output: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        let session = FileManager::load_sheet(sheet_path).await?.into_session();
        info!("Rendering {} lines from {:?}", session.lines.len(), sheet_path);
        let written = self
            .export_session(&session, output, force_overwrite)
            .await
            .context("Failed to export sheet")?;
        Ok(written)
    }

    /// Run the line editor until `quit` or end of input
    pub async fn run_interactive<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut input = reader.lines();
        writer.write_all(BANNER.as_bytes()).await?;

        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = input.next_line().await? else {
                break;
            };

            let reply = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => match self.manager.execute(command) {
                    Ok(Outcome::Quit) => break,
                    Ok(outcome) => self.handle_outcome(outcome).await,
                    Err(e) => {
                        warn!("{}", e);
                        e.to_string()
                    }
                },
                Err(e) => {
                    warn!("{}", e);
                    e.to_string()
                }
            };

            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        writer.flush().await?;
        debug!("Editor closed");
        Ok(())
    }

    // @returns: Text shown for an outcome that needs the controller
    async fn handle_outcome(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Message(message) => message,
            Outcome::Preview => self.preview(),
            Outcome::Export { path, force } => {
                let session = self.manager.session();
                if session.lines.is_empty() {
                    return "아직 추가된 자막이 없습니다.".to_string();
                }
                match self.export_session(session, path.as_deref(), force).await {
                    Ok(written) => format!("저장되었습니다: {}", written.display()),
                    Err(e) => {
                        warn!("{}", e);
                        e.to_string()
                    }
                }
            }
            Outcome::Quit => String::new(),
        }
    }
}
