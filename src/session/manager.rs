/*!
 * Session manager: login and dispatch of editor commands.
 *
 * The manager owns the session context and never touches the filesystem.
 * Commands that need I/O (preview, export) come back as an `Outcome` for
 * the controller to carry out.
 */

use log::{debug, info, warn};
use std::path::PathBuf;

use crate::compose;
use crate::errors::SessionError;
use crate::parts::PartTag;
use crate::session::commands::{Command, HELP};
use crate::session::models::SubtitleSession;

/// What the host should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show a message
    Message(String),
    /// Show the rendered sheet as text
    Preview,
    /// Write the sheet to disk
    Export { path: Option<PathBuf>, force: bool },
    /// End the editor
    Quit,
}

/// Owner of one editing session
#[derive(Debug)]
pub struct SessionManager {
    session: SubtitleSession,
    access_code: String,
}

impl SessionManager {
    pub fn new(access_code: impl Into<String>) -> Self {
        Self {
            session: SubtitleSession::new(),
            access_code: access_code.into(),
        }
    }

    pub fn session(&self) -> &SubtitleSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SubtitleSession {
        &mut self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// Authenticate with a non-blank author and the shared access code
    pub fn login(&mut self, author: &str, code: &str) -> Result<(), SessionError> {
        let author = author.trim();
        if author.is_empty() || code != self.access_code {
            warn!("Login rejected");
            return Err(SessionError::AuthenticationFailed);
        }
        self.session.authenticated = true;
        self.session.author = author.to_string();
        info!("Logged in as {}", author);
        Ok(())
    }

    /// End the session; author and lines are discarded
    pub fn logout(&mut self) {
        self.session.reset();
        info!("Logged out");
    }

    /// Validate and append a new line, returning its 0-based index
    pub fn submit(
        &mut self,
        text: &str,
        parts: &[PartTag],
        measures: Option<u32>,
    ) -> Result<usize, SessionError> {
        let submission =
            compose::prepare_submission(self.session.meta.part_mode, text, parts, measures)?;
        self.session.lines.append(&submission.text, &submission.parts);
        Ok(self.session.lines.len() - 1)
    }

    /// Numbered list as shown in the editor
    pub fn list_view(&self) -> String {
        let lines = &self.session.lines;
        if lines.is_empty() {
            return "아직 추가된 자막이 없습니다.".to_string();
        }

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let parts = if !self.session.meta.part_mode {
                    "-".to_string()
                } else if line.parts.is_empty() {
                    "(미지정)".to_string()
                } else {
                    PartTag::join_labels(&line.parts)
                };
                format!("{:>3}  {:<12}  {}", i + 1, parts, line.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Apply one command to the session
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        if command.requires_login() && !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }
        debug!("Executing {:?}", command);

        let outcome = match command {
            Command::Login { author, code } => {
                self.login(&author, &code)?;
                Outcome::Message(format!("접속: {}", self.session.author))
            }
            Command::Logout => {
                self.logout();
                Outcome::Message("로그아웃 되었습니다.".to_string())
            }
            Command::Date(date) => {
                self.session.meta.date = date;
                Outcome::Message(format!("찬양일: {}", date.format("%Y-%m-%d")))
            }
            Command::Singer(singer) => {
                self.session.meta.singer = singer;
                Outcome::Message(format!("찬양대/특송자: {}", self.session.meta.singer))
            }
            Command::PartMode(enabled) => {
                self.session.meta.part_mode = enabled;
                let label = if enabled { "구분 있음" } else { "구분 없음" };
                Outcome::Message(label.to_string())
            }
            Command::Add { parts, measures, text } => {
                let index = self.submit(&text, &parts, measures)?;
                Outcome::Message(format!("추가되었습니다. ({})", index + 1))
            }
            Command::Up(index) => {
                self.session.lines.move_up(index);
                Outcome::Message(self.list_view())
            }
            Command::Down(index) => {
                self.session.lines.move_down(index);
                Outcome::Message(self.list_view())
            }
            Command::Delete(index) => {
                self.session.lines.delete_at(index);
                Outcome::Message(self.list_view())
            }
            Command::Set(index, text) => {
                self.session.lines.set_text_at(index, &text);
                Outcome::Message(self.list_view())
            }
            Command::Clear => {
                self.session.lines.clear();
                Outcome::Message(self.list_view())
            }
            Command::List => Outcome::Message(self.list_view()),
            Command::Preview => Outcome::Preview,
            Command::Export { path, force } => Outcome::Export { path, force },
            Command::Help => Outcome::Message(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }
}
