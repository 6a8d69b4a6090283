/*!
 * Session state for one editing session.
 *
 * Nothing here outlives the process; a `SubtitleSheet` is only the JSON
 * shape used to hand a finished list to the `render` command.
 */

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::document::RenderInput;
use crate::subtitle_list::{SubtitleLine, SubtitleList};

/// Form fields shared by every line of the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Service date
    pub date: NaiveDate,
    /// Choir or soloist label
    #[serde(default)]
    pub singer: String,
    /// Whether parts are assigned and shown
    #[serde(default)]
    pub part_mode: bool,
}

impl Default for SessionMeta {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            singer: String::new(),
            part_mode: false,
        }
    }
}

/// Everything one editor owns while the program runs
#[derive(Debug, Clone, Default)]
pub struct SubtitleSession {
    /// Set by a successful login
    pub authenticated: bool,
    /// Trimmed author name from login
    pub author: String,
    pub meta: SessionMeta,
    pub lines: SubtitleList,
}

impl SubtitleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for the renderer
    pub fn render_input(&self) -> RenderInput<'_> {
        RenderInput {
            author: &self.author,
            date: self.meta.date,
            singer: &self.meta.singer,
            part_mode: self.meta.part_mode,
            lines: self.lines.as_slice(),
        }
    }

    /// Drop author, login and lines; keep nothing
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// JSON input of the `render` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleSheet {
    #[serde(default)]
    pub author: String,
    #[serde(flatten)]
    pub meta: SessionMeta,
    #[serde(default)]
    pub entries: Vec<SubtitleLine>,
}

impl SubtitleSheet {
    /// Session holding the sheet's lines, already authenticated as its author
    pub fn into_session(self) -> SubtitleSession {
        SubtitleSession {
            authenticated: true,
            author: self.author.trim().to_string(),
            meta: self.meta,
            lines: SubtitleList::from(self.entries),
        }
    }

    pub fn from_session(session: &SubtitleSession) -> Self {
        Self {
            author: session.author.clone(),
            meta: session.meta.clone(),
            entries: session.lines.as_slice().to_vec(),
        }
    }
}
