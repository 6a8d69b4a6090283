use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parts::PartTag;

// @module: Ordered subtitle lines for one service

// @struct: Single subtitle line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleLine {
    // @field: Subtitle text
    #[serde(default)]
    pub text: String,

    // @field: Parts in selection order, first one picks the color
    #[serde(default)]
    pub parts: Vec<PartTag>,
}

impl SubtitleLine {
    pub fn new(text: impl Into<String>, parts: Vec<PartTag>) -> Self {
        SubtitleLine {
            text: text.into(),
            parts,
        }
    }

    /// Part used to color the text, if any
    pub fn lead_part(&self) -> Option<PartTag> {
        self.parts.first().copied()
    }
}

impl fmt::Display for SubtitleLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.parts.is_empty() {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{}    [{}]", self.text, PartTag::join_labels(&self.parts))
        }
    }
}

/// Ordered list of subtitle lines.
///
/// Identity is positional. Out-of-range indices are ignored by every
/// mutator rather than reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtitleList {
    lines: Vec<SubtitleLine>,
}

impl SubtitleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. The caller rejects blank text beforehand.
    pub fn append(&mut self, text: &str, parts: &[PartTag]) {
        self.lines.push(SubtitleLine::new(text.trim(), parts.to_vec()));
        debug!("Appended line {}", self.lines.len());
    }

    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.lines.len() {
            self.lines.swap(index - 1, index);
        }
    }

    pub fn move_down(&mut self, index: usize) {
        if index + 1 < self.lines.len() {
            self.lines.swap(index, index + 1);
        }
    }

    pub fn delete_at(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Overwrite the text of a line as given. Unlike `append`, no trimming.
    pub fn set_text_at(&mut self, index: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.text = text.to_string();
        }
    }

    pub fn get(&self, index: usize) -> Option<&SubtitleLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubtitleLine> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[SubtitleLine] {
        &self.lines
    }
}

impl From<Vec<SubtitleLine>> for SubtitleList {
    fn from(lines: Vec<SubtitleLine>) -> Self {
        SubtitleList { lines }
    }
}

impl<'a> IntoIterator for &'a SubtitleList {
    type Item = &'a SubtitleLine;
    type IntoIter = std::slice::Iter<'a, SubtitleLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
