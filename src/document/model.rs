/*!
 * Styled-run document model.
 *
 * A document is a list of paragraphs, each a list of runs carrying their
 * own bold/italic/size/color. Writers only translate this model; every
 * formatting decision is made by the renderer.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex without `#`, as Word expects
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    /// Font size in points, `None` keeps the writer default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,
    /// Text color, `None` keeps the default color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl StyledRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, size_pt: u32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// One paragraph of runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<StyledRun>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: StyledRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn push(&mut self, run: StyledRun) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// A rendered subtitle sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleDocument {
    pub paragraphs: Vec<Paragraph>,
}

impl SubtitleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraphs joined by newlines, styling dropped
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
