use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::model::Rgb;

// @module: Vocal/instrumental part tags

/// A part a subtitle line can be assigned to.
///
/// The variant order is the canonical legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartTag {
    Soprano,
    Alto,
    Tenor,
    Bass,
    Women,
    Men,
    Tutti,
    Choir,
    Prelude,
    Interlude,
}

impl PartTag {
    /// All tags in canonical order
    pub const ALL: [PartTag; 10] = [
        PartTag::Soprano,
        PartTag::Alto,
        PartTag::Tenor,
        PartTag::Bass,
        PartTag::Women,
        PartTag::Men,
        PartTag::Tutti,
        PartTag::Choir,
        PartTag::Prelude,
        PartTag::Interlude,
    ];

    // @returns: Label shown in the list and the exported document
    pub fn label(self) -> &'static str {
        match self {
            Self::Soprano => "소프라노",
            Self::Alto => "알토",
            Self::Tenor => "테너",
            Self::Bass => "베이스",
            Self::Women => "여성파트",
            Self::Men => "남성파트",
            Self::Tutti => "투티",
            Self::Choir => "합창",
            Self::Prelude => "전주",
            Self::Interlude => "간주",
        }
    }

    // @returns: ASCII alias accepted on the command line
    pub fn alias(self) -> &'static str {
        match self {
            Self::Soprano => "soprano",
            Self::Alto => "alto",
            Self::Tenor => "tenor",
            Self::Bass => "bass",
            Self::Women => "women",
            Self::Men => "men",
            Self::Tutti => "tutti",
            Self::Choir => "choir",
            Self::Prelude => "prelude",
            Self::Interlude => "interlude",
        }
    }

    // @returns: Fixed display color
    pub fn color(self) -> Rgb {
        match self {
            Self::Soprano => Rgb::new(220, 20, 60),
            Self::Alto => Rgb::new(30, 144, 255),
            Self::Tenor => Rgb::new(46, 139, 87),
            Self::Bass => Rgb::new(147, 112, 219),
            Self::Women => Rgb::new(255, 0, 255),
            Self::Men => Rgb::new(0, 128, 128),
            Self::Tutti => Rgb::new(0, 0, 0),
            Self::Choir => Rgb::new(0, 0, 0),
            Self::Prelude => Rgb::new(112, 128, 144),
            Self::Interlude => Rgb::new(255, 140, 0),
        }
    }

    /// Prelude and interlude carry no lyrics
    pub fn is_instrumental(self) -> bool {
        matches!(self, Self::Prelude | Self::Interlude)
    }

    /// Parse a comma separated list, keeping selection order and dropping repeats
    pub fn parse_list(input: &str) -> Result<Vec<PartTag>> {
        let mut parts = Vec::new();
        for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let part: PartTag = item.parse()?;
            if !parts.contains(&part) {
                parts.push(part);
            }
        }
        Ok(parts)
    }

    /// Comma joined labels, in the given order
    pub fn join_labels(parts: &[PartTag]) -> String {
        parts.iter().map(|p| p.label()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for PartTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PartTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        PartTag::ALL
            .into_iter()
            .find(|p| p.label() == needle || p.alias().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow!("Unknown part: {}", s))
    }
}

impl TryFrom<String> for PartTag {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PartTag> for String {
    fn from(part: PartTag) -> Self {
        part.label().to_string()
    }
}
