use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

use crate::errors::SessionError;
use crate::parts::PartTag;

// @module: Editor command grammar

// @const: `set N text`, text kept verbatim after one separating space or tab
static SET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^set\s+(\S+)(?:[ \t](.*))?$").unwrap()
});

// @const: An `add` flag left inside the free text
static ADD_FLAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)--(?:parts|measures)(?:\s|$)").unwrap()
});

pub const HELP: &str = "\
login <author> <code>      로그인
logout                     로그아웃
date YYYY-MM-DD            찬양일
singer <text>              찬양대 / 특송자
parts on|off               자막 파트 구분
add [--parts a,b] [--measures N] [text]
up N | down N | del N      순서 조정 / 삭제
set N <text>               자막 수정
clear                      전체 초기화
list | preview             목록 / 미리보기
export[!] [path]           Word 파일로 내보내기 (! = 덮어쓰기)
quit";

/// One parsed editor command. Line numbers are already 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { author: String, code: String },
    Logout,
    Date(NaiveDate),
    Singer(String),
    PartMode(bool),
    Add { parts: Vec<PartTag>, measures: Option<u32>, text: String },
    Up(usize),
    Down(usize),
    Delete(usize),
    Set(usize, String),
    Clear,
    List,
    Preview,
    Export { path: Option<PathBuf>, force: bool },
    Help,
    Quit,
}

impl Command {
    /// Whether the command needs a logged-in session
    pub fn requires_login(&self) -> bool {
        !matches!(self, Command::Login { .. } | Command::Help | Command::Quit)
    }

    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, SessionError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match word {
            "login" => {
                let (author, code) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or_else(|| SessionError::InvalidCommand("login <author> <code>".to_string()))?;
                Command::Login {
                    author: author.trim().to_string(),
                    code: code.to_string(),
                }
            }
            "logout" => Command::Logout,
            "date" => {
                let date = NaiveDate::parse_from_str(rest, "%Y-%m-%d")
                    .map_err(|_| SessionError::InvalidCommand(format!("date {}", rest)))?;
                Command::Date(date)
            }
            "singer" => Command::Singer(rest.to_string()),
            "parts" => match rest {
                "on" => Command::PartMode(true),
                "off" => Command::PartMode(false),
                _ => return Err(SessionError::InvalidCommand("parts on|off".to_string())),
            },
            "add" => Self::parse_add(rest)?,
            "up" => Command::Up(parse_index(rest)?),
            "down" => Command::Down(parse_index(rest)?),
            "del" | "delete" => Command::Delete(parse_index(rest)?),
            "set" => Self::parse_set(line.trim_start())?,
            "clear" => Command::Clear,
            "list" => Command::List,
            "preview" => Command::Preview,
            "export" | "export!" => Command::Export {
                path: (!rest.is_empty()).then(|| PathBuf::from(rest)),
                force: word.ends_with('!'),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(SessionError::InvalidCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    // @parses: `--parts` and `--measures` in any order, then the free text
    fn parse_add(rest: &str) -> Result<Command, SessionError> {
        let mut parts: Option<Vec<PartTag>> = None;
        let mut measures: Option<u32> = None;
        let mut remaining = rest.trim_start();

        loop {
            let (flag, after) = split_token(remaining);
            if flag != "--parts" && flag != "--measures" {
                break;
            }
            let (value, after) = split_token(after);
            if value.is_empty() {
                return Err(SessionError::InvalidCommand(format!("{} needs a value", flag)));
            }

            if flag == "--parts" {
                if parts.is_some() {
                    return Err(SessionError::InvalidCommand("--parts given twice".to_string()));
                }
                parts = Some(
                    PartTag::parse_list(value)
                        .map_err(|e| SessionError::InvalidCommand(e.to_string()))?,
                );
            } else {
                if measures.is_some() {
                    return Err(SessionError::InvalidCommand("--measures given twice".to_string()));
                }
                measures = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| SessionError::InvalidCommand(format!("--measures {}", value)))?,
                );
            }
            remaining = after;
        }

        if ADD_FLAG_REGEX.is_match(remaining) {
            return Err(SessionError::InvalidCommand(format!(
                "flags must come before the text: {}",
                remaining
            )));
        }

        Ok(Command::Add {
            parts: parts.unwrap_or_default(),
            measures,
            text: remaining.to_string(),
        })
    }

    fn parse_set(line: &str) -> Result<Command, SessionError> {
        let caps = SET_REGEX
            .captures(line)
            .ok_or_else(|| SessionError::InvalidCommand(line.to_string()))?;
        let index = parse_index(&caps[1])?;
        let text = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
        Ok(Command::Set(index, text))
    }
}

// @splits: First whitespace separated token and the rest
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim_start()),
        None => (input, ""),
    }
}

// @converts: 1-based display number to list index
fn parse_index(input: &str) -> Result<usize, SessionError> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(SessionError::InvalidIndex(input.to_string())),
    }
}
