//! Replay script: one interaction per line.
//!
//! ```text
//! # comment
//! select n1
//! edge e12
//! search First
//! clear
//! undo
//! redo
//! goto 2
//! ```

use std::fmt;
use std::str::FromStr;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Toggle a node's selection.
    Select(String),
    /// Toggle an edge in the user-selected edge set.
    Edge(String),
    /// Search by node id or label; the rest of the line is the term.
    Search(String),
    Clear,
    Undo,
    Redo,
    /// Jump to a history node by index.
    Goto(usize),
}

/// Script parse error, with the 1-based line it came from (0 for a single command).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl ScriptError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            line: 0,
            message: message.into(),
        }
    }
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s, ""),
        };
        let required = |what: &str| {
            if rest.is_empty() {
                Err(ScriptError::new(format!("`{verb}` needs {what}")))
            } else {
                Ok(rest.to_string())
            }
        };
        let bare = |cmd: ScriptCommand| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(ScriptError::new(format!("`{verb}` takes no argument")))
            }
        };
        match verb.to_ascii_lowercase().as_str() {
            "select" => required("a node id").map(ScriptCommand::Select),
            "edge" => required("an edge id").map(ScriptCommand::Edge),
            "search" => required("a search term").map(ScriptCommand::Search),
            "clear" => bare(ScriptCommand::Clear),
            "undo" => bare(ScriptCommand::Undo),
            "redo" => bare(ScriptCommand::Redo),
            "goto" => {
                let raw = required("a history node index")?;
                raw.trim_start_matches('#')
                    .parse()
                    .map(ScriptCommand::Goto)
                    .map_err(|_| ScriptError::new(format!("invalid history node index `{raw}`")))
            }
            "" => Err(ScriptError::new("empty command")),
            other => Err(ScriptError::new(format!("unknown command `{other}`"))),
        }
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptCommand::Select(id) => write!(f, "select {id}"),
            ScriptCommand::Edge(id) => write!(f, "edge {id}"),
            ScriptCommand::Search(term) => write!(f, "search {term}"),
            ScriptCommand::Clear => f.write_str("clear"),
            ScriptCommand::Undo => f.write_str("undo"),
            ScriptCommand::Redo => f.write_str("redo"),
            ScriptCommand::Goto(index) => write!(f, "goto {index}"),
        }
    }
}

/// Parses a whole script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse()
                .map_err(|e: ScriptError| ScriptError { line: i + 1, ..e })
        })
        .collect()
}
