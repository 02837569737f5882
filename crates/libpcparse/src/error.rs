//! Error types for libpcparse.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Result type alias for libpcparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or parsing a `.pc` file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document did not match the `.pc` grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An I/O error occurred while reading a `.pc` file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The underlying parse error, if this is one.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(_) => None,
        }
    }
}

/// A grammar failure, located by byte offset into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error{} at line {line}, column {column}: {message}{}", Location(.path), Committed(.committed))]
pub struct ParseError {
    /// Byte offset of the failure.
    pub offset: usize,
    /// 1-based line number of `offset`.
    pub line: usize,
    /// 1-based column (in characters) of `offset`.
    pub column: usize,
    /// What the parser expected or found.
    pub message: String,
    /// The `key:` or `key=` that committed the failing line, if any.
    pub committed: Option<String>,
    /// The file being parsed, when known.
    pub path: Option<PathBuf>,
}

impl ParseError {
    /// Build an error at `offset` within `input`, computing line and column.
    pub fn at(input: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_column(input, offset);
        Self {
            offset,
            line,
            column,
            message: message.into(),
            committed: None,
            path: None,
        }
    }

    /// Record the key and separator that committed the failing branch.
    pub fn committed_by(mut self, committed: impl Into<String>) -> Self {
        self.committed = Some(committed.into());
        self
    }

    /// Attach the path of the file being parsed.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(input.len());
    let before = input.get(..offset).unwrap_or(input);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

struct Location<'a>(&'a Option<PathBuf>);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, " in '{}'", path.display()),
            None => Ok(()),
        }
    }
}

struct Committed<'a>(&'a Option<String>);

impl fmt::Display for Committed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, " (after '{key}')"),
            None => Ok(()),
        }
    }
}
