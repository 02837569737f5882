//! Dependency specifications as they appear in `Requires`, `Requires.private`,
//! `Requires.internal` and `Provides`.
//!
//! A list is a sequence of entries separated by optional commas. Each entry is
//! either a bare identifier (`zlib`) or an identifier followed by an operator
//! and a version (`glib-2.0 >= 2.50`).

use std::fmt;

use serde::Serialize;

use crate::error::ParseError;
use crate::lexer::Cursor;
use crate::version::{OPERATORS, VersionCompare};

/// A single dependency entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    /// The package name being depended on.
    pub identifier: String,
    /// The comparator, if the entry was version-constrained.
    pub version_compare: Option<VersionCompare>,
    /// The required version; empty for a bare entry.
    pub version: String,
}

impl Dependency {
    /// A dependency on any version of `identifier`.
    pub fn bare(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version_compare: None,
            version: String::new(),
        }
    }

    /// A dependency on `identifier` constrained by `compare` against `version`.
    pub fn constrained(
        identifier: impl Into<String>,
        compare: VersionCompare,
        version: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            version_compare: Some(compare),
            version: version.into(),
        }
    }

    pub fn is_constrained(&self) -> bool {
        self.version_compare.is_some()
    }

    /// Parse a standalone dependency list such as `"glib-2.0 >= 2.50, zlib"`.
    ///
    /// The whole string must be consumed; leftover text is an error.
    pub fn parse_list(text: &str) -> Result<Vec<Self>, ParseError> {
        let mut cur = Cursor::new(text);
        let deps = parse_dependency_list(&mut cur);
        cur.skip_whitespace();
        if cur.is_eof() {
            Ok(deps)
        } else {
            Err(unexpected_in_list(&cur))
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(cmp) = self.version_compare {
            write!(f, " {cmp} {}", self.version)?;
        }
        Ok(())
    }
}

/// `dependency ","?` repeated until an entry fails to match.
pub(crate) fn parse_dependency_list(cur: &mut Cursor<'_>) -> Vec<Dependency> {
    let mut deps = Vec::new();
    while let Some(dep) = parse_dependency(cur) {
        deps.push(dep);
        cur.literal(",");
    }
    deps
}

/// `identifier operator version`, falling back to a bare `identifier`.
fn parse_dependency(cur: &mut Cursor<'_>) -> Option<Dependency> {
    let identifier = cur.identifier()?;

    let after_identifier = cur.pos();
    if let Some(compare) = parse_operator(cur) {
        if let Some(version) = cur.version() {
            return Some(Dependency::constrained(identifier, compare, version));
        }
    }
    cur.reset(after_identifier);
    Some(Dependency::bare(identifier))
}

fn parse_operator(cur: &mut Cursor<'_>) -> Option<VersionCompare> {
    OPERATORS
        .iter()
        .find(|(lit, _)| cur.literal(lit))
        .map(|(_, cmp)| *cmp)
}

/// Error for whatever stopped a dependency list short of its line end.
pub(crate) fn unexpected_in_list(cur: &Cursor<'_>) -> ParseError {
    let mut probe = *cur;
    probe.skip_whitespace();
    let found = probe.peek().map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
    ParseError::at(
        probe.input(),
        probe.pos(),
        format!("unexpected {found} in dependency list"),
    )
}
