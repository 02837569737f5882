//! Grammar for `.pc` (pkg-config) documents.
//!
//! A document is a sequence of lines. Each line is tried against the
//! following forms, in this order:
//!
//! 1. an empty line,
//! 2. a **comment**: `#` up to the end of the line,
//! 3. a **variable definition**: `key = value`,
//! 4. a **dependency list**: `Requires.private`, `Requires.internal`,
//!    `Requires` or `Provides`, then `:`, then dependency entries,
//! 5. a **property**: `Key: value`.
//!
//! Spaces and tabs between tokens are insignificant; newlines end a line.
//! Dependency lists are tried before generic properties so `Requires:` is
//! never read as a property named `Requires`.
//!
//! Once a key and its separator (`=` or `:`) have matched, the line is
//! committed to that form. Anything that then fails to parse is reported
//! against that key instead of falling back to the remaining forms.

use log::trace;

use crate::dependency::{Dependency, parse_dependency_list, unexpected_in_list};
use crate::error::ParseError;
use crate::lexer::Cursor;

/// Keywords introducing a dependency list, longest first so that
/// `Requires.private` is not cut short at `Requires`.
pub const DEPENDENCY_LIST_KEYWORDS: &[&str] =
    &["Requires.private", "Requires.internal", "Requires", "Provides"];

/// One significant line of a `.pc` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `# ...`, with the comment text after `#`.
    Comment(String),
    /// `key = value`. The value is raw: `${...}` references are not yet expanded.
    Variable { key: String, value: String },
    /// `Key: value`, with the key as written.
    Property { key: String, value: String },
    /// `Requires: ...` and friends, with the keyword as written.
    DependencyList {
        key: String,
        dependencies: Vec<Dependency>,
    },
}

enum Line {
    Blank,
    Node(Node),
    NoMatch,
}

/// Parse a whole document into its line nodes, in source order.
///
/// Fails if a committed line cannot be completed, or if input remains that
/// does not start any line form.
pub fn parse_document(input: &str) -> Result<Vec<Node>, ParseError> {
    let mut cur = Cursor::new(input);
    let mut nodes = Vec::new();

    loop {
        match parse_line(&mut cur)? {
            Line::Blank => {}
            Line::Node(node) => {
                trace!("parsed {node:?}");
                nodes.push(node);
            }
            Line::NoMatch => break,
        }
    }

    cur.skip_whitespace();
    if !cur.is_eof() {
        let found = cur.peek().map(|c| format!("'{c}'")).unwrap_or_default();
        return Err(ParseError::at(
            input,
            cur.pos(),
            format!("unexpected {found}, expected a comment, variable, property or dependency list"),
        ));
    }

    Ok(nodes)
}

fn parse_line(cur: &mut Cursor<'_>) -> Result<Line, ParseError> {
    if cur.newline() {
        return Ok(Line::Blank);
    }
    if let Some(text) = parse_comment(cur) {
        return Ok(Line::Node(Node::Comment(text.to_string())));
    }
    if let Some(node) = parse_variable(cur)? {
        return Ok(Line::Node(node));
    }
    if let Some(node) = parse_dependency_list_assignment(cur)? {
        return Ok(Line::Node(node));
    }
    if let Some(node) = parse_property(cur)? {
        return Ok(Line::Node(node));
    }
    Ok(Line::NoMatch)
}

fn parse_comment<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if !cur.literal("#") {
        return None;
    }
    let text = cur.rest_of_line();
    cur.newline();
    Some(text)
}

/// `key "=" value?`
fn parse_variable(cur: &mut Cursor<'_>) -> Result<Option<Node>, ParseError> {
    let Some((key, separator)) = key_with_separator(cur, "=") else {
        return Ok(None);
    };
    let value = cur.rest_of_line();
    end_of_line(cur, &separator)?;
    Ok(Some(Node::Variable {
        key: key.to_string(),
        value: value.to_string(),
    }))
}

/// `key ":" value?`
fn parse_property(cur: &mut Cursor<'_>) -> Result<Option<Node>, ParseError> {
    let Some((key, separator)) = key_with_separator(cur, ":") else {
        return Ok(None);
    };
    let value = cur.rest_of_line();
    end_of_line(cur, &separator)?;
    Ok(Some(Node::Property {
        key: key.to_string(),
        value: value.to_string(),
    }))
}

/// `DEPKEYWORD ":" dependency-list`
fn parse_dependency_list_assignment(cur: &mut Cursor<'_>) -> Result<Option<Node>, ParseError> {
    let start = cur.pos();
    let Some(keyword) = DEPENDENCY_LIST_KEYWORDS.iter().find(|kw| cur.literal(kw)) else {
        return Ok(None);
    };
    if !cur.literal(":") {
        cur.reset(start);
        return Ok(None);
    }

    let dependencies = parse_dependency_list(cur);
    if !cur.at_line_end() {
        return Err(unexpected_in_list(cur).committed_by(format!("{keyword}:")));
    }
    cur.newline();

    Ok(Some(Node::DependencyList {
        key: (*keyword).to_string(),
        dependencies,
    }))
}

/// Match `key` followed by `separator`, restoring the cursor if either fails.
/// Returns the key and the committing `key<separator>` text.
fn key_with_separator<'a>(cur: &mut Cursor<'a>, separator: &str) -> Option<(&'a str, String)> {
    let start = cur.pos();
    if let Some(key) = cur.key() {
        if cur.literal(separator) {
            return Some((key, format!("{key}{separator}")));
        }
    }
    cur.reset(start);
    None
}

/// Require a line end after a committed line and consume its newline, if any.
fn end_of_line(cur: &mut Cursor<'_>, committed: &str) -> Result<(), ParseError> {
    if !cur.at_line_end() {
        let mut probe = *cur;
        probe.skip_whitespace();
        return Err(
            ParseError::at(probe.input(), probe.pos(), "expected end of line")
                .committed_by(committed),
        );
    }
    cur.newline();
    Ok(())
}
