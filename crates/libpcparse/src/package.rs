//! The resolved contents of a `.pc` file.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::dependency::Dependency;
use crate::error::{Error, ParseError, Result};
use crate::{parser, resolve};

/// Package metadata read from a `.pc` file.
///
/// String fields hold their values with `${...}` references already
/// expanded; fields the file did not set are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    /// The `Name` field (display name).
    pub name: String,
    /// The `Description` field.
    pub description: String,
    /// The `Version` field.
    pub version: String,
    /// The `URL` field.
    pub url: String,
    /// The `Cflags` field.
    pub cflags: String,
    /// The `Cflags.private` field.
    pub cflags_private: String,
    /// The `Libs` field.
    pub libs: String,
    /// The `Libs.private` field.
    pub libs_private: String,

    /// Variables defined in the file, with their expanded values.
    pub vars: BTreeMap<String, String>,

    /// Parsed `Requires` dependencies.
    pub requires: Vec<Dependency>,
    /// Parsed `Requires.private` dependencies.
    pub requires_private: Vec<Dependency>,
    /// Parsed `Requires.internal` dependencies.
    pub requires_internal: Vec<Dependency>,
    /// Parsed `Provides` entries.
    pub provides: Vec<Dependency>,
}

impl Package {
    /// Parse `.pc` text into a package.
    pub fn parse(data: &str) -> Result<Self> {
        let nodes = parser::parse_document(data)?;
        debug!("parsed {} nodes", nodes.len());
        Ok(resolve::resolve(nodes))
    }

    /// Parse raw `.pc` bytes. The data must be valid UTF-8.
    pub fn parse_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| {
            let valid = e.valid_up_to();
            let prefix = String::from_utf8_lossy(&data[..valid]);
            ParseError::at(&prefix, valid, "invalid UTF-8")
        })?;
        Self::parse(text)
    }

    /// Read and parse the `.pc` file at `path`.
    ///
    /// I/O failures are returned unchanged as [`Error::Io`]; parse failures
    /// carry the path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading {}", path.display());
        let data = fs::read(path)?;
        Self::parse_bytes(&data).map_err(|err| match err {
            Error::Parse(parse) => Error::Parse(parse.with_path(path)),
            other => other,
        })
    }

    /// Look up an expanded variable.
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// `Cflags`, followed by `Cflags.private` when `include_private` is set.
    pub fn collect_cflags(&self, include_private: bool) -> String {
        join_flags(&self.cflags, include_private.then_some(self.cflags_private.as_str()))
    }

    /// `Libs`, followed by `Libs.private` when `include_private` is set.
    pub fn collect_libs(&self, include_private: bool) -> String {
        join_flags(&self.libs, include_private.then_some(self.libs_private.as_str()))
    }
}

fn join_flags(public: &str, private: Option<&str>) -> String {
    [Some(public), private]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.version.is_empty() {
            write!(f, " {}", self.version)?;
        }
        Ok(())
    }
}
