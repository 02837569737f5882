//! Locating `.pc` files by package name.
//!
//! A [`SearchPath`] is an ordered list of directories; the first directory
//! holding `{name}.pc` wins. Lists are usually built from `PKG_CONFIG_PATH`
//! style strings (colon-delimited on Unix, semicolon-delimited on Windows).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The separator used in environment variables like `PKG_CONFIG_PATH`.
#[cfg(unix)]
pub const PATH_SEPARATOR: char = ':';

#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';

/// Directories searched by default when `PKG_CONFIG_LIBDIR` is unset.
#[cfg(unix)]
pub const DEFAULT_PKGCONFIG_PATH: &[&str] = &[
    "/usr/local/lib/pkgconfig",
    "/usr/local/share/pkgconfig",
    "/usr/lib/pkgconfig",
    "/usr/share/pkgconfig",
];

#[cfg(windows)]
pub const DEFAULT_PKGCONFIG_PATH: &[&str] = &[];

/// An ordered list of directories to search for `.pc` files.
///
/// # Examples
///
/// ```
/// use libpcparse::path::SearchPath;
///
/// let sp = SearchPath::from_delimited("/a::/b:", ':');
/// assert_eq!(sp.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `s` on `separator`, skipping empty segments.
    pub fn from_delimited(s: &str, separator: char) -> Self {
        let mut sp = Self::new();
        for segment in s.split(separator) {
            sp.add(segment);
        }
        sp
    }

    /// Build a search path from an environment variable, if it is set.
    pub fn from_environ(var_name: &str) -> Option<Self> {
        std::env::var(var_name)
            .ok()
            .map(|v| Self::from_delimited(&v, PATH_SEPARATOR))
    }

    /// Append a directory. Empty paths are ignored.
    pub fn add(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if !dir.as_os_str().is_empty() {
            self.dirs.push(dir);
        }
    }

    /// Insert a directory at the front. Empty paths are ignored.
    pub fn prepend(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if !dir.as_os_str().is_empty() {
            self.dirs.insert(0, dir);
        }
    }

    /// Append every directory of `other`, keeping its order.
    pub fn extend(&mut self, other: SearchPath) {
        self.dirs.extend(other.dirs);
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// The first `{name}.pc` found, in search order.
    pub fn find_pc_file(&self, name: &str) -> Option<PathBuf> {
        let filename = format!("{name}.pc");
        self.dirs
            .iter()
            .map(|dir| dir.join(&filename))
            .find(|candidate| candidate.is_file())
    }

    /// Every `.pc` file in the search path as `(package_name, path)`.
    ///
    /// A name found in several directories is reported once, from the
    /// earliest directory. Entries within a directory are sorted by name.
    pub fn list_all_pc_files(&self) -> Vec<(String, PathBuf)> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for dir in &self.dirs {
            for path in pc_files_in(dir) {
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen.insert(stem.to_string()) {
                    result.push((stem.to_string(), path));
                }
            }
        }

        result
    }
}

fn pc_files_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "pc"))
        .collect();
    files.sort();
    files
}
