//! `libpcparse` — parse pkg-config (`.pc`) files into structured metadata.
//!
//! A `.pc` file is line oriented: comments, `key = value` variable
//! definitions, `Key: value` properties and dependency lists such as
//! `Requires: glib-2.0 >= 2.50, zlib`. Parsing runs in two stages: the
//! [`parser`] turns text into an ordered list of line nodes, then
//! [`resolve`] folds those nodes into a [`Package`], expanding `${name}`
//! references against the variables defined so far.
//!
//! # Architecture
//!
//! - [`error`] — Error types and result aliases
//! - [`lexer`] — Cursor, whitespace policy and token classes
//! - [`parser`] — Line grammar producing [`parser::Node`]s
//! - [`dependency`] — Dependency entries and the dependency-list grammar
//! - [`version`] — Version comparison operators
//! - [`resolve`] — Variable substitution and the node fold
//! - [`package`] — The resolved [`Package`] record
//! - [`path`] — Finding `.pc` files by package name
//!
//! # Example
//!
//! ```rust
//! use libpcparse::{Dependency, VersionCompare};
//!
//! let pkg = libpcparse::parse(
//!     "prefix=/usr\n\
//!      Name: libpng\n\
//!      Version: 1.6.40\n\
//!      Libs: -L${prefix}/lib -lpng16\n\
//!      Requires.private: zlib >= 1.2\n",
//! )
//! .unwrap();
//!
//! assert_eq!(pkg.name, "libpng");
//! assert_eq!(pkg.libs, "-L/usr/lib -lpng16");
//! assert_eq!(
//!     pkg.requires_private,
//!     vec![Dependency::constrained("zlib", VersionCompare::GreaterThanOrEqual, "1.2")]
//! );
//! ```

pub mod dependency;
pub mod error;
pub mod lexer;
pub mod package;
pub mod parser;
pub mod path;
pub mod resolve;
pub mod version;

use std::path::Path;

pub use dependency::Dependency;
pub use error::{Error, ParseError, Result};
pub use package::Package;
pub use version::VersionCompare;

/// The version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The `PKG_CONFIG_PATH` environment variable name.
pub const ENV_PKG_CONFIG_PATH: &str = "PKG_CONFIG_PATH";

/// The `PKG_CONFIG_LIBDIR` environment variable name.
///
/// When set, this *replaces* the default search path instead of adding to it.
pub const ENV_PKG_CONFIG_LIBDIR: &str = "PKG_CONFIG_LIBDIR";

/// Parse `.pc` text into a [`Package`].
pub fn parse(data: &str) -> Result<Package> {
    Package::parse(data)
}

/// Parse raw `.pc` bytes into a [`Package`].
pub fn parse_bytes(data: &[u8]) -> Result<Package> {
    Package::parse_bytes(data)
}

/// Read the file at `path` and parse it into a [`Package`].
pub fn load(path: impl AsRef<Path>) -> Result<Package> {
    Package::load(path)
}
