//! Version comparison operators as written in dependency lists.
//!
//! Only the operator is recorded here; comparing two version strings is left
//! to whoever consumes the parsed [`Dependency`](crate::Dependency).

use std::fmt;

/// The comparator between a dependency's name and its required version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionCompare {
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `=`
    Equal,
    /// `>=`
    GreaterThanOrEqual,
    /// `>`
    GreaterThan,
}

/// Operator literals in match order. Two-character operators come before
/// their one-character prefixes so the longest literal wins.
pub const OPERATORS: &[(&str, VersionCompare)] = &[
    ("<=", VersionCompare::LessThanOrEqual),
    ("<", VersionCompare::LessThan),
    ("=", VersionCompare::Equal),
    (">=", VersionCompare::GreaterThanOrEqual),
    (">", VersionCompare::GreaterThan),
];

impl VersionCompare {
    /// Look up the comparator for an exact operator literal.
    pub fn from_operator(op: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(lit, _)| *lit == op)
            .map(|(_, cmp)| *cmp)
    }

    /// The operator literal, as it would appear in a `.pc` file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Equal => "=",
            Self::GreaterThanOrEqual => ">=",
            Self::GreaterThan => ">",
        }
    }
}

impl fmt::Display for VersionCompare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for VersionCompare {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
