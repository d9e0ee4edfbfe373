//! # Validated Field Newtypes
//!
//! `Title` and `Authors` carry the two content invariants the schema
//! enforces on the record: a title with at least one non-whitespace
//! character, and a non-empty, order-preserving author list. Both
//! serialize transparently as their inner value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Characters a title may not consist of exclusively.
///
/// The ECMAScript `\s` class. U+0085 (next line) is not in it. The
/// schema's title pattern is built from this table.
pub const TITLE_WHITESPACE: [char; 25] = [
    '\t', '\n', '\u{000B}', '\u{000C}', '\r', ' ', '\u{00A0}', '\u{1680}', '\u{2000}',
    '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}',
    '\u{2008}', '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
    '\u{3000}', '\u{FEFF}',
];

/// Whether `c` is one of [`TITLE_WHITESPACE`].
pub fn is_title_whitespace(c: char) -> bool {
    TITLE_WHITESPACE.contains(&c)
}

/// Document title. Never empty, never whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Accept `s` if it contains at least one character outside
    /// [`TITLE_WHITESPACE`].
    pub fn new(s: impl Into<String>) -> Result<Self, NormalizeError> {
        let s = s.into();
        if s.chars().all(is_title_whitespace) {
            return Err(NormalizeError::EmptyTitle);
        }
        Ok(Self(s))
    }

    /// Access the title text exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = NormalizeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Title> for String {
    fn from(t: Title) -> Self {
        t.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Title {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author identifiers, at least one, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Authors(Vec<String>);

impl Authors {
    /// Accept `authors` if it names at least one author.
    pub fn new(authors: Vec<String>) -> Result<Self, NormalizeError> {
        if authors.is_empty() {
            return Err(NormalizeError::NoAuthors);
        }
        Ok(Self(authors))
    }

    /// The first listed author.
    pub fn lead(&self) -> &str {
        // Non-empty by construction.
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// All authors in declaration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of authors; always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over author identifiers.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl TryFrom<Vec<String>> for Authors {
    type Error = NormalizeError;

    fn try_from(v: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Authors> for Vec<String> {
    fn from(a: Authors) -> Self {
        a.0
    }
}

impl<'a> IntoIterator for &'a Authors {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
