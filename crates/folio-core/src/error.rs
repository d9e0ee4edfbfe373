//! # Error Types
//!
//! Two failure classes leave this workspace:
//!
//! - [`ValidationError`]: the supplied metadata does not conform to the
//!   frontmatter schema. Carries every violation found in one pass.
//! - [`NormalizeError`]: an input that already passed schema validation
//!   could not be turned into a [`Frontmatter`](crate::Frontmatter). This is
//!   a contract violation between the schema and the normalizer, never a
//!   user-input problem.
//!
//! [`FolioError`] wraps both so callers can tell them apart.

use std::fmt;

use thiserror::Error;

/// First line of every aggregated validation failure message.
pub const VALIDATION_BANNER: &str = "Frontmatter validation failed:";

/// Top-level error type for frontmatter parsing.
#[derive(Error, Debug)]
pub enum FolioError {
    /// The metadata object violates the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A schema-conformant object could not be normalized.
    #[error("normalization error: {0}")]
    Normalization(#[from] NormalizeError),

    /// The metadata text could not be read as a key/value document.
    #[error("document error: {0}")]
    Document(String),
}

/// Aggregated schema violations for a single parse call.
///
/// Rendered as the banner line followed by one formatted message per
/// violation, newline-separated, in validator order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Build from already-formatted violation messages.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The formatted violation messages, one per descriptor.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the validator reported failure without any descriptor.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{VALIDATION_BANNER}\n{}", self.messages.join("\n"))
    }
}

impl std::error::Error for ValidationError {}

/// Failure while converting validated input into the typed record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The validated object did not have the expected field layout.
    #[error("validated frontmatter has unexpected shape: {0}")]
    Shape(String),

    /// `date` passed the format check but is not a calendar date.
    #[error("cannot parse date {value:?}: {reason}")]
    Date {
        /// The offending input string.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// `featuredVideo` passed the format check but is not a parseable URL.
    #[error("cannot parse featured video URL {value:?}: {reason}")]
    Url {
        /// The offending input string.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// Title was empty or whitespace-only.
    #[error("title cannot be empty or contain only whitespace")]
    EmptyTitle,

    /// Author list was empty.
    #[error("at least one author is required")]
    NoAuthors,
}
