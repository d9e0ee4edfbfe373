//! # folio-cli: Command-Line Interface for folio
//!
//! Provides the `folio` binary.
//!
//! ## Subcommands
//!
//! - `folio validate <PATH>...`: validate extracted frontmatter documents
//!   (YAML or JSON), reporting every violation per file.
//! - `folio schema`: print the frontmatter JSON Schema.
//!
//! ```bash
//! folio validate content/posts/*.yaml
//! folio validate --format json post.json
//! folio schema --compact
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation lives in `folio-schema`.
//! - Handlers write to a caller-supplied writer so they can be tested.

pub mod document;
pub mod schema;
pub mod validate;
