//! # folio-schema: Frontmatter Validation & Normalization
//!
//! Validates the metadata block of a content document against the
//! frontmatter schema and turns it into a typed
//! [`Frontmatter`](folio_core::Frontmatter).
//!
//! ## Pipeline
//!
//! raw object → [`ConformanceCheck`] (all violations, not just the first)
//! → on failure, [`format_descriptor`] per violation, joined into one
//! [`ValidationError`](folio_core::ValidationError)
//! → on success, [`apply_defaults`] then [`normalize`].
//!
//! - [`schema`]: the schema itself and default substitution.
//! - [`engine`]: the conformance-check boundary and its `jsonschema` backend.
//! - [`format`]: per-rule violation messages.
//! - [`normalize`](mod@normalize): validated object → typed record.
//! - [`parse`]: the orchestrator, [`parse_frontmatter`].
//! - [`yaml`]: YAML metadata blocks → JSON values.
//!
//! ## Crate Policy
//!
//! - Depends only on `folio-core` internally.
//! - Markdown parsing and file I/O happen elsewhere; this crate receives
//!   an already-extracted key/value object.
//! - Referenced project and skill IDs are checked to be strings only.

pub mod engine;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod schema;
pub mod yaml;

pub use engine::{
    validation_errors, ConformanceCheck, Descriptor, JsonSchemaCheck, Outcome, Rule,
    SchemaBuildError,
};
pub use format::format_descriptor;
pub use normalize::normalize;
pub use parse::{parse_frontmatter, parse_frontmatter_yaml, FrontmatterParser};
pub use schema::{apply_defaults, frontmatter_schema};
pub use yaml::{yaml_str_to_json_value, yaml_to_json_value};
