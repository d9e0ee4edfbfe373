//! # Frontmatter Parsing
//!
//! The single entry point from raw metadata to a typed record:
//!
//! 1. Check the raw object against the schema, collecting every violation.
//! 2. On failure, format each descriptor and return one aggregated
//!    [`ValidationError`].
//! 3. On success, substitute schema defaults and normalize.
//!
//! Parsing is synchronous and stateless. The process-wide parser holds
//! only the compiled schema, which is read-only after construction.

use std::sync::LazyLock;

use serde_json::Value;

use folio_core::{FolioError, Frontmatter, ValidationError};

use crate::engine::{validation_errors, ConformanceCheck, JsonSchemaCheck, SchemaBuildError};
use crate::format::format_descriptor;
use crate::normalize::normalize;
use crate::schema::{apply_defaults, frontmatter_schema};
use crate::yaml::yaml_str_to_json_value;

static DEFAULT_PARSER: LazyLock<FrontmatterParser> = LazyLock::new(|| {
    FrontmatterParser::with_default_schema().expect("built-in frontmatter schema must compile")
});

/// Validates and normalizes frontmatter against one schema.
#[derive(Debug)]
pub struct FrontmatterParser<C = JsonSchemaCheck> {
    check: C,
    schema: &'static Value,
}

impl FrontmatterParser<JsonSchemaCheck> {
    /// Parser for the built-in frontmatter schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError`] if the schema fails to compile.
    pub fn with_default_schema() -> Result<Self, SchemaBuildError> {
        let schema = frontmatter_schema();
        Ok(Self {
            check: JsonSchemaCheck::compile(schema)?,
            schema,
        })
    }
}

impl<C: ConformanceCheck> FrontmatterParser<C> {
    /// Parser using a custom conformance check for the built-in schema.
    ///
    /// Defaults are still taken from the built-in schema.
    pub fn new(check: C) -> Self {
        Self {
            check,
            schema: frontmatter_schema(),
        }
    }

    /// Validate `raw` and return the typed record.
    ///
    /// # Errors
    ///
    /// - [`FolioError::Validation`] listing every schema violation.
    /// - [`FolioError::Normalization`] if a conforming object still cannot
    ///   be normalized.
    pub fn parse(&self, raw: &Value) -> Result<Frontmatter, FolioError> {
        let outcome = self.check.check(raw);

        if !outcome.valid {
            let messages: Vec<String> = validation_errors(&outcome)
                .iter()
                .map(format_descriptor)
                .collect();
            tracing::debug!(violations = messages.len(), "frontmatter rejected");
            return Err(ValidationError::new(messages).into());
        }

        let mut validated = raw.clone();
        apply_defaults(self.schema, &mut validated);

        let frontmatter = normalize(&validated).inspect_err(|e| {
            tracing::error!(error = %e, "schema-conformant frontmatter failed to normalize");
        })?;
        Ok(frontmatter)
    }
}

/// Parse `raw` with the shared built-in parser.
pub fn parse_frontmatter(raw: &Value) -> Result<Frontmatter, FolioError> {
    DEFAULT_PARSER.parse(raw)
}

/// Parse an extracted YAML metadata block with the shared built-in parser.
///
/// # Errors
///
/// [`FolioError::Document`] when `text` is not YAML, otherwise as
/// [`parse_frontmatter`].
pub fn parse_frontmatter_yaml(text: &str) -> Result<Frontmatter, FolioError> {
    let raw = yaml_str_to_json_value(text).map_err(FolioError::Document)?;
    parse_frontmatter(&raw)
}
