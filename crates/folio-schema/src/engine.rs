//! # Conformance Check Boundary
//!
//! Schema conformance is a pluggable capability: something that takes a
//! metadata object and reports whether it conforms, plus one structured
//! [`Descriptor`] per violated rule. The orchestrator only sees this
//! contract, never the engine behind it.
//!
//! [`JsonSchemaCheck`] is the production implementation, backed by the
//! `jsonschema` crate with format assertions enabled. It collects every
//! violation in one pass rather than stopping at the first.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, Validator};
use serde_json::Value;
use thiserror::Error;

/// The violated rule of a [`Descriptor`] together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A required property is absent.
    Required {
        /// Name of the missing property.
        missing_property: String,
    },
    /// The value has the wrong JSON type.
    Type {
        /// Expected type name(s), comma-separated when several are allowed.
        expected: String,
    },
    /// A string does not match its declared format.
    Format {
        /// Format name (`date`, `uri`, ...).
        format: String,
    },
    /// An array has fewer items than allowed.
    MinItems {
        /// Minimum number of items.
        limit: u64,
    },
    /// A string does not match its declared pattern.
    Pattern {
        /// The regular expression source.
        pattern: String,
    },
    /// The object carries an undeclared property.
    AdditionalProperties {
        /// Name of the undeclared property.
        additional_property: String,
    },
    /// Any other keyword.
    Other {
        /// JSON Schema keyword name.
        keyword: String,
    },
}

impl Rule {
    /// JSON Schema keyword that produced this rule violation.
    pub fn keyword(&self) -> &str {
        match self {
            Rule::Required { .. } => "required",
            Rule::Type { .. } => "type",
            Rule::Format { .. } => "format",
            Rule::MinItems { .. } => "minItems",
            Rule::Pattern { .. } => "pattern",
            Rule::AdditionalProperties { .. } => "additionalProperties",
            Rule::Other { keyword } => keyword,
        }
    }
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// JSON Pointer to the failing value; empty for the document itself.
    pub instance_path: String,
    /// The engine's own description of the violation.
    pub message: String,
    /// Which rule failed, with its parameters.
    pub rule: Rule,
}

/// Result of checking one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the instance conforms.
    pub valid: bool,
    /// Violations in engine order. An engine may report failure without
    /// providing descriptors.
    pub errors: Option<Vec<Descriptor>>,
}

impl Outcome {
    /// A conforming result.
    pub fn conforming() -> Self {
        Self {
            valid: true,
            errors: None,
        }
    }

    /// A failing result carrying `errors`.
    pub fn violations(errors: Vec<Descriptor>) -> Self {
        Self {
            valid: false,
            errors: Some(errors),
        }
    }
}

/// The descriptors of `outcome`, or an empty list when none were supplied.
pub fn validation_errors(outcome: &Outcome) -> &[Descriptor] {
    outcome.errors.as_deref().unwrap_or_default()
}

/// A schema conformance checker.
///
/// Implementations are bound to one schema at construction and must be
/// safe to share across threads.
pub trait ConformanceCheck: Send + Sync {
    /// Check `instance` against the bound schema, reporting all violations.
    fn check(&self, instance: &Value) -> Outcome;
}

/// The schema could not be compiled into a checker.
#[derive(Error, Debug)]
#[error("schema build error: {reason}")]
pub struct SchemaBuildError {
    /// Engine message.
    pub reason: String,
}

/// [`ConformanceCheck`] backed by the `jsonschema` crate.
pub struct JsonSchemaCheck {
    schema: Value,
    validator: Validator,
}

impl fmt::Debug for JsonSchemaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaCheck")
            .field("schema_id", &self.schema.get("$id"))
            .finish_non_exhaustive()
    }
}

impl JsonSchemaCheck {
    /// Compile `schema` (Draft 7, formats asserted).
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError`] if the schema itself is invalid.
    pub fn compile(schema: &Value) -> Result<Self, SchemaBuildError> {
        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft7);
        opts.should_validate_formats(true);

        let validator = opts.build(schema).map_err(|e| SchemaBuildError {
            reason: e.to_string(),
        })?;
        Ok(Self {
            schema: schema.clone(),
            validator,
        })
    }

    /// Expected type name(s) declared at `schema_path` (the `type` keyword).
    fn expected_type(&self, schema_path: &str) -> String {
        match self.schema.pointer(schema_path) {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(","),
            _ => keyword_of(schema_path).to_string(),
        }
    }

    fn descriptors(&self, error: jsonschema::ValidationError<'_>) -> Vec<Descriptor> {
        let instance_path = error.instance_path.to_string();
        let schema_path = error.schema_path.to_string();
        let message = error.to_string();

        let rule = match &error.kind {
            ValidationErrorKind::Required { property } => Rule::Required {
                missing_property: property
                    .as_str()
                    .map(str::to_owned)
                    .unwrap_or_else(|| property.to_string()),
            },
            ValidationErrorKind::Type { .. } => Rule::Type {
                expected: self.expected_type(&schema_path),
            },
            ValidationErrorKind::Format { format } => Rule::Format {
                format: format.clone(),
            },
            ValidationErrorKind::MinItems { limit } => Rule::MinItems { limit: *limit },
            ValidationErrorKind::Pattern { pattern } => Rule::Pattern {
                pattern: pattern.clone(),
            },
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                return unexpected
                    .iter()
                    .map(|name| Descriptor {
                        instance_path: instance_path.clone(),
                        message: message.clone(),
                        rule: Rule::AdditionalProperties {
                            additional_property: name.clone(),
                        },
                    })
                    .collect();
            }
            _ => Rule::Other {
                keyword: keyword_of(&schema_path).to_string(),
            },
        };

        vec![Descriptor {
            instance_path,
            message,
            rule,
        }]
    }
}

impl ConformanceCheck for JsonSchemaCheck {
    fn check(&self, instance: &Value) -> Outcome {
        let errors: Vec<Descriptor> = self
            .validator
            .iter_errors(instance)
            .flat_map(|e| self.descriptors(e))
            .collect();

        if errors.is_empty() {
            Outcome::conforming()
        } else {
            Outcome::violations(errors)
        }
    }
}

/// Last segment of a schema path, which names the failing keyword.
fn keyword_of(schema_path: &str) -> &str {
    schema_path.rsplit('/').next().unwrap_or(schema_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{frontmatter_schema, title_pattern};
    use folio_core::TITLE_WHITESPACE;
    use serde_json::json;

    fn check(instance: Value) -> Vec<Descriptor> {
        let checker = JsonSchemaCheck::compile(frontmatter_schema()).unwrap();
        let outcome = checker.check(&instance);
        validation_errors(&outcome).to_vec()
    }

    fn minimal() -> Value {
        json!({
            "title": "Test Title",
            "date": "2025-02-18",
            "authors": ["jathurchan"]
        })
    }

    #[test]
    fn test_minimal_document_conforms() {
        let checker = JsonSchemaCheck::compile(frontmatter_schema()).unwrap();
        let outcome = checker.check(&minimal());
        assert!(outcome.valid);
        assert!(validation_errors(&outcome).is_empty());
    }

    #[test]
    fn test_reports_every_missing_required_field() {
        let errors = check(json!({}));
        let missing: Vec<&Rule> = errors.iter().map(|d| &d.rule).collect();
        for name in ["title", "date", "authors"] {
            assert!(
                missing.contains(&&Rule::Required {
                    missing_property: name.to_string()
                }),
                "no required violation for {name}: {errors:?}"
            );
        }
        assert!(errors.iter().all(|d| d.instance_path.is_empty()));
    }

    #[test]
    fn test_type_violation_names_expected_type() {
        let mut doc = minimal();
        doc["authors"] = json!("jathurchan");
        let errors = check(doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].instance_path, "/authors");
        assert_eq!(
            errors[0].rule,
            Rule::Type {
                expected: "array".to_string()
            }
        );
    }

    #[test]
    fn test_item_type_violation_points_at_item() {
        let mut doc = minimal();
        doc["skills"] = json!(["ok", 7]);
        let errors = check(doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].instance_path, "/skills/1");
        assert_eq!(
            errors[0].rule,
            Rule::Type {
                expected: "string".to_string()
            }
        );
    }

    #[test]
    fn test_each_unexpected_field_gets_a_descriptor() {
        let mut doc = minimal();
        doc["extraOne"] = json!(1);
        doc["extraTwo"] = json!(2);
        let errors = check(doc);
        let names: Vec<&str> = errors
            .iter()
            .filter_map(|d| match &d.rule {
                Rule::AdditionalProperties {
                    additional_property,
                } => Some(additional_property.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"extraOne"));
        assert!(names.contains(&"extraTwo"));
    }

    #[test]
    fn test_format_pattern_and_min_items() {
        let doc = json!({
            "title": "  ",
            "date": "invalid-date",
            "authors": [],
            "featuredVideo": "not-a-url"
        });
        let rules: Vec<Rule> = check(doc).into_iter().map(|d| d.rule).collect();
        assert!(rules.contains(&Rule::Pattern {
            pattern: title_pattern().to_string()
        }));
        assert!(rules.contains(&Rule::Format {
            format: "date".to_string()
        }));
        assert!(rules.contains(&Rule::Format {
            format: "uri".to_string()
        }));
        assert!(rules.contains(&Rule::MinItems { limit: 1 }));
    }

    #[test]
    fn test_title_pattern_rejects_every_title_whitespace_character() {
        for c in TITLE_WHITESPACE {
            let mut doc = minimal();
            doc["title"] = json!(format!("{c}{c}"));
            let errors = check(doc);
            assert_eq!(errors.len(), 1, "U+{:04X}: {errors:?}", c as u32);
            assert_eq!(errors[0].instance_path, "/title");
            assert_eq!(errors[0].rule.keyword(), "pattern");
        }
    }

    #[test]
    fn test_title_pattern_accepts_next_line_character() {
        let mut doc = minimal();
        doc["title"] = json!("\u{0085}");
        assert!(check(doc).is_empty());
    }

    #[test]
    fn test_check_is_deterministic() {
        let doc = json!({ "title": 1, "extra": true });
        assert_eq!(check(doc.clone()), check(doc));
    }

    #[test]
    fn test_unmapped_keyword_falls_back_to_schema_path() {
        let schema = json!({ "type": "object", "maxProperties": 1 });
        let checker = JsonSchemaCheck::compile(&schema).unwrap();
        let outcome = checker.check(&json!({ "a": 1, "b": 2 }));
        assert!(!outcome.valid);
        let errors = validation_errors(&outcome);
        assert_eq!(
            errors[0].rule,
            Rule::Other {
                keyword: "maxProperties".to_string()
            }
        );
    }

    #[test]
    fn test_absent_errors_read_as_empty() {
        let outcome = Outcome {
            valid: false,
            errors: None,
        };
        assert!(validation_errors(&outcome).is_empty());
    }

    #[test]
    fn test_invalid_schema_fails_to_compile() {
        let err = JsonSchemaCheck::compile(&json!({ "type": 12 })).unwrap_err();
        assert!(err.to_string().starts_with("schema build error:"));
    }
}
