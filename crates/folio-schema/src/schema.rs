//! # Frontmatter Schema
//!
//! The single authoritative JSON Schema (Draft 7) for document metadata,
//! and the explicit default-substitution step driven by its `default`
//! keywords.
//!
//! ## Shape
//!
//! | Field | Type | Constraint | Default |
//! |---|---|---|---|
//! | `title` | string | [`title_pattern`], required | |
//! | `intro` | string | | |
//! | `allowTitleToDifferFromFilename` | boolean | | `false` |
//! | `date` | string | format `date`, required | |
//! | `authors` | string[] | `minItems: 1`, required | |
//! | `featuredVideo` | string | format `uri` | |
//! | `projects` | string[] | | `[]` |
//! | `skills` | string[] | | `[]` |
//! | `includeLinks` | string[] | | `[]` |
//! | `showRelatedPRs` | boolean | | `true` |
//!
//! `additionalProperties: false` rejects any undeclared field.

use std::sync::LazyLock;

use serde_json::{json, Map, Value};

use folio_core::{
    DEFAULT_ALLOW_TITLE_TO_DIFFER_FROM_FILENAME, DEFAULT_SHOW_RELATED_PRS, TITLE_WHITESPACE,
};

pub const TITLE: &str = "title";
pub const INTRO: &str = "intro";
pub const ALLOW_TITLE_TO_DIFFER_FROM_FILENAME: &str = "allowTitleToDifferFromFilename";
pub const DATE: &str = "date";
pub const AUTHORS: &str = "authors";
pub const FEATURED_VIDEO: &str = "featuredVideo";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const INCLUDE_LINKS: &str = "includeLinks";
pub const SHOW_RELATED_PRS: &str = "showRelatedPRs";

/// Every declared field, in schema order.
pub const FIELDS: [&str; 10] = [
    TITLE,
    INTRO,
    ALLOW_TITLE_TO_DIFFER_FROM_FILENAME,
    DATE,
    AUTHORS,
    FEATURED_VIDEO,
    PROJECTS,
    SKILLS,
    INCLUDE_LINKS,
    SHOW_RELATED_PRS,
];

/// Fields that must be present.
pub const REQUIRED_FIELDS: [&str; 3] = [TITLE, DATE, AUTHORS];

// Literal characters rather than `\S`: regex engines disagree on which
// code points `\s` covers.
static TITLE_PATTERN: LazyLock<String> = LazyLock::new(|| {
    let mut pattern = String::from("[^");
    pattern.extend(TITLE_WHITESPACE);
    pattern.push(']');
    pattern
});

/// Pattern matching any character outside
/// [`TITLE_WHITESPACE`](folio_core::TITLE_WHITESPACE), the same predicate
/// [`Title::new`](folio_core::Title::new) applies.
pub fn title_pattern() -> &'static str {
    &TITLE_PATTERN
}

static FRONTMATTER_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "https://folio.dev/schemas/frontmatter.schema.json",
        "title": "Frontmatter",
        "type": "object",
        "properties": {
            TITLE: {
                "type": "string",
                "pattern": title_pattern()
            },
            INTRO: { "type": "string" },
            ALLOW_TITLE_TO_DIFFER_FROM_FILENAME: {
                "type": "boolean",
                "default": DEFAULT_ALLOW_TITLE_TO_DIFFER_FROM_FILENAME
            },
            DATE: { "type": "string", "format": "date" },
            AUTHORS: {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1
            },
            FEATURED_VIDEO: { "type": "string", "format": "uri" },
            PROJECTS: {
                "type": "array",
                "items": { "type": "string" },
                "default": []
            },
            SKILLS: {
                "type": "array",
                "items": { "type": "string" },
                "default": []
            },
            INCLUDE_LINKS: {
                "type": "array",
                "items": { "type": "string" },
                "default": []
            },
            SHOW_RELATED_PRS: {
                "type": "boolean",
                "default": DEFAULT_SHOW_RELATED_PRS
            }
        },
        "required": REQUIRED_FIELDS,
        "additionalProperties": false
    })
});

/// The frontmatter JSON Schema. Built once, shared read-only.
pub fn frontmatter_schema() -> &'static Value {
    &FRONTMATTER_SCHEMA
}

/// Insert schema defaults for every declared property missing from `instance`.
///
/// Only top-level properties of an object instance are filled. Present
/// values are never replaced, even when they are invalid; non-object
/// instances are left untouched.
pub fn apply_defaults(schema: &Value, instance: &mut Value) {
    let Some(target) = instance.as_object_mut() else {
        return;
    };
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    fill_defaults(properties, target);
}

fn fill_defaults(properties: &Map<String, Value>, target: &mut Map<String, Value>) {
    for (name, property) in properties {
        if target.contains_key(name) {
            continue;
        }
        if let Some(default) = property.get("default") {
            target.insert(name.clone(), default.clone());
        }
    }
}
