//! # Violation Messages
//!
//! Turns one [`Descriptor`] into the line an author reads. Every message
//! starts with `"<instance path> <engine message>"` and gets a suffix
//! chosen by rule kind. Unrecognized kinds take the generic
//! `(Keyword: <kind>)` suffix, so no descriptor is ever dropped.

use crate::engine::{Descriptor, Rule};
use crate::schema::TITLE;

/// Render `descriptor` as a single human-readable message. Never fails.
pub fn format_descriptor(descriptor: &Descriptor) -> String {
    let mut message = format!("{} {}", descriptor.instance_path, descriptor.message);

    match &descriptor.rule {
        Rule::Required { missing_property } => {
            message.push_str(&format!(": Missing required field '{missing_property}'"));
        }
        Rule::Type { expected } => {
            message.push_str(&format!(": Expected type '{expected}'"));
        }
        Rule::AdditionalProperties {
            additional_property,
        } => {
            message.push_str(&format!(": Unexpected field '{additional_property}'"));
        }
        Rule::Format { format } => {
            message.push_str(&format!(": Invalid format '{format}'"));
        }
        Rule::MinItems { limit } => {
            message.push_str(&format!(": Array must have at least {limit} item(s)"));
        }
        // Only the title has a dedicated pattern message.
        Rule::Pattern { .. } if is_title(&descriptor.instance_path) => {
            message.push_str(": Title cannot be empty or contain only whitespace");
        }
        rule => {
            message.push_str(&format!(" (Keyword: {})", rule.keyword()));
        }
    }

    message
}

fn is_title(instance_path: &str) -> bool {
    instance_path.strip_prefix('/') == Some(TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(path: &str, rule: Rule) -> Descriptor {
        Descriptor {
            instance_path: path.to_string(),
            message: "has an error".to_string(),
            rule,
        }
    }

    #[test]
    fn required_names_missing_field() {
        let d = descriptor(
            "",
            Rule::Required {
                missing_property: "title".to_string(),
            },
        );
        assert_eq!(
            format_descriptor(&d),
            " has an error: Missing required field 'title'"
        );
    }

    #[test]
    fn type_names_expected_type() {
        let d = descriptor(
            "/authors",
            Rule::Type {
                expected: "array".to_string(),
            },
        );
        assert_eq!(
            format_descriptor(&d),
            "/authors has an error: Expected type 'array'"
        );
    }

    #[test]
    fn additional_property_names_field() {
        let d = descriptor(
            "",
            Rule::AdditionalProperties {
                additional_property: "unexpectedField".to_string(),
            },
        );
        assert!(format_descriptor(&d).ends_with(": Unexpected field 'unexpectedField'"));
    }

    #[test]
    fn format_names_format() {
        let d = descriptor(
            "/featuredVideo",
            Rule::Format {
                format: "uri".to_string(),
            },
        );
        assert!(format_descriptor(&d).ends_with(": Invalid format 'uri'"));
    }

    #[test]
    fn min_items_cites_limit() {
        let d = descriptor("/authors", Rule::MinItems { limit: 1 });
        assert!(format_descriptor(&d).ends_with(": Array must have at least 1 item(s)"));
    }

    #[test]
    fn title_pattern_has_dedicated_message() {
        let d = descriptor(
            "/title",
            Rule::Pattern {
                pattern: "\\S".to_string(),
            },
        );
        assert_eq!(
            format_descriptor(&d),
            "/title has an error: Title cannot be empty or contain only whitespace"
        );
    }

    #[test]
    fn other_pattern_falls_back_to_keyword() {
        let d = descriptor(
            "/intro",
            Rule::Pattern {
                pattern: "\\S".to_string(),
            },
        );
        assert_eq!(
            format_descriptor(&d),
            "/intro has an error (Keyword: pattern)"
        );
    }

    #[test]
    fn nested_title_path_is_not_the_title() {
        let d = descriptor(
            "/meta/title",
            Rule::Pattern {
                pattern: "\\S".to_string(),
            },
        );
        assert!(format_descriptor(&d).ends_with("(Keyword: pattern)"));
    }

    #[test]
    fn unknown_keyword_uses_fallback() {
        let d = descriptor(
            "/example",
            Rule::Other {
                keyword: "unknownKeyword".to_string(),
            },
        );
        let message = format_descriptor(&d);
        assert!(message.ends_with(" (Keyword: unknownKeyword)"), "{message}");
    }
}
