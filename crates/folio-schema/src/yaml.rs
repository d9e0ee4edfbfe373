//! YAML metadata blocks to JSON values.
//!
//! Frontmatter is usually authored as YAML. The schema engine works on
//! `serde_json::Value`, so the YAML tree is converted first. Unquoted
//! dates such as `date: 2025-02-18` are plain strings in YAML 1.2 and
//! stay strings here, which is what the `date` format expects.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

/// Convert a `serde_yaml::Value` into the equivalent `serde_json::Value`.
///
/// Tags are dropped and their inner value kept, so `!!timestamp 2025-02-18`
/// reads as the plain date string. Mapping keys become field names: string
/// keys as-is, numeric and boolean keys in their YAML spelling. Non-finite
/// numbers (`.nan`, `.inf`) have no JSON form and are rejected.
pub fn yaml_to_json_value(yaml: &Yaml) -> Result<Value, String> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(json_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => {
            Value::Array(items.iter().map(yaml_to_json_value).collect::<Result<_, _>>()?)
        }
        Yaml::Mapping(map) => Value::Object(
            map.iter()
                .map(|(k, v)| -> Result<(String, Value), String> {
                    Ok((field_name(k)?, yaml_to_json_value(v)?))
                })
                .collect::<Result<Map<_, _>, String>>()?,
        ),
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

fn json_number(n: &serde_yaml::Number) -> Result<Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn field_name(key: &Yaml) -> Result<String, String> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Tagged(tagged) => field_name(&tagged.value),
        other => Err(format!("frontmatter field name must be a scalar, got {other:?}")),
    }
}

/// Parse an extracted YAML metadata block into a JSON value.
///
/// A block with no content (empty, or only comments) is an empty mapping,
/// so it fails validation on the missing required fields rather than on
/// its type.
pub fn yaml_str_to_json_value(text: &str) -> Result<Value, String> {
    let yaml: Yaml = serde_yaml::from_str(text).map_err(|e| format!("invalid YAML: {e}"))?;
    match yaml {
        Yaml::Null => Ok(Value::Object(Map::new())),
        other => yaml_to_json_value(&other),
    }
}
