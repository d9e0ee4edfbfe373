//! Loading metadata documents from disk.
//!
//! A document file holds one already-extracted frontmatter object, as
//! YAML (`.yaml`/`.yml`) or JSON (anything else).

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use folio_schema::yaml_str_to_json_value;

/// Read `path` and parse it into a JSON value according to its extension.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            yaml_str_to_json_value(&content).map_err(|e| anyhow!("{}: {e}", path.display()))
        }
        _ => serde_json::from_str(&content)
            .with_context(|| format!("{}: invalid JSON", path.display())),
    }
}
