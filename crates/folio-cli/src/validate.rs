//! # Validate Subcommand
//!
//! Runs each metadata document through the frontmatter parser and
//! reports the outcome per file.
//!
//! Exit codes: 0 when every document is valid, 1 when any document
//! fails validation, 2 when any document cannot be loaded at all.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::json;

use folio_core::FolioError;
use folio_schema::parse_frontmatter;

use crate::document::load_document;

/// Report format for `folio validate`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `OK:`/`FAIL:` lines followed by the violation messages.
    #[default]
    Text,
    /// One JSON object per document (JSON Lines).
    Json,
}

/// Arguments for the `folio validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Metadata documents to validate (YAML or JSON).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the validate subcommand, writing the report to `out`.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    let mut failed = 0usize;
    let mut unreadable = 0usize;

    for path in &args.paths {
        // File names need not be UTF-8; JSON reports carry the lossy form.
        let shown = path.display().to_string();
        let raw = match load_document(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %shown, error = %e, "cannot load document");
                unreadable += 1;
                match args.format {
                    OutputFormat::Text => writeln!(out, "ERROR: {e:#}")?,
                    OutputFormat::Json => writeln!(
                        out,
                        "{}",
                        json!({ "path": shown, "ok": false, "error": format!("{e:#}") })
                    )?,
                }
                continue;
            }
        };

        let result = parse_frontmatter(&raw);
        if result.is_err() {
            failed += 1;
        }

        match (args.format, result) {
            (OutputFormat::Text, Ok(_)) => writeln!(out, "OK: {shown}")?,
            (OutputFormat::Text, Err(e)) => {
                writeln!(out, "FAIL: {shown}")?;
                for line in e.to_string().lines() {
                    writeln!(out, "  {line}")?;
                }
            }
            (OutputFormat::Json, Ok(fm)) => writeln!(
                out,
                "{}",
                json!({ "path": shown, "ok": true, "frontmatter": fm })
            )?,
            (OutputFormat::Json, Err(FolioError::Validation(e))) => writeln!(
                out,
                "{}",
                json!({ "path": shown, "ok": false, "errors": e.messages() })
            )?,
            (OutputFormat::Json, Err(e)) => writeln!(
                out,
                "{}",
                json!({ "path": shown, "ok": false, "error": e.to_string() })
            )?,
        }
    }

    tracing::info!(
        total = args.paths.len(),
        failed,
        unreadable,
        "validation finished"
    );

    Ok(if unreadable > 0 {
        2
    } else if failed > 0 {
        1
    } else {
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run(paths: Vec<PathBuf>, format: OutputFormat) -> (u8, String) {
        let args = ValidateArgs { paths, format };
        let mut out = Vec::new();
        let code = run_validate(&args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    const VALID: &str = "title: Hello\ndate: 2025-02-18\nauthors: [jathurchan]\n";

    #[test]
    fn valid_document_returns_0() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "ok.yaml", VALID);
        let (code, out) = run(vec![path.clone()], OutputFormat::Text);
        assert_eq!(code, 0);
        assert_eq!(out, format!("OK: {}\n", path.display()));
    }

    #[test]
    fn invalid_document_returns_1_and_lists_violations() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.yaml", "title: '   '\nextra: 1\n");
        let (code, out) = run(vec![path], OutputFormat::Text);
        assert_eq!(code, 1);
        assert!(out.starts_with("FAIL: "));
        assert!(out.contains("  Frontmatter validation failed:"));
        assert!(out.contains("Title cannot be empty or contain only whitespace"));
        assert!(out.contains("Unexpected field 'extra'"));
        assert!(out.contains("Missing required field 'date'"));
    }

    #[test]
    fn unreadable_document_returns_2() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "ok.yaml", VALID);
        let bad = write(dir.path(), "broken.json", "{");
        let (code, out) = run(vec![good, bad], OutputFormat::Text);
        assert_eq!(code, 2);
        assert!(out.contains("OK: "));
        assert!(out.contains("ERROR: "));
    }

    #[test]
    fn json_format_reports_record_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "ok.yaml", VALID);
        let bad = write(dir.path(), "bad.json", r#"{"title": "x", "date": "2025-02-18"}"#);
        let (code, out) = run(vec![good, bad], OutputFormat::Json);
        assert_eq!(code, 1);

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], json!(true));
        assert_eq!(lines[0]["frontmatter"]["showRelatedPRs"], json!(true));
        assert_eq!(lines[0]["frontmatter"]["projects"], json!([]));
        assert_eq!(lines[1]["ok"], json!(false));
        let errors = lines[1]["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .as_str()
            .unwrap()
            .ends_with("Missing required field 'authors'"));
    }

    #[cfg(unix)]
    #[test]
    fn json_format_survives_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"post\xff.json"));
        std::fs::write(&path, r#"{"title": "Hi", "date": "2025-02-18", "authors": ["me"]}"#)
            .unwrap();
        let missing = dir.path().join(OsStr::from_bytes(b"gone\xfe.json"));

        let (code, out) = run(vec![path.clone(), missing], OutputFormat::Json);
        assert_eq!(code, 2);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], json!(true));
        assert_eq!(lines[0]["path"], json!(path.display().to_string()));
        assert!(lines[0]["path"].as_str().unwrap().ends_with("post\u{FFFD}.json"));
        assert_eq!(lines[1]["ok"], json!(false));
    }
}
