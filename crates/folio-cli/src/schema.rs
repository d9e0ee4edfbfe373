//! # Schema Subcommand
//!
//! Prints the frontmatter JSON Schema so editors and other tooling can
//! validate metadata blocks with the same rules.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use folio_schema::frontmatter_schema;

/// Arguments for the `folio schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Print on a single line instead of pretty-printing.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the schema subcommand, writing the schema to `out`.
pub fn run_schema(args: &SchemaArgs, out: &mut dyn Write) -> Result<u8> {
    let rendered = if args.compact {
        serde_json::to_string(frontmatter_schema())?
    } else {
        serde_json::to_string_pretty(frontmatter_schema())?
    };
    writeln!(out, "{rendered}")?;
    Ok(0)
}
