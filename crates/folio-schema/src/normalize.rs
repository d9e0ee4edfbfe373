//! # Normalization
//!
//! Converts a schema-conformant metadata object, with defaults already
//! substituted, into a [`Frontmatter`]. No validation happens here: every
//! failure path is a defensive check that only fires when the schema and
//! this module disagree, and is reported as [`NormalizeError`] rather
//! than as a user-facing validation failure.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use folio_core::{Authors, Frontmatter, NormalizeError, Title, DATE_FORMAT};

/// Field-for-field mirror of the validated object before coercion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawFrontmatter {
    title: String,
    #[serde(default)]
    intro: Option<String>,
    allow_title_to_differ_from_filename: bool,
    date: String,
    authors: Vec<String>,
    #[serde(default)]
    featured_video: Option<String>,
    projects: Vec<String>,
    skills: Vec<String>,
    include_links: Vec<String>,
    #[serde(rename = "showRelatedPRs")]
    show_related_prs: bool,
}

/// Build the typed record from `validated`.
///
/// `validated` must already conform to the frontmatter schema and carry
/// its defaults.
///
/// # Errors
///
/// Returns [`NormalizeError`] only when that precondition does not hold.
pub fn normalize(validated: &Value) -> Result<Frontmatter, NormalizeError> {
    let raw = RawFrontmatter::deserialize(validated)
        .map_err(|e| NormalizeError::Shape(e.to_string()))?;

    Ok(Frontmatter {
        title: Title::new(raw.title)?,
        intro: raw.intro,
        allow_title_to_differ_from_filename: raw.allow_title_to_differ_from_filename,
        date: parse_date(&raw.date)?,
        authors: Authors::new(raw.authors)?,
        featured_video: raw.featured_video.as_deref().map(parse_url).transpose()?,
        projects: raw.projects,
        skills: raw.skills,
        include_links: raw.include_links,
        show_related_prs: raw.show_related_prs,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, NormalizeError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| NormalizeError::Date {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_url(value: &str) -> Result<Url, NormalizeError> {
    Url::parse(value).map_err(|e| NormalizeError::Url {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
