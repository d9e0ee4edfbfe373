//! # Normalized Frontmatter Record
//!
//! The strongly-typed result of a successful parse. Only ever built from
//! metadata that passed full schema validation, so no partially valid
//! record is observable.
//!
//! Serde names follow the metadata wire names (`allowTitleToDifferFromFilename`,
//! `featuredVideo`, `includeLinks`, `showRelatedPRs`), so a serialized record
//! validates against the schema it was produced from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::fields::{Authors, Title};

/// Default for [`Frontmatter::allow_title_to_differ_from_filename`].
pub const DEFAULT_ALLOW_TITLE_TO_DIFFER_FROM_FILENAME: bool = false;

/// Default for [`Frontmatter::show_related_prs`].
pub const DEFAULT_SHOW_RELATED_PRS: bool = true;

/// Wire format of [`Frontmatter::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Metadata attached to one content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    /// Display title.
    pub title: Title,

    /// Optional introduction paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    /// Whether the title may differ from the document's file name.
    pub allow_title_to_differ_from_filename: bool,

    /// Publication date.
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    /// Author identifiers, lead author first.
    pub authors: Authors,

    /// Optional video shown above the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_video: Option<Url>,

    /// Referenced project IDs. Not resolved here.
    pub projects: Vec<String>,

    /// Referenced skill IDs. Not resolved here.
    pub skills: Vec<String>,

    /// Extra links to render with the document.
    ///
    /// Entries are only checked to be strings; their link or path format
    /// is not enforced.
    pub include_links: Vec<String>,

    /// Whether related pull requests are listed under the document.
    #[serde(rename = "showRelatedPRs")]
    pub show_related_prs: bool,
}

impl Frontmatter {
    /// The date in its `YYYY-MM-DD` wire form.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// `NaiveDate` as `YYYY-MM-DD` rather than chrono's default serde form.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
