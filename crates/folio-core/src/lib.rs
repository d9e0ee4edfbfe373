//! # folio-core: Foundational Types for folio
//!
//! Defines the strongly-typed frontmatter record that content documents
//! carry, plus the error hierarchy every other folio crate reports
//! through. Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed fields, not raw strings.** Dates are `chrono::NaiveDate`,
//!    video links are `url::Url`, titles and author lists are validated
//!    newtypes (`Title`, `Authors`).
//!
//! 2. **Two error classes.** `ValidationError` is for authors (bad
//!    metadata, reported all at once); `NormalizeError` is for maintainers
//!    (schema and normalizer disagree).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `folio-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod fields;
pub mod frontmatter;

pub use error::{FolioError, NormalizeError, ValidationError, VALIDATION_BANNER};
pub use fields::{is_title_whitespace, Authors, Title, TITLE_WHITESPACE};
pub use frontmatter::{
    Frontmatter, DATE_FORMAT, DEFAULT_ALLOW_TITLE_TO_DIFFER_FROM_FILENAME,
    DEFAULT_SHOW_RELATED_PRS,
};
