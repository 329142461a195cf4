//! Document parser: rendered pages to typed catalog records
//!
//! Three entry points, one per document type: the track listing, a track page
//! and a course page. Each takes the rendered HTML and fails with
//! [`ExtractionError`] when a required structural element is missing; optional
//! fields fall back to documented defaults and never fail.
//!
//! Selectors are the site's generated css-module class names. They are kept as
//! string constants next to the code that uses them so a layout change shows
//! up as one obvious diff.

mod course;
mod track;

pub use course::parse_course;
pub use track::{parse_track, parse_track_listing};

use scraper::{ElementRef, Selector};
use thiserror::Error;

/// A required structural element is missing from an otherwise-rendered page,
/// or a numeric field failed to parse. Upstream layout changed or the page is
/// unexpectedly empty.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("missing attribute {attr} on {element}")]
    MissingAttr {
        element: &'static str,
        attr: &'static str,
    },

    #[error("invalid integer in {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("unparseable selector: {0}")]
    Selector(&'static str),
}

/// Compiles a selector pattern, mapping failure into the extraction error
/// taxonomy. Patterns here are fixed literals, so a failure means a typo.
pub(crate) fn selector(pattern: &'static str) -> Result<Selector, ExtractionError> {
    Selector::parse(pattern).map_err(|_| ExtractionError::Selector(pattern))
}

/// Collects and trims the text content of an element
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Finds the first match of `sel` under `scope` or fails with a
/// `MissingElement` naming the field.
pub(crate) fn require<'a>(
    scope: ElementRef<'a>,
    sel: &Selector,
    what: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    scope
        .select(sel)
        .next()
        .ok_or(ExtractionError::MissingElement(what))
}

/// Parses an integer field after stripping an optional literal suffix
/// ("courses", "xp").
pub(crate) fn parse_int(
    field: &'static str,
    raw: &str,
    suffix: &str,
) -> Result<u32, ExtractionError> {
    let trimmed = raw.trim().trim_end_matches(suffix).trim();
    trimmed
        .parse()
        .map_err(|_| ExtractionError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}
