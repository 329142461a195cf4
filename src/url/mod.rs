//! Canonical-url validation and slug derivation
//!
//! Every artifact is addressed by its canonical url. The path segment after
//! the artifact kind's fixed prefix is the slug, which doubles as the
//! filesystem key. Urls that do not match the expected prefix are rejected
//! before any network activity.

use crate::CoursemapError;
use std::fmt;
use url::Url;

/// Site root every relative href resolves against
pub const BASE_URL: &str = "https://www.datacamp.com";

/// Kind of artifact a canonical url addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Track,
    Course,
}

impl ArtifactKind {
    /// Fixed path prefix urls of this kind must carry
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::Track => "/tracks/",
            Self::Course => "/courses/",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::Course => write!(f, "course"),
        }
    }
}

/// Validates that a url is a canonical address for the given artifact kind.
///
/// Accepts http or https, with or without the `www.` host prefix. The path
/// must start with the kind's prefix and carry a nonempty slug. This guard
/// runs before every fetch; a mismatch costs no network activity.
pub fn validate(url: &str, kind: ArtifactKind) -> Result<(), CoursemapError> {
    parse_canonical(url, kind).map(|_| ())
}

/// Derives the canonical filesystem slug from a url: the path after the
/// kind's prefix, without any trailing slash.
pub fn slug(url: &str, kind: ArtifactKind) -> Result<String, CoursemapError> {
    let parsed = parse_canonical(url, kind)?;
    let rest = &parsed.path()[kind.path_prefix().len()..];
    Ok(rest.trim_end_matches('/').to_string())
}

/// Resolves an href extracted from a page into an absolute url. Page markup
/// uses site-relative hrefs; absolute ones pass through unchanged.
pub fn absolutize(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", BASE_URL, href)
    }
}

fn parse_canonical(url: &str, kind: ArtifactKind) -> Result<Url, CoursemapError> {
    let invalid = || CoursemapError::InvalidUrl {
        kind,
        url: url.to_string(),
        prefix: kind.path_prefix(),
    };

    let parsed = Url::parse(url).map_err(|_| invalid())?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }

    match parsed.host_str() {
        Some("www.datacamp.com") | Some("datacamp.com") => {}
        _ => return Err(invalid()),
    }

    let prefix = kind.path_prefix();
    let path = parsed.path();
    if !path.starts_with(prefix) || path.trim_end_matches('/').len() <= prefix.len() {
        return Err(invalid());
    }

    Ok(parsed)
}
