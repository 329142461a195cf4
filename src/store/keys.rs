//! Canonical key derivation for persisted artifacts
//!
//! The key for a track or course artifact is its url slug plus the `.json`
//! extension, under a fixed per-kind directory. These paths are part of the
//! interchange format and must not change.

use crate::url::{self, ArtifactKind};
use crate::Result;

/// Directory holding track artifacts and the listing
pub const TRACKS_DIR: &str = "tracks";

/// Directory holding course artifacts
pub const COURSES_DIR: &str = "courses";

/// Key of the one-per-run track listing artifact
pub const TRACK_LIST_KEY: &str = "tracks/track_list.json";

/// Derives the store key for a track artifact from its canonical url
pub fn track_key(track_url: &str) -> Result<String> {
    let slug = url::slug(track_url, ArtifactKind::Track)?;
    Ok(format!("{}/{}.json", TRACKS_DIR, slug))
}

/// Derives the store key for a course artifact from its canonical url
pub fn course_key(course_url: &str) -> Result<String> {
    let slug = url::slug(course_url, ArtifactKind::Course)?;
    Ok(format!("{}/{}.json", COURSES_DIR, slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_key() {
        assert_eq!(
            track_key("https://www.datacamp.com/tracks/r-programmer").unwrap(),
            "tracks/r-programmer.json"
        );
    }

    #[test]
    fn test_course_key() {
        assert_eq!(
            course_key("https://www.datacamp.com/courses/intermediate-python").unwrap(),
            "courses/intermediate-python.json"
        );
    }

    #[test]
    fn test_key_rejects_mismatched_url() {
        assert!(track_key("https://www.datacamp.com/courses/intermediate-python").is_err());
        assert!(course_key("https://www.datacamp.com/tracks/r-programmer").is_err());
    }
}
