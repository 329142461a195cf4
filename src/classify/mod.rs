//! Deterministic classification of raw page signals
//!
//! Two pure lookup functions live here: one maps the SVG shape drawn next to a
//! sub-chapter to its teaching modality, the other maps a track-item href to the
//! kind of entity it links to. Classification is always recomputed from the raw
//! signal and never trusted from upstream data.

use serde::{Deserialize, Serialize};

/// SVG path signature of the "play" icon shown next to video lessons
const ICON_VIDEO: &str = "M5.562 4v10l6.875-5-6.875-5zm8.113 3.4a1.96 1.96 0 01.412 2.8 2.032 2.032 0 01-.412.4l-6.875 5c-.911.663-2.204.484-2.888-.4A1.96 1.96 0 013.5 14V4c0-1.105.923-2 2.062-2 .447 0 .881.14 1.238.4l6.875 5z";

/// SVG path signature of the "list" icon shown next to multiple-choice questions
const ICON_QUESTION: &str = "M6 6a1 1 0 110-2h10a1 1 0 010 2H6zm0 4a1 1 0 110-2h10a1 1 0 010 2H6zm0 4a1 1 0 010-2h10a1 1 0 010 2H6zM1 5a1 1 0 112 0 1 1 0 01-2 0zm0 4a1 1 0 112 0 1 1 0 01-2 0zm0 4a1 1 0 112 0 1 1 0 01-2 0z";

/// SVG path signature of the "code brackets" icon shown next to exercises
const ICON_EXERCISE: &str = "M17.655 9.756l-4.946 4.95a1 1 0 11-1.415-1.415l4.29-4.294-4.277-4.293a.998.998 0 01.003-1.413 1 1 0 011.414.003l4.985 5.002a.998.998 0 01-.054 1.46zm-17.31 0a.998.998 0 01-.054-1.46l4.985-5.002a1 1 0 011.414-.003.998.998 0 01.003 1.413L2.416 8.997l4.29 4.294a1.002 1.002 0 01-1.415 1.416L.345 9.757z";

/// Teaching modality of a sub-chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Explanation,
    Question,
    Exercise,
    Unknown,
}

/// Kind of entity a track item links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Course,
    Project,
    Milestone,
    Unknown,
}

impl ItemType {
    /// Returns true if items of this type carry full course detail fields
    /// (description, duration, instructor) on the track page.
    pub fn has_details(&self) -> bool {
        matches!(self, Self::Course | Self::Project)
    }
}

/// Classifies a sub-chapter icon by its exact SVG path signature.
///
/// Unmatched signatures are a valid, expected outcome and map to
/// [`ContentType::Unknown`]; this function never fails.
pub fn classify_icon(shape_signature: &str) -> ContentType {
    match shape_signature {
        ICON_VIDEO => ContentType::Explanation,
        ICON_QUESTION => ContentType::Question,
        ICON_EXERCISE => ContentType::Exercise,
        _ => ContentType::Unknown,
    }
}

/// Classifies a track-item href by substring match, first match wins.
///
/// Order matters: milestone paths ("signal") could also contain "courses", so
/// the milestone test runs first.
pub fn classify_item_url(url_path: &str) -> ItemType {
    if url_path.contains("signal") {
        ItemType::Milestone
    } else if url_path.contains("courses") {
        ItemType::Course
    } else if url_path.contains("projects") {
        ItemType::Project
    } else {
        ItemType::Unknown
    }
}
