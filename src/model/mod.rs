//! Typed catalog records and their persisted JSON shape
//!
//! Every record is keyed by its canonical url, which doubles as the filesystem
//! key. The serde layout here must stay bit-compatible with the existing
//! artifact corpus: field order matches the original files, fixed `type` tags
//! are emitted for every entity, `prerequisite` and `roadmap` serialize as
//! `null` when absent (never `[]`), and detail fields on milestone track items
//! are omitted entirely rather than written as `null`.

use crate::classify::{ContentType, ItemType};
use serde::{Deserialize, Serialize};

/// Fixed `type` tag carried by every persisted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityTag {
    Track,
    Course,
    Chapter,
    #[serde(rename = "Sub-chapter")]
    SubChapter,
    Person,
}

/// One card from the track listing page
///
/// The listing as a whole is persisted as a JSON array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub category: String,
    pub duration: String,
    pub course_count: u32,
    pub url: String,
}

/// A full track document with its step-ordered content items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub category: String,
    #[serde(rename = "track")]
    pub items: Vec<TrackItem>,
    pub url: String,
}

/// One entry in a track's content list
///
/// Course and Project items carry the detail fields; Milestone and Unknown
/// items persist without the `description`, `duration` and `instructor` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackItem {
    pub step: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<TrackInstructor>,
    pub url: String,
}

/// Instructor attribution as shown on a track content card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInstructor {
    pub name: String,
    pub title: String,
}

/// A full course document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    /// Courses this course builds on; `None` when the page shows no
    /// prerequisite block. Referenced urls may not yet exist as persisted
    /// artifacts -- that gap is what the frontier manager resolves.
    pub prerequisite: Option<Vec<CatalogRef>>,
    /// Tracks this course appears in ("In the following tracks")
    pub roadmap: Option<Vec<CatalogRef>>,
    pub instructor: Vec<Person>,
    pub chapter: Vec<Chapter>,
    pub url: String,
}

/// A named link to another catalog entity (prerequisite course or owning track)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRef {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub url: String,
}

/// A course instructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: EntityTag::Person,
        }
    }
}

/// One chapter of a course, with its ordered sub-chapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub step: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub free: bool,
    pub subchapter: Vec<Subchapter>,
}

/// One lesson, question set or exercise inside a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subchapter {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: EntityTag,
    pub content_type: ContentType,
    /// Completion reward in xp
    pub reward: u32,
}
