//! Crawl frontier computation from persisted artifacts
//!
//! The frontier manager never remembers anything between calls: it re-reads
//! the persisted Track and Course artifacts from scratch each time, so a later
//! phase always observes every earlier phase's writes. Two sources exist:
//! course urls listed on tracks, and prerequisite urls referenced by courses
//! that are not themselves persisted yet. The second is a single-pass closure;
//! the orchestrator repeats it until it yields nothing new.

use crate::classify::ItemType;
use crate::model::{Course, Track};
use crate::store::{ArtifactStore, COURSES_DIR, TRACKS_DIR, TRACK_LIST_KEY};
use crate::{CoursemapError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which artifact set a course frontier is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierSource {
    /// Course urls listed by persisted tracks
    Track,
    /// Prerequisite urls referenced by persisted courses
    Course,
}

impl FromStr for FrontierSource {
    type Err = CoursemapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "track" => Ok(Self::Track),
            "course" => Ok(Self::Course),
            other => Err(CoursemapError::InvalidFrontierSource(other.to_string())),
        }
    }
}

impl fmt::Display for FrontierSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::Course => write!(f, "course"),
        }
    }
}

/// Union of every course url listed across all persisted tracks.
/// Duplicates across tracks collapse by url equality.
pub fn course_urls_from_tracks(tracks: &[Track]) -> BTreeSet<String> {
    tracks
        .iter()
        .flat_map(|track| &track.items)
        .filter(|item| item.item_type == ItemType::Course)
        .map(|item| item.url.clone())
        .collect()
}

/// Prerequisite urls referenced by persisted courses that are not themselves
/// persisted as course artifacts: `referenced - known`.
///
/// One hop only. Prerequisites of a course discovered by this call only
/// surface on the next call, after that course has been persisted.
pub fn undiscovered_prerequisites(courses: &[Course]) -> BTreeSet<String> {
    let known: BTreeSet<&str> = courses.iter().map(|c| c.url.as_str()).collect();

    courses
        .iter()
        .filter_map(|course| course.prerequisite.as_ref())
        .flatten()
        .filter(|reference| !known.contains(reference.url.as_str()))
        .map(|reference| reference.url.clone())
        .collect()
}

/// Computes crawl frontiers against an artifact store
pub struct FrontierManager<'a, S: ArtifactStore> {
    store: &'a S,
}

impl<'a, S: ArtifactStore> FrontierManager<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The next batch of course urls to crawl for the given source
    pub fn course_urls(&self, source: FrontierSource) -> Result<BTreeSet<String>> {
        match source {
            FrontierSource::Track => Ok(course_urls_from_tracks(&self.load_tracks()?)),
            FrontierSource::Course => Ok(undiscovered_prerequisites(&self.load_courses()?)),
        }
    }

    fn load_tracks(&self) -> Result<Vec<Track>> {
        self.load_all(TRACKS_DIR, Some(TRACK_LIST_KEY))
    }

    fn load_courses(&self) -> Result<Vec<Course>> {
        self.load_all(COURSES_DIR, None)
    }

    fn load_all<T: serde::de::DeserializeOwned>(
        &self,
        dir: &str,
        skip: Option<&str>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for name in self.store.list(dir)? {
            if !name.ends_with(".json") {
                continue;
            }
            let key = format!("{}/{}", dir, name);
            if Some(key.as_str()) == skip {
                continue;
            }
            let Some(bytes) = self.store.read(&key)? else {
                // Listed but unreadable means it vanished between calls
                tracing::debug!("Artifact {} disappeared during listing", key);
                continue;
            };
            let record = serde_json::from_slice(&bytes)
                .map_err(|source| CoursemapError::ArtifactDecode { key, source })?;
            records.push(record);
        }
        Ok(records)
    }
}
