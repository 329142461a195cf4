//! Artifact persistence behind a narrow store interface
//!
//! Records are persisted as JSON files addressed by canonical keys derived
//! from their urls. The [`ArtifactStore`] trait keeps the frontier manager and
//! orchestrator testable against any backend; [`FsStore`] is the production
//! filesystem implementation.

mod fs;
mod keys;
mod traits;

pub use fs::FsStore;
pub use keys::{course_key, track_key, COURSES_DIR, TRACKS_DIR, TRACK_LIST_KEY};
pub use traits::{ArtifactStore, StoreError, StoreResult};
