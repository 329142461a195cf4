//! Coursemap: an incremental learning-catalog crawler
//!
//! This crate harvests a structured catalog (tracks, courses, chapters,
//! instructors, prerequisites) from datacamp.com by rendering pages, extracting
//! typed records, and using the extracted links to discover further pages to
//! crawl. Course prerequisites form a dependency graph that is followed to a
//! fixed point to reach courses never listed on any track page.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod frontier;
pub mod model;
pub mod parser;
pub mod store;
pub mod url;

use thiserror::Error;

/// Main error type for coursemap operations
#[derive(Debug, Error)]
pub enum CoursemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render failed for {url}")]
    Render { url: String },

    #[error("Extraction error: {0}")]
    Extraction(#[from] parser::ExtractionError),

    #[error("Invalid {kind} url: {url} (expected prefix {prefix})")]
    InvalidUrl {
        kind: url::ArtifactKind,
        url: String,
        prefix: &'static str,
    },

    #[error("Invalid frontier source {0:?}, expected \"track\" or \"course\"")]
    InvalidFrontierSource(String),

    #[error("Track listing is not persisted; the listing phase must run first")]
    MissingListing,

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Artifact decode error for {key}: {source}")]
    ArtifactDecode {
        key: String,
        source: serde_json::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for coursemap operations
pub type Result<T> = std::result::Result<T, CoursemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use classify::{classify_icon, classify_item_url, ContentType, ItemType};
pub use config::Config;
pub use frontier::FrontierSource;
pub use model::{Chapter, Course, Subchapter, Track, TrackItem, TrackSummary};
pub use url::ArtifactKind;
