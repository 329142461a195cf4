//! Artifact store trait and error types

use thiserror::Error;

/// Errors that can occur during artifact store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid artifact key: {0}")]
    InvalidKey(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for artifact store backends
///
/// Keys are relative slash-separated paths ("tracks/r-programmer.json").
/// Writes replace the artifact wholesale; there is no merge and no delete.
pub trait ArtifactStore {
    /// Returns true if an artifact exists under the key
    fn exists(&self, key: &str) -> bool;

    /// Reads an artifact's raw bytes, or None if it is absent
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Writes an artifact's raw bytes, creating parent directories as needed
    fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()>;

    /// Lists the artifact filenames directly under a directory, sorted.
    /// A directory that does not exist yet lists as empty.
    fn list(&self, dir: &str) -> StoreResult<Vec<String>>;
}
