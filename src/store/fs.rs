//! Filesystem-backed artifact store
//!
//! Artifacts are plain JSON files under a root data directory. Writes replace
//! the file wholesale; a crash mid-run can leave a partially-written artifact
//! but never corrupts already-committed ones.

use crate::store::{ArtifactStore, StoreError, StoreResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Artifact store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at `root`. The directory itself is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a relative artifact key against the store root, rejecting
    /// absolute keys and path traversal.
    fn resolve(&self, key: &str) -> StoreResult<PathBuf> {
        let path = Path::new(key);
        let traversal = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || traversal {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(path))
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, key: &str) -> bool {
        self.resolve(key).map(|p| p.is_file()).unwrap_or(false)
    }

    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.resolve(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        Ok(())
    }

    fn list(&self, dir: &str) -> StoreResult<Vec<String>> {
        let path = self.resolve(dir)?;
        if !path.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
