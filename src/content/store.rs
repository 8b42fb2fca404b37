//! File-backed storage for the portfolio document.
//!
//! The document lives in a single JSON file. Reads reconcile the stored
//! content against the built-in defaults so every load returns a fully
//! populated document; writes go through a temp file + rename.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::model::PortfolioDocument;
use super::patch::PortfolioPatch;

/// Errors that can occur while persisting the document.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error writing the document or its parent directory.
    Write(PathBuf, io::Error),
    /// The document could not be serialized.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Write(path, e) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
            StoreError::Serialize(e) => write!(f, "Failed to serialize document: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Write(_, e) => Some(e),
            StoreError::Serialize(e) => Some(e),
        }
    }
}

/// Storage for the single portfolio document.
///
/// The storage location is injected at construction; there is no
/// global path and no in-memory caching between calls. Every read
/// hits the file, so a single writer always reads its own writes.
#[derive(Debug, Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the document, filling any missing fields from the defaults.
    ///
    /// If the file is absent, unreadable or corrupt, the default document
    /// is written out and returned. Fields present in the stored file
    /// replace the corresponding defaults wholesale; lists are never
    /// merged item by item. Only the seeding write can fail here - read
    /// problems themselves are recovered locally.
    pub fn load(&self) -> Result<PortfolioDocument, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        "Failed to read {}, reseeding defaults: {}",
                        self.path.display(),
                        e
                    );
                }
                return self.seed();
            }
        };

        // A stored document has the same shape as a patch applied to the
        // defaults: present fields win, missing fields fall back.
        match serde_json::from_str::<PortfolioPatch>(&contents) {
            Ok(stored) => Ok(stored.apply(&PortfolioDocument::default())),
            Err(e) => {
                tracing::warn!(
                    "Corrupt document at {}, reseeding defaults: {}",
                    self.path.display(),
                    e
                );
                self.seed()
            }
        }
    }

    /// Serializes and writes the document, overwriting any prior content.
    ///
    /// The write goes to a temp file first and is moved into place with a
    /// rename, so a concurrent reader never sees a half-written document.
    pub fn save(&self, doc: &PortfolioDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Write(parent.to_path_buf(), e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, json).map_err(|e| StoreError::Write(temp_path.clone(), e))?;

        fs::rename(&temp_path, &self.path)
            .map_err(|e| StoreError::Write(self.path.clone(), e))?;

        Ok(())
    }

    /// Writes the default document and returns it.
    fn seed(&self) -> Result<PortfolioDocument, StoreError> {
        let doc = PortfolioDocument::default();
        self.save(&doc)?;
        Ok(doc)
    }
}
