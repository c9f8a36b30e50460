//! JSON file backed settings store.
//!
//! The document is read once at startup and kept in memory behind an async `RwLock`.
//! Every mutation is a read-modify-write on the cached document followed by a flush
//! that writes a temporary file next to the target and renames it into place, so a
//! crash mid-write never leaves a truncated document behind. There is no optimistic
//! concurrency check: the last writer wins, which only holds within one process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{data::document::StoreDocument, error::store::StoreError};

/// Shared handle to the settings document.
///
/// Cloning is cheap; all clones share the same cache and file.
#[derive(Clone)]
pub struct SettingsStore {
    path: Arc<PathBuf>,
    document: Arc<RwLock<StoreDocument>>,
}

impl SettingsStore {
    /// Loads the settings document, warming the in-memory cache.
    ///
    /// This is the only blocking file access in the application and runs before the
    /// server starts accepting requests.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON document
    ///
    /// # Returns
    /// - `Ok(SettingsStore)` - Loaded document, or an empty default when the file does not exist
    /// - `Err(StoreError::Read)` - The file exists but could not be read
    /// - `Err(StoreError::Parse)` - The file is not a valid settings document
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = read_document(&path)?;

        Ok(Self {
            path: Arc::new(path),
            document: Arc::new(RwLock::new(document)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs a read-only closure against the cached document.
    pub async fn read<T, F>(&self, operation: F) -> T
    where
        F: FnOnce(&StoreDocument) -> T,
    {
        let document = self.document.read().await;
        operation(&document)
    }

    /// Applies a mutation to the cached document and flushes it to disk.
    ///
    /// The write lock is held until the flush finishes so snapshots reach the disk in
    /// the order they were produced.
    ///
    /// # Returns
    /// - `Ok(T)` - The closure's result; the document is persisted
    /// - `Err(StoreError)` - The flush failed; the mutation stays in the cache
    pub async fn mutate<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut StoreDocument) -> T,
    {
        let mut document = self.document.write().await;
        let result = operation(&mut document);

        if let Err(e) = self.persist(&document).await {
            tracing::error!("{}", e);
            return Err(e);
        }

        Ok(result)
    }

    /// Re-reads the document from disk.
    ///
    /// On failure the last good cache is kept, so a damaged or unreadable file never
    /// replaces known state with an empty document.
    pub async fn reload(&self) -> Result<(), StoreError> {
        let path = self.path.as_ref().clone();

        let loaded = tokio::task::spawn_blocking(move || read_document(&path))
            .await
            .map_err(|e| StoreError::Read {
                path: self.path.as_ref().clone(),
                source: std::io::Error::other(e),
            })?;

        match loaded {
            Ok(document) => {
                *self.document.write().await = document;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Keeping cached settings after failed reload: {}", e);
                Err(e)
            }
        }
    }

    /// Writes the document to a temporary sibling file and renames it over the target.
    async fn persist(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let path = self.path.as_ref();
        let persist_err = |source| StoreError::Persist {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(persist_err)?;
        }

        let payload = serde_json::to_vec_pretty(document).map_err(StoreError::Serialize)?;

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, payload)
            .await
            .map_err(persist_err)?;
        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(persist_err)?;

        Ok(())
    }
}

fn read_document(path: &Path) -> Result<StoreDocument, StoreError> {
    let contents = match std::fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(
                "Settings file {} not found, starting with defaults",
                path.display()
            );
            return Ok(StoreDocument::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
