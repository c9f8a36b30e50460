use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

/// Test context containing the temporary settings file and an optional session.
///
/// The temporary directory lives as long as the context, so the settings document
/// written by `TestBuilder::build()` stays on disk for the whole test and is removed
/// afterwards.
pub struct TestContext {
    /// Temporary directory holding the settings document.
    dir: TempDir,

    /// Path of the settings document inside `dir`.
    ///
    /// The file may not exist when the builder was told to skip writing it.
    store_path: PathBuf,

    /// Optional session instance for session handling.
    ///
    /// Initialized lazily when `session()` is first called, backed by an in-memory
    /// session store.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a test context around an already prepared temporary directory.
    ///
    /// # Arguments
    /// - `dir` - Temporary directory owning the test files
    /// - `store_path` - Location of the settings document
    ///
    /// # Returns
    /// - New `TestContext` instance with no session
    pub fn new(dir: TempDir, store_path: PathBuf) -> Self {
        Self {
            dir,
            store_path,
            session: None,
        }
    }

    /// Path of the settings document.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Root of the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Gets or creates the test session instance.
    ///
    /// Returns a reference to the existing session if one exists, otherwise creates a
    /// new session backed by a fresh in-memory store. Subsequent calls return the same
    /// session instance.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().build()?;
    /// let session = test.session();
    ///
    /// session.insert("auth:user", "123").await?;
    /// ```
    pub fn session(&mut self) -> &Session {
        self.session
            .get_or_insert_with(|| Session::new(None, Arc::new(MemoryStore::default()), None))
    }
}
