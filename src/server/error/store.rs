use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the JSON settings document.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a valid settings document.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be encoded.
    #[error("Failed to encode settings document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the temporary file or renaming it into place failed.
    ///
    /// The in-memory cache already holds the mutation when this is returned.
    #[error("Failed to persist settings file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
