use std::path::PathBuf;

/// Errors that can occur when encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed store image: {0}")]
    Binary(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// Errors that can occur while reading or writing the local store image.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stored image is unreadable: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Errors surfaced by the score keeper to its caller.
#[derive(Debug, thiserror::Error)]
pub enum KeeperError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}
