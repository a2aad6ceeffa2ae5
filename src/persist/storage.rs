//! Storage adapters for the local store image.
//!
//! The keeper writes the whole store after every change; the last write
//! wins. Adapters only move bytes, they never interpret game state.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::snapshot::StoreImage;

/// Where the store image lives between sessions.
pub trait StateStorage {
    /// Read the last saved image. `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<StoreImage>, StorageError>;

    /// Replace the saved image.
    fn save(&mut self, image: &StoreImage) -> Result<(), StorageError>;
}

/// In-memory storage; keeps the encoded bytes so decoding is exercised.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Raw stored bytes, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<StoreImage>, StorageError> {
        self.bytes
            .as_deref()
            .map(StoreImage::from_bytes)
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&mut self, image: &StoreImage) -> Result<(), StorageError> {
        self.bytes = Some(image.to_bytes()?);
        self.saves += 1;
        Ok(())
    }
}

/// Single-file storage on the local disk.
///
/// Saves go to a sibling `.tmp` file first and are renamed over the target,
/// so a crash mid-write leaves the previous image intact.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the image at `path`. The parent directory must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl StateStorage for FileStorage {
    fn load(&self) -> Result<Option<StoreImage>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(StoreImage::from_bytes(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&self.path)(err)),
        }
    }

    fn save(&mut self, image: &StoreImage) -> Result<(), StorageError> {
        let bytes = image.to_bytes()?;
        let tmp = self.tmp_path();

        fs::write(&tmp, bytes).map_err(io_error(&tmp))?;
        fs::rename(&tmp, &self.path).map_err(io_error(&self.path))?;
        Ok(())
    }
}
