use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{OutputStore, StoreError};

/// In-memory store, shared between clones.
///
/// Mirrors the in-memory filesystems dev servers write into: one side inserts
/// artifacts, a completion cycle reads them back.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
    self.lock().insert(path.into(), contents.into());
  }

  pub fn remove(&self, path: &Path) -> Option<Vec<u8>> {
    self.lock().remove(path)
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
    // A panic while holding the lock cannot leave the map half-updated.
    self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl OutputStore for MemoryStore {
  fn exists(&self, path: &Path) -> bool {
    self.lock().contains_key(path)
  }

  fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
    self.lock().get(path).cloned().ok_or_else(|| StoreError::Read {
      path: path.to_path_buf(),
      source: io::Error::from(io::ErrorKind::NotFound),
    })
  }
}
