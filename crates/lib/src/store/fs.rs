use std::fs;
use std::path::Path;

use super::{OutputStore, StoreError};

/// Store backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
  pub fn new() -> Self {
    Self
  }
}

impl OutputStore for FsStore {
  fn exists(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
    fs::read(path).map_err(|source| StoreError::Read {
      path: path.to_path_buf(),
      source,
    })
  }
}
