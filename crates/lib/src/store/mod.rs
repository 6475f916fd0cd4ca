//! Build-output store access.
//!
//! The store is the set of artifacts a finished compilation has written. Both
//! the reference manifest and the dependent bundle are read through it, so the
//! same cycle logic runs against a real output directory or an in-memory
//! filesystem populated by a test or a dev server.
//!
//! # Backends
//!
//! - [`FsStore`]: reads straight from disk
//! - [`MemoryStore`]: a shared path → bytes map

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{} is not valid UTF-8", path.display())]
  Utf8 { path: PathBuf },
}

/// Read access to the artifacts a compilation has emitted.
///
/// Implementations never create or modify files. Every path handed to a store is
/// already resolved against the output directory.
pub trait OutputStore {
  fn exists(&self, path: &Path) -> bool;

  fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError>;

  /// Read a file and decode it as UTF-8.
  fn read_to_string(&self, path: &Path) -> Result<String, StoreError> {
    let bytes = self.read(path)?;
    String::from_utf8(bytes).map_err(|_| StoreError::Utf8 {
      path: path.to_path_buf(),
    })
  }
}

impl<S: OutputStore + ?Sized> OutputStore for &S {
  fn exists(&self, path: &Path) -> bool {
    (**self).exists(path)
  }

  fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
    (**self).read(path)
  }
}
