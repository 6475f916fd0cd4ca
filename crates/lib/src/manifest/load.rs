//! Manifest loading.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::DllManifest;
use crate::error::{ArtifactKind, MissingArtifact};
use crate::store::{OutputStore, StoreError};

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error(transparent)]
  Missing(#[from] MissingArtifact),

  #[error("failed to read manifest: {0}")]
  Read(#[from] StoreError),

  #[error("failed to parse manifest {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Load the reference manifest at `path` from the store.
///
/// The manifest must already exist: it is written by a separate build that
/// finished before this one started.
pub fn load_manifest<S: OutputStore + ?Sized>(store: &S, path: &Path) -> Result<DllManifest, ManifestError> {
  if !store.exists(path) {
    return Err(MissingArtifact::new(ArtifactKind::Manifest, path).into());
  }

  let bytes = store.read(path)?;
  let manifest = DllManifest::from_slice(&bytes).map_err(|source| ManifestError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  debug!(path = %path.display(), entries = manifest.len(), "loaded manifest");

  Ok(manifest)
}
