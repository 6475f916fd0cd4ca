use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::error::MissingArtifact;
use crate::store::StoreError;

/// The entry bundle read from the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBundle {
  pub path: PathBuf,
  pub code: String,
  pub source_map: Value,
}

#[derive(Debug, Error)]
pub enum BundleError {
  #[error("first chunk contains no script file")]
  NoEntryBundle,

  #[error("failed to resolve {}: {source}", path.display())]
  Resolve {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Missing(#[from] MissingArtifact),

  #[error("failed to read bundle: {0}")]
  Read(#[from] StoreError),

  #[error("failed to parse source map {}: {source}", path.display())]
  SourceMapParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl BundleError {
  pub fn missing_artifact(&self) -> Option<&MissingArtifact> {
    match self {
      BundleError::Missing(missing) => Some(missing),
      _ => None,
    }
  }
}
