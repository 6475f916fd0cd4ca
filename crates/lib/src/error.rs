//! Errors shared by the stages of a completion cycle.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which required artifact a cycle could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
  Manifest,
  Bundle,
  SourceMap,
}

impl fmt::Display for ArtifactKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ArtifactKind::Manifest => "manifest file",
      ArtifactKind::Bundle => "bundle file",
      ArtifactKind::SourceMap => "bundle source map file",
    };
    f.write_str(name)
  }
}

/// A required artifact was absent after the build reported success.
///
/// Unlike a skipped cycle this points at misconfiguration (wrong output
/// directory, wrong manifest path), so it is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} does not exist: {}", path.display())]
pub struct MissingArtifact {
  pub kind: ArtifactKind,
  pub path: PathBuf,
}

impl MissingArtifact {
  pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
    Self {
      kind,
      path: path.into(),
    }
  }
}
