use thiserror::Error;

use crate::artifact::AssembledArtifact;
use crate::bundle::BundleError;
use crate::error::MissingArtifact;
use crate::gate::SkipReason;
use crate::manifest::ManifestError;
use crate::plugin::PluginError;

/// A structural failure that stops a cycle.
///
/// These indicate misconfiguration rather than build progress and are never
/// retried by the callback.
#[derive(Debug, Error)]
pub enum CycleError {
  #[error(transparent)]
  Plugin(#[from] PluginError),

  #[error(transparent)]
  Manifest(#[from] ManifestError),

  #[error(transparent)]
  Bundle(#[from] BundleError),
}

impl CycleError {
  /// The missing artifact behind this error, whichever stage reported it.
  pub fn missing_artifact(&self) -> Option<&MissingArtifact> {
    match self {
      CycleError::Manifest(ManifestError::Missing(missing)) => Some(missing),
      CycleError::Bundle(err) => err.missing_artifact(),
      _ => None,
    }
  }
}

/// Result of [`process_cycle`](super::process_cycle).
#[derive(Debug, Clone, PartialEq)]
pub enum CycleResult {
  Assembled(AssembledArtifact),
  Skipped(SkipReason),
}

/// What [`CompilerCallback::on_complete`](super::CompilerCallback::on_complete) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
  Delivered,
  Skipped(SkipReason),
}
