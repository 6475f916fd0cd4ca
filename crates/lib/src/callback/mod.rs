//! Completion callback.
//!
//! [`CompilerCallback`] is registered with the compiler and invoked once per
//! build cycle. A cycle that passes the gate loads the reference manifest,
//! inverts it, resolves the entry bundle and hands one [`AssembledArtifact`] to
//! the handler. Nothing is carried from one cycle to the next.

mod types;

pub use types::*;

use tracing::{debug, info, instrument};

use crate::artifact::{AssembledArtifact, assemble};
use crate::bundle::resolve_bundle;
use crate::compilation::{BuildFailure, BuildOptions, BuildResult};
use crate::config::BridgeConfig;
use crate::gate::{GateDecision, evaluate};
use crate::manifest::load_manifest;
use crate::request_map::build_request_map;
use crate::store::OutputStore;

/// Run one completion cycle without delivering the result.
///
/// The manifest is loaded before any bundle file is looked at. Any error
/// returns before an artifact exists.
pub fn process_cycle<S>(
  config: &BridgeConfig,
  store: &S,
  fatal: Option<&BuildFailure>,
  result: &BuildResult,
) -> Result<CycleResult, CycleError>
where
  S: OutputStore + ?Sized,
{
  if let GateDecision::Skip(reason) = evaluate(fatal, result) {
    return Ok(CycleResult::Skipped(reason));
  }

  let manifest = load_manifest(store, &config.manifest_path)?;
  let request_map = build_request_map(&manifest);
  debug!(requests = request_map.len(), "built request map");

  let bundle = resolve_bundle(store, &config.output_dir, &result.chunks, &config.script_extensions)?;

  Ok(CycleResult::Assembled(assemble(request_map, bundle)))
}

/// Handler registered for build completion notifications.
pub struct CompilerCallback<S, F> {
  config: BridgeConfig,
  store: S,
  handler: F,
}

impl<S, F> CompilerCallback<S, F>
where
  S: OutputStore,
  F: FnMut(AssembledArtifact),
{
  pub fn new(config: BridgeConfig, store: S, handler: F) -> Self {
    debug!(manifest = %config.manifest_path.display(), "manifest path");
    Self { config, store, handler }
  }

  /// Resolve the manifest path from the first DLL plugin in `options`.
  ///
  /// Fails with [`CycleError::Plugin`] before any cycle can run when no such
  /// plugin is configured.
  pub fn from_build_options(options: &BuildOptions, store: S, handler: F) -> Result<Self, CycleError> {
    let config = BridgeConfig::from_build_options(options)?;
    Ok(Self::new(config, store, handler))
  }

  pub fn config(&self) -> &BridgeConfig {
    &self.config
  }

  /// Process one build completion notification.
  ///
  /// Returns [`CycleOutcome::Skipped`] for transient build states and
  /// [`CycleOutcome::Delivered`] after the handler has received the artifact.
  /// On error the handler has not been called.
  #[instrument(
    name = "completion_cycle",
    level = "debug",
    skip_all,
    fields(output_dir = %self.config.output_dir.display())
  )]
  pub fn on_complete(&mut self, fatal: Option<&BuildFailure>, result: &BuildResult) -> Result<CycleOutcome, CycleError> {
    match process_cycle(&self.config, &self.store, fatal, result)? {
      CycleResult::Skipped(reason) => Ok(CycleOutcome::Skipped(reason)),
      CycleResult::Assembled(artifact) => {
        info!(requests = artifact.request_map().len(), "delivering assembled bundle");
        (self.handler)(artifact);
        Ok(CycleOutcome::Delivered)
      }
    }
  }
}
