//! Implementation of the `isobundle assemble` command.
//!
//! Runs a single completion cycle against the on-disk build output, as if the
//! compiler had just reported the given build result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use isobundle_lib::artifact::AssembledArtifact;
use isobundle_lib::callback::{CompilerCallback, CycleOutcome};
use isobundle_lib::compilation::{BuildOptions, BuildResult};
use isobundle_lib::config::BridgeConfig;
use isobundle_lib::store::FsStore;

use crate::output::{print_json, print_success, print_warning};

/// Where the cycle configuration comes from.
pub enum ConfigSource {
  /// A build options file listing plugins and the output path.
  BuildOptions(PathBuf),
  /// Explicit manifest path and output directory.
  Paths { manifest: PathBuf, output_dir: PathBuf },
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}: {}", what, path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("Failed to parse {}: {}", what, path.display()))
}

fn resolve_config(source: ConfigSource) -> Result<BridgeConfig> {
  let mut config = match source {
    ConfigSource::BuildOptions(path) => {
      let options: BuildOptions = read_json(&path, "build options")?;
      BridgeConfig::from_build_options(&options).context("Invalid build options")?
    }
    ConfigSource::Paths { manifest, output_dir } => BridgeConfig::new(manifest, output_dir),
  };

  config.output_dir = dunce::canonicalize(&config.output_dir).unwrap_or(config.output_dir);
  Ok(config)
}

pub fn cmd_assemble(stats: &Path, source: ConfigSource, extensions: Vec<String>, out: Option<&Path>) -> Result<()> {
  let result: BuildResult = read_json(stats, "build result")?;

  let mut config = resolve_config(source)?;
  if !extensions.is_empty() {
    config = config.with_script_extensions(extensions);
  }

  let mut delivered: Option<AssembledArtifact> = None;
  let mut callback = CompilerCallback::new(config, FsStore::new(), |artifact| delivered = Some(artifact));
  let outcome = callback.on_complete(None, &result).context("Completion cycle failed")?;
  drop(callback);

  match (outcome, delivered) {
    (CycleOutcome::Skipped(reason), _) => {
      print_warning(&format!("Build cycle skipped: {}", reason));
      Ok(())
    }
    (CycleOutcome::Delivered, Some(artifact)) => match out {
      Some(path) => {
        let json = serde_json::to_string_pretty(&artifact).context("Failed to serialize artifact")?;
        fs::write(path, json).with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        info!(path = %path.display(), "artifact written");
        print_success(&format!("Wrote artifact to {}", path.display()));
        Ok(())
      }
      None => print_json(&artifact),
    },
    (CycleOutcome::Delivered, None) => anyhow::bail!("cycle reported delivery but no artifact was received"),
  }
}
