//! Cycle configuration.

use std::path::{Path, PathBuf};

use crate::compilation::BuildOptions;
use crate::consts::DEFAULT_SCRIPT_EXTENSIONS;
use crate::plugin::{PluginError, dll_manifest_path};

/// Where a completion cycle finds its inputs.
///
/// Resolved once when the callback is created and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
  /// Reference manifest written by the DLL build.
  pub manifest_path: PathBuf,
  /// Directory the dependent build writes its output to.
  pub output_dir: PathBuf,
  /// File suffixes that mark a chunk file as a script.
  pub script_extensions: Vec<String>,
}

impl BridgeConfig {
  pub fn new(manifest_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
    Self {
      manifest_path: manifest_path.into(),
      output_dir: output_dir.into(),
      script_extensions: DEFAULT_SCRIPT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
    }
  }

  /// Read the manifest path from the first DLL plugin and the output directory
  /// from the output options.
  pub fn from_build_options(options: &BuildOptions) -> Result<Self, PluginError> {
    let manifest_path = dll_manifest_path(&options.plugins)?;
    Ok(Self::new(manifest_path, &options.output.path))
  }

  pub fn with_script_extensions<I, S>(mut self, extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.script_extensions = extensions.into_iter().map(Into::into).collect();
    self
  }

  pub fn manifest_path(&self) -> &Path {
    &self.manifest_path
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }
}
