use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A build-level failure reported by the compiler itself (as opposed to errors
/// inside individual modules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFailure {
  pub message: String,
}

impl BuildFailure {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

impl fmt::Display for BuildFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}

/// An error attached to a module during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationError {
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub module: Option<String>,
}

impl CompilationError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      module: None,
    }
  }
}

/// A group of output files emitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default)]
  pub files: Vec<String>,
}

impl Chunk {
  pub fn new<I, S>(files: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name: None,
      files: files.into_iter().map(Into::into).collect(),
    }
  }
}

/// Outcome of one build cycle, supplied once per completion notification.
///
/// # Example
///
/// ```json
/// {
///   "compilationErrors": [],
///   "missingDependencies": [],
///   "chunks": [{ "files": ["vendor.css", "main.js"] }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildResult {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<BuildFailure>,
  pub compilation_errors: Vec<CompilationError>,
  pub missing_dependencies: Vec<PathBuf>,
  pub chunks: Vec<Chunk>,
}

impl BuildResult {
  /// A clean result with the given chunks.
  pub fn with_chunks(chunks: Vec<Chunk>) -> Self {
    Self {
      chunks,
      ..Default::default()
    }
  }
}

/// A plugin entry from the compiler's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PluginDescriptor {
  /// Reference-build plugin; `path` is where it writes its manifest.
  Dll {
    path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
  },
  /// Any plugin this crate does not inspect.
  #[serde(untagged)]
  Other {
    #[serde(default)]
    name: Option<String>,
  },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
  pub path: PathBuf,
}

/// The parts of the compiler configuration read when setting up a callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
  #[serde(default)]
  pub plugins: Vec<PluginDescriptor>,
  pub output: OutputOptions,
}
