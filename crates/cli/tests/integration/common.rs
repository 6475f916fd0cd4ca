//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const MANIFEST: &str = r#"{
  "name": "vendor_lib",
  "content": {
    "0": { "id": 0, "request": "./a" },
    "1": { "id": 1, "request": "./b" }
  }
}"#;

pub const CLEAN_STATS: &str = r#"{ "chunks": [{ "files": ["vendor.css", "main.js"] }] }"#;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a DLL manifest, a build
/// output directory and the build result files passed to the CLI.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty test environment.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Environment with a manifest, `dist/main.js` and `dist/main.js.map`.
  pub fn with_outputs() -> Self {
    let env = Self::empty();
    env.write_file("dll/manifest.json", MANIFEST);
    env.write_file("dist/main.js", "module.exports = 'ssr';");
    env.write_file("dist/main.js.map", r#"{"version":3,"sources":["index.js"]}"#);
    env.write_file("stats.json", CLEAN_STATS);
    env
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp.path().join(relative_path)
  }

  pub fn manifest_path(&self) -> PathBuf {
    self.path("dll/manifest.json")
  }

  pub fn output_dir(&self) -> PathBuf {
    self.path("dist")
  }

  /// Get a Command for the isobundle binary running inside the temp directory.
  pub fn isobundle_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("isobundle");
    cmd.current_dir(self.temp.path());
    cmd.env_remove("RUST_LOG");
    cmd
  }

  /// `assemble` with explicit manifest and output directory.
  pub fn assemble_cmd(&self, stats: &str) -> Command {
    let mut cmd = self.isobundle_cmd();
    cmd
      .arg("assemble")
      .arg(self.path(stats))
      .arg("--manifest")
      .arg(self.manifest_path())
      .arg("--output-dir")
      .arg(self.output_dir());
    cmd
  }
}
