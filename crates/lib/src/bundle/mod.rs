//! Entry bundle resolution.
//!
//! Picks the script the server should execute out of the dependent build's
//! output, checks that it and its source map were written, and loads both.
//!
//! # Selection heuristic
//!
//! Only the first chunk is considered. Among its files ending in a script
//! extension, the last one is taken, on the assumption that later-emitted
//! names (hashed filenames) are canonical over earlier aliases. Nothing in the
//! compiler guarantees this ordering; several script chunks with an unusual
//! emission order could select the wrong file.

mod types;

pub use types::*;

use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::compilation::Chunk;
use crate::consts::SOURCE_MAP_SUFFIX;
use crate::error::{ArtifactKind, MissingArtifact};
use crate::store::OutputStore;

/// Name of the entry bundle within the first chunk, if any.
pub fn select_entry_bundle<'a, E>(chunks: &'a [Chunk], extensions: &[E]) -> Option<&'a str>
where
  E: AsRef<str>,
{
  chunks
    .first()?
    .files
    .iter()
    .filter(|file| is_script(file, extensions))
    .next_back()
    .map(String::as_str)
}

fn is_script<E: AsRef<str>>(file: &str, extensions: &[E]) -> bool {
  extensions.iter().any(|ext| file.ends_with(ext.as_ref()))
}

/// Absolute path of `file_name` under `output_dir`.
///
/// A relative output directory is resolved against the current directory.
/// `.` and `..` components are folded lexically, without touching the
/// filesystem.
pub fn resolve_output_path(output_dir: &Path, file_name: &str) -> Result<PathBuf, BundleError> {
  let joined = output_dir.join(file_name);
  let absolute = std::path::absolute(&joined).map_err(|source| BundleError::Resolve { path: joined, source })?;
  Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::ParentDir => {
        normalized.pop();
      }
      Component::CurDir => {}
      _ => normalized.push(component),
    }
  }
  normalized
}

/// Companion source map path: the bundle path with `.map` appended.
pub fn source_map_path(bundle_path: &Path) -> PathBuf {
  let mut path = bundle_path.as_os_str().to_owned();
  path.push(SOURCE_MAP_SUFFIX);
  PathBuf::from(path)
}

/// Select, validate and load the entry bundle and its source map.
///
/// The bundle's existence is checked before the source map's.
pub fn resolve_bundle<S, E>(
  store: &S,
  output_dir: &Path,
  chunks: &[Chunk],
  extensions: &[E],
) -> Result<LoadedBundle, BundleError>
where
  S: OutputStore + ?Sized,
  E: AsRef<str>,
{
  let bundle_name = select_entry_bundle(chunks, extensions).ok_or(BundleError::NoEntryBundle)?;
  debug!(bundle = %bundle_name, "selected entry bundle");

  let bundle_path = resolve_output_path(output_dir, bundle_name)?;
  if !store.exists(&bundle_path) {
    return Err(MissingArtifact::new(ArtifactKind::Bundle, bundle_path).into());
  }

  let map_path = source_map_path(&bundle_path);
  if !store.exists(&map_path) {
    return Err(MissingArtifact::new(ArtifactKind::SourceMap, map_path).into());
  }

  let code = store.read_to_string(&bundle_path)?;
  let map_bytes = store.read(&map_path)?;
  let source_map: Value = serde_json::from_slice(&map_bytes).map_err(|source| BundleError::SourceMapParse {
    path: map_path.clone(),
    source,
  })?;

  debug!(path = %bundle_path.display(), bytes = code.len(), "loaded entry bundle");

  Ok(LoadedBundle {
    path: bundle_path,
    code,
    source_map,
  })
}
