//! Typed lookup of compiler plugins.

use std::path::Path;

use thiserror::Error;

use crate::compilation::PluginDescriptor;
use crate::consts::DLL_PLUGIN_KIND;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
  #[error("no {kind} plugin configured")]
  NotFound { kind: &'static str },
}

/// Return the first item matching `predicate`.
pub fn find_first<T, P>(items: &[T], predicate: P) -> Option<&T>
where
  P: FnMut(&&T) -> bool,
{
  items.iter().find(predicate)
}

/// Manifest path of the first reference-build plugin.
pub fn dll_manifest_path(plugins: &[PluginDescriptor]) -> Result<&Path, PluginError> {
  match find_first(plugins, |plugin| matches!(plugin, PluginDescriptor::Dll { .. })) {
    Some(PluginDescriptor::Dll { path, .. }) => Ok(path),
    _ => Err(PluginError::NotFound { kind: DLL_PLUGIN_KIND }),
  }
}
