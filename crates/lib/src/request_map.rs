//! Request map construction.
//!
//! The manifest indexes modules by the id the reference build assigned, which
//! means nothing to a different compiler instance. A server-side executor
//! resolving a dynamic reference starts from the literal request string in
//! source code, so the manifest is inverted into `request -> id`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manifest::{DllManifest, ModuleId};

/// Lookup from request string to module id.
///
/// Backed by a [`BTreeMap`] so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestMap(BTreeMap<String, ModuleId>);

impl RequestMap {
  pub fn get(&self, request: &str) -> Option<&ModuleId> {
    self.0.get(request)
  }

  pub fn contains_request(&self, request: &str) -> bool {
    self.0.contains_key(request)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleId)> {
    self.0.iter().map(|(request, id)| (request.as_str(), id))
  }
}

impl<'a> IntoIterator for &'a RequestMap {
  type Item = (&'a String, &'a ModuleId);
  type IntoIter = std::collections::btree_map::Iter<'a, String, ModuleId>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Invert manifest content into a request map.
///
/// Entries are visited in manifest order. When several entries share a
/// request, the one listed last wins.
pub fn build_request_map(manifest: &DllManifest) -> RequestMap {
  let mut map = BTreeMap::new();
  for entry in manifest.entries() {
    map.insert(entry.request.clone(), entry.id.clone());
  }
  RequestMap(map)
}
