//! Manifest types.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "vendor_lib",
//!   "content": {
//!     "0": { "id": 0, "request": "./node_modules/react/index.js" },
//!     "1": { "id": 1, "request": "./node_modules/react-dom/index.js" }
//!   }
//! }
//! ```
//!
//! # Ordering
//!
//! `content` is decoded into a sequence in document order rather than into a
//! map. Anything derived from the manifest (most importantly the request map)
//! depends on that order when two entries share a request.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Module identifier assigned by a build.
///
/// Only stable within a single build instance. Bundlers emit either numeric or
/// named ids, and both round-trip in the JSON form they were read from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleId {
  Numeric(u64),
  Named(String),
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ModuleId::Numeric(id) => write!(f, "{}", id),
      ModuleId::Named(id) => write!(f, "{}", id),
    }
  }
}

impl From<u64> for ModuleId {
  fn from(id: u64) -> Self {
    ModuleId::Numeric(id)
  }
}

impl From<&str> for ModuleId {
  fn from(id: &str) -> Self {
    ModuleId::Named(id.to_string())
  }
}

/// One module listed by the reference build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
  pub id: ModuleId,
  /// The literal request string source code used to reference the module.
  pub request: String,
  /// Fields the bundler records that this crate does not interpret (build
  /// metadata, export lists).
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ManifestEntry {
  pub fn new(id: impl Into<ModuleId>, request: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      request: request.into(),
      extra: Map::new(),
    }
  }
}

/// The parsed reference manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DllManifest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,

  /// `(key, entry)` pairs in the order they appear in the manifest file.
  #[serde(deserialize_with = "ordered_content", serialize_with = "content_as_map")]
  pub content: Vec<(String, ManifestEntry)>,
}

impl DllManifest {
  pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
    serde_json::from_slice(bytes)
  }

  pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
    self.content.iter().map(|(_, entry)| entry)
  }

  pub fn len(&self) -> usize {
    self.content.len()
  }

  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }
}

fn ordered_content<'de, D>(deserializer: D) -> Result<Vec<(String, ManifestEntry)>, D::Error>
where
  D: Deserializer<'de>,
{
  struct ContentVisitor;

  impl<'de> Visitor<'de> for ContentVisitor {
    type Value = Vec<(String, ManifestEntry)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("an object mapping module keys to manifest entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
      A: MapAccess<'de>,
    {
      let mut content = Vec::with_capacity(map.size_hint().unwrap_or(0));
      while let Some((key, entry)) = map.next_entry::<String, ManifestEntry>()? {
        content.push((key, entry));
      }
      Ok(content)
    }
  }

  deserializer.deserialize_map(ContentVisitor)
}

fn content_as_map<S>(content: &[(String, ManifestEntry)], serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.collect_map(content.iter().map(|(key, entry)| (key, entry)))
}
