//! The assembled server-side artifact.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::LoadedBundle;
use crate::request_map::RequestMap;

/// Everything a server-side executor needs to run the dependent bundle.
///
/// Built once per successful cycle and handed to the completion handler by
/// value. There is no way to modify it after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledArtifact {
  bundle_code: String,
  bundle_source_map: Value,
  request_map: RequestMap,
}

impl AssembledArtifact {
  pub fn bundle_code(&self) -> &str {
    &self.bundle_code
  }

  pub fn bundle_source_map(&self) -> &Value {
    &self.bundle_source_map
  }

  pub fn request_map(&self) -> &RequestMap {
    &self.request_map
  }

  pub fn into_parts(self) -> (String, Value, RequestMap) {
    (self.bundle_code, self.bundle_source_map, self.request_map)
  }
}

/// Combine a request map and a loaded bundle.
pub fn assemble(request_map: RequestMap, bundle: LoadedBundle) -> AssembledArtifact {
  AssembledArtifact {
    bundle_code: bundle.code,
    bundle_source_map: bundle.source_map,
    request_map,
  }
}
