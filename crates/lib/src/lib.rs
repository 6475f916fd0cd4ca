//! isobundle-lib: bridge a reference (DLL) build and a dependent bundle.
//!
//! When a dependent build finishes, this crate combines:
//! - `DllManifest`: modules pre-bundled by the reference build
//! - `RequestMap`: the manifest inverted to `request -> module id`
//! - `LoadedBundle`: the dependent build's entry script and source map
//!
//! into one `AssembledArtifact` that a server can execute outside a browser.

pub mod artifact;
pub mod bundle;
pub mod callback;
pub mod compilation;
pub mod config;
pub mod consts;
pub mod error;
pub mod gate;
pub mod manifest;
pub mod plugin;
pub mod request_map;
pub mod store;
pub mod util;
