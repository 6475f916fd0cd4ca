//! Reference (DLL) manifest types and loading.
//!
//! A reference build emits a manifest listing every module it pre-bundled,
//! keyed by the module id it assigned. Dependent builds consult it so they can
//! point at shared code instead of bundling it again.

mod load;
mod types;

pub use load::*;
pub use types::*;
