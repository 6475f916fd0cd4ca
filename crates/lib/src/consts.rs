//! Shared constants.

pub const APP_NAME: &str = "isobundle";

/// File extensions treated as executable script output when no others are configured.
pub const DEFAULT_SCRIPT_EXTENSIONS: &[&str] = &[".js"];

/// Suffix appended to a bundle path to locate its companion source map.
pub const SOURCE_MAP_SUFFIX: &str = ".map";

/// Plugin kind that carries the reference manifest path.
pub const DLL_PLUGIN_KIND: &str = "dll";
