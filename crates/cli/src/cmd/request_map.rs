//! Implementation of the `isobundle request-map` command.

use std::path::Path;

use anyhow::{Context, Result};

use isobundle_lib::manifest::load_manifest;
use isobundle_lib::request_map::build_request_map;
use isobundle_lib::store::FsStore;

use crate::output::{OutputFormat, print_info, print_json, symbols};

pub fn cmd_request_map(manifest_path: &Path, format: OutputFormat) -> Result<()> {
  let manifest = load_manifest(&FsStore::new(), manifest_path)
    .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;
  let map = build_request_map(&manifest);

  if format.is_json() {
    return print_json(&map);
  }

  if map.is_empty() {
    print_info("Manifest lists no modules.");
    return Ok(());
  }

  println!("Requests: {}", map.len());
  for (request, id) in &map {
    println!("  {} {} {}", request, symbols::ARROW, id);
  }

  Ok(())
}
