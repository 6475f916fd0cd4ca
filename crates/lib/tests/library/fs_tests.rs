//! Cycles against files written to disk.

use std::path::Path;

use isobundle_lib::callback::{CycleResult, process_cycle};
use isobundle_lib::error::ArtifactKind;
use isobundle_lib::manifest::ModuleId;
use isobundle_lib::store::FsStore;

use super::common::{Layout, MANIFEST, SOURCE_MAP, clean_result};

fn write_outputs(layout: &Layout) {
  layout.write(&layout.manifest_path(), MANIFEST);
  layout.write(&layout.output_file("main.js"), "render();");
  layout.write(&layout.output_file("main.js.map"), SOURCE_MAP);
}

#[test]
fn assembles_from_disk() {
  let layout = Layout::new();
  write_outputs(&layout);

  let result = process_cycle(&layout.config(), &FsStore::new(), None, &clean_result(&["main.js"])).unwrap();
  let CycleResult::Assembled(artifact) = result else {
    panic!("expected an artifact");
  };

  assert_eq!(artifact.bundle_code(), "render();");
  assert_eq!(artifact.bundle_source_map()["file"], "main.js");
  assert_eq!(artifact.request_map().get("./b"), Some(&ModuleId::Numeric(1)));
}

#[test]
fn source_map_must_exist_on_disk() {
  let layout = Layout::new();
  write_outputs(&layout);
  std::fs::remove_file(layout.output_file("main.js.map")).unwrap();

  let err = process_cycle(&layout.config(), &FsStore::new(), None, &clean_result(&["main.js"])).unwrap_err();
  let missing = err.missing_artifact().unwrap();
  assert_eq!(missing.kind, ArtifactKind::SourceMap);
  assert!(missing.path.ends_with(Path::new("out").join("main.js.map")));
}

#[test]
fn duplicate_requests_resolve_to_last_entry() {
  let layout = Layout::new();
  write_outputs(&layout);
  layout.write(
    &layout.manifest_path(),
    r#"{ "content": {
      "0": { "id": 0, "request": "./a" },
      "1": { "id": 1, "request": "./a" }
    } }"#,
  );

  let result = process_cycle(&layout.config(), &FsStore::new(), None, &clean_result(&["main.js"])).unwrap();
  let CycleResult::Assembled(artifact) = result else {
    panic!("expected an artifact");
  };
  assert_eq!(artifact.request_map().len(), 1);
  assert_eq!(artifact.request_map().get("./a"), Some(&ModuleId::Numeric(1)));
}
