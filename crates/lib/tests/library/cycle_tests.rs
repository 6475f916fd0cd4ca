//! Full completion cycles over the in-memory store.

use std::cell::Cell;

use serde_json::json;

use isobundle_lib::artifact::AssembledArtifact;
use isobundle_lib::callback::{CompilerCallback, CycleOutcome, CycleResult, process_cycle};
use isobundle_lib::compilation::{BuildOptions, CompilationError, OutputOptions, PluginDescriptor};
use isobundle_lib::error::ArtifactKind;
use isobundle_lib::gate::SkipReason;

use super::common::{Layout, SOURCE_MAP, clean_result};

#[test]
fn end_to_end_delivery() {
  let layout = Layout::new();
  let mut delivered: Option<AssembledArtifact> = None;

  let mut callback = CompilerCallback::new(layout.config(), layout.memory_store(), |artifact| {
    assert!(delivered.is_none(), "handler must run once per cycle");
    delivered = Some(artifact);
  });
  let outcome = callback.on_complete(None, &clean_result(&["vendor.css", "main.js"])).unwrap();
  drop(callback);

  assert_eq!(outcome, CycleOutcome::Delivered);
  let artifact = delivered.expect("artifact delivered");
  assert_eq!(artifact.bundle_code(), "module.exports = function render() {};");
  assert_eq!(
    artifact.bundle_source_map(),
    &serde_json::from_str::<serde_json::Value>(SOURCE_MAP).unwrap()
  );
  assert_eq!(
    serde_json::to_value(artifact.request_map()).unwrap(),
    json!({ "./a": 0, "./b": 1 })
  );
}

#[test]
fn hashed_name_is_preferred_over_alias() {
  let layout = Layout::new();
  let store = layout.memory_store();
  store.insert(layout.output_file("main.abc123.js"), "hashed();");
  store.insert(layout.output_file("main.abc123.js.map"), "{}");

  let result = process_cycle(&layout.config(), &store, None, &clean_result(&["main.js", "main.abc123.js"])).unwrap();
  match result {
    CycleResult::Assembled(artifact) => assert_eq!(artifact.bundle_code(), "hashed();"),
    other => panic!("expected an artifact, got {other:?}"),
  }
}

#[test]
fn intermediate_states_are_skipped_silently() {
  let layout = Layout::new();
  let calls = Cell::new(0);
  let mut callback = CompilerCallback::new(layout.config(), layout.memory_store(), |_| calls.set(calls.get() + 1));

  let mut with_errors = clean_result(&["main.js"]);
  with_errors.compilation_errors.push(CompilationError::new("Module not found: ./c"));
  let mut with_missing = clean_result(&["main.js"]);
  with_missing.missing_dependencies.push(layout.temp.path().join("src").join("c.js"));

  assert_eq!(
    callback.on_complete(None, &with_errors).unwrap(),
    CycleOutcome::Skipped(SkipReason::CompilationErrors { count: 1 })
  );
  assert_eq!(
    callback.on_complete(None, &with_missing).unwrap(),
    CycleOutcome::Skipped(SkipReason::MissingDependencies { count: 1 })
  );
  assert_eq!(calls.get(), 0);

  // The next complete cycle goes through.
  assert_eq!(
    callback.on_complete(None, &clean_result(&["main.js"])).unwrap(),
    CycleOutcome::Delivered
  );
  assert_eq!(calls.get(), 1);
}

#[test]
fn missing_manifest_is_fatal() {
  let layout = Layout::new();
  let store = layout.memory_store();
  store.remove(&layout.manifest_path());

  let calls = Cell::new(0);
  let mut callback = CompilerCallback::new(layout.config(), store, |_| calls.set(calls.get() + 1));
  let err = callback.on_complete(None, &clean_result(&["main.js"])).unwrap_err();

  let missing = err.missing_artifact().expect("missing artifact");
  assert_eq!(missing.kind, ArtifactKind::Manifest);
  assert_eq!(missing.path, layout.manifest_path());
  assert_eq!(calls.get(), 0);
}

#[test]
fn missing_bundle_is_fatal() {
  let layout = Layout::new();
  let store = layout.memory_store();
  store.remove(&layout.output_file("main.js"));
  store.remove(&layout.output_file("main.js.map"));

  let err = process_cycle(&layout.config(), &store, None, &clean_result(&["main.js"])).unwrap_err();
  assert_eq!(err.missing_artifact().unwrap().kind, ArtifactKind::Bundle);
  assert!(err.to_string().starts_with("bundle file does not exist"));
}

#[test]
fn callback_from_build_options() {
  let layout = Layout::new();
  let options = BuildOptions {
    plugins: vec![
      PluginDescriptor::Other {
        name: Some("HotModuleReplacementPlugin".to_string()),
      },
      PluginDescriptor::Dll {
        path: layout.manifest_path(),
        name: Some("vendor_lib".to_string()),
      },
    ],
    output: OutputOptions {
      path: layout.output_dir(),
    },
  };

  let calls = Cell::new(0);
  let mut callback =
    CompilerCallback::from_build_options(&options, layout.memory_store(), |_| calls.set(calls.get() + 1)).unwrap();
  assert_eq!(callback.config().manifest_path(), layout.manifest_path());

  callback.on_complete(None, &clean_result(&["main.js"])).unwrap();
  assert_eq!(calls.get(), 1);
}
