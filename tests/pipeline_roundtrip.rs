//! End-to-end pipeline tests against on-disk fixtures.
//!
//! Writes a generator config plus a generated project file into a temp
//! directory, runs the pipeline, and checks the rewritten file.

use emproject_patch::pipeline::{run, PatchOptions, PipelineError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROJECT: &str = r#"<!DOCTYPE CrossStudio_Project_File>
<solution Name="light_switch" target="8" version="2">
  <project Name="light_switch">
    <configuration Name="Common" c_user_include_directories="$(ProjectDir)/foo;$(StudioDir)/external/freertos/source/include;../../mesh/core/include;" />
    <folder Name="FreeRTOS">
      <file file_name="$(StudioDir)/external/freertos/tasks.c" />
    </folder>
    <folder Name="Application">
      <file file_name="src/app.c" />
    </folder>
  </project>
  <configuration Name="Debug" build_intermediate_directory="Output/arm/Obj" />
  <configuration Name="Release" />
</solution>
"#;

const CONFIG: &str = r#"{ "target": { "name": "light_switch.server" } }"#;

fn write_fixture(dir: &Path) {
    fs::write(dir.join("config.json"), CONFIG).unwrap();
    fs::write(dir.join("light_switch_server.emProject"), PROJECT).unwrap();
}

fn options(dir: &Path, dry_run: bool) -> PatchOptions {
    PatchOptions {
        config_path: dir.join("config.json"),
        out_dir: dir.to_path_buf(),
        dry_run,
    }
}

#[test]
fn test_full_round_trip_patches_the_file() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let outcome = run(&options(dir.path(), false)).unwrap();
    assert_eq!(
        outcome.emproject_path,
        dir.path().join("light_switch_server.emProject")
    );
    assert_eq!(outcome.report.folders_patched, 2);
    assert_eq!(outcome.report.folders_redirected, 1);

    let written = fs::read_to_string(&outcome.emproject_path).unwrap();
    assert!(written.starts_with("<!DOCTYPE CrossStudio_Project_File>\n"));
    assert!(written.contains(r#"c_user_include_directories="$(ProjectDir)/foo;""#));
    assert!(written.contains(
        "$(StudioDir)/external/freertos/source/include;../../mesh/core/include;"
    ));
    assert!(written.contains(
        "../../mesh/core/include;$(StudioDir)/external/freertos/source/include;"
    ));
    assert!(written.contains(r#"build_intermediate_directory="Output/arm/Obj/conflict""#));
    // The temp file used for the atomic write must be gone.
    assert!(!dir.path().join("light_switch_server.tmp").exists());
}

#[test]
fn test_rerun_on_patched_file_fails_and_leaves_it_unchanged() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let outcome = run(&options(dir.path(), false)).unwrap();
    let patched = fs::read_to_string(&outcome.emproject_path).unwrap();

    let err = run(&options(dir.path(), false)).unwrap_err();
    assert!(matches!(err, PipelineError::Patch(_)));
    assert_eq!(err.exit_code(), 10);

    let after = fs::read_to_string(&outcome.emproject_path).unwrap();
    assert_eq!(after, patched);
}

#[test]
fn test_dry_run_leaves_the_file_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let outcome = run(&options(dir.path(), true)).unwrap();
    assert_eq!(outcome.report.folders_patched, 2);

    let after = fs::read_to_string(dir.path().join("light_switch_server.emProject")).unwrap();
    assert_eq!(after, PROJECT);
}

#[test]
fn test_missing_project_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), CONFIG).unwrap();

    let err = run(&options(dir.path(), false)).unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_bad_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let err = run(&options(dir.path(), false)).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_project_file_is_a_tree_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), CONFIG).unwrap();
    fs::write(
        dir.path().join("light_switch_server.emProject"),
        "<!DOCTYPE CrossStudio_Project_File>\n<solution><project>",
    )
    .unwrap();

    let err = run(&options(dir.path(), false)).unwrap_err();
    assert!(matches!(err, PipelineError::Tree(_)));
    assert_eq!(err.exit_code(), 30);
}
