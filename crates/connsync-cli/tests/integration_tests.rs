//! Integration tests for the connsync binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SOURCE: &str = "element-templates/telegram-outbound-connector.json";
const TARGET: &str = "connectors/telegram-connector.json";

/// Command isolated from the caller's config, `.env`, and environment.
fn connsync(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("connsync").unwrap();
    isolate(&mut cmd, tmp);
    cmd
}

fn isolate(cmd: &mut Command, tmp: &TempDir) {
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .env("NO_COLOR", "true")
        .env_remove("RUST_LOG")
        .env_remove("CONNSYNC_LAYOUT__PROJECT_ROOT")
        .env_remove("CONNSYNC_LAYOUT__SOURCE")
        .env_remove("CONNSYNC_LAYOUT__TARGET");
}

fn project_with_source(content: &[u8]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    let source = root.join(SOURCE);
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, content).unwrap();
    (tmp, root)
}

fn root_arg(root: &Path) -> [String; 2] {
    ["--project-root".into(), root.display().to_string()]
}

#[test]
fn test_sync_creates_target_directory_and_copies_bytes() {
    let (tmp, root) = project_with_source(br#"{"a":1}"#);
    assert!(!root.join("connectors").exists());

    connsync(&tmp)
        .args(root_arg(&root))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert_eq!(fs::read(root.join(TARGET)).unwrap(), br#"{"a":1}"#);
}

#[test]
fn test_sync_overwrites_and_is_idempotent() {
    let (tmp, root) = project_with_source(b"{\"fresh\":true}");
    fs::create_dir_all(root.join("connectors")).unwrap();
    fs::write(root.join(TARGET), b"stale content that is longer than the source").unwrap();

    connsync(&tmp)
        .args(root_arg(&root))
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));
    let first = fs::read(root.join(TARGET)).unwrap();

    connsync(&tmp).args(root_arg(&root)).assert().success();

    assert_eq!(first, b"{\"fresh\":true}");
    assert_eq!(fs::read(root.join(TARGET)).unwrap(), first);
}

#[test]
fn test_missing_source_fails_and_names_path() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    fs::create_dir_all(&root).unwrap();

    connsync(&tmp)
        .args(root_arg(&root))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "Expected generated outbound template at",
        ))
        .stderr(predicate::str::contains("telegram-outbound-connector.json"));

    assert!(!root.join("connectors").exists());
}

#[test]
fn test_missing_source_leaves_existing_target_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    fs::create_dir_all(root.join("connectors")).unwrap();
    fs::write(root.join(TARGET), b"keep").unwrap();

    connsync(&tmp).args(root_arg(&root)).assert().code(3);

    assert_eq!(fs::read(root.join(TARGET)).unwrap(), b"keep");
}

#[test]
fn test_check_reports_out_of_sync_then_up_to_date() {
    let (tmp, root) = project_with_source(b"{}");

    connsync(&tmp)
        .args(root_arg(&root))
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing"));
    assert!(!root.join(TARGET).exists());

    connsync(&tmp).args(root_arg(&root)).assert().success();

    connsync(&tmp)
        .args(root_arg(&root))
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn test_paths_json_output() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");

    let assert = connsync(&tmp)
        .args(root_arg(&root))
        .args(["--output-format", "json", "paths"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        json["target"].as_str().unwrap(),
        root.join(TARGET).display().to_string()
    );
    assert_eq!(
        json["source"].as_str().unwrap(),
        root.join(SOURCE).display().to_string()
    );
}

#[test]
fn test_quiet_flag_prints_nothing_on_success() {
    let (tmp, root) = project_with_source(b"{}");

    connsync(&tmp)
        .arg("-q")
        .args(root_arg(&root))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_environment_sets_project_root() {
    let (tmp, root) = project_with_source(b"[1]");

    connsync(&tmp)
        .env("CONNSYNC_LAYOUT__PROJECT_ROOT", &root)
        .assert()
        .success();

    assert_eq!(fs::read(root.join(TARGET)).unwrap(), b"[1]");
}

#[test]
fn test_config_file_overrides_target_offset() {
    let (tmp, root) = project_with_source(b"cfg");
    let config = tmp.path().join("connsync.toml");
    fs::write(
        &config,
        format!(
            "[layout]\nproject_root = {:?}\ntarget = \"deploy/out.json\"\n",
            root.display().to_string()
        ),
    )
    .unwrap();

    connsync(&tmp)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(fs::read(root.join("deploy/out.json")).unwrap(), b"cfg");
    assert!(!root.join(TARGET).exists());
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let tmp = TempDir::new().unwrap();

    connsync(&tmp)
        .args(["--config", "does-not-exist.toml", "paths"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_target_outside_project_root_is_rejected() {
    let (tmp, root) = project_with_source(b"{}");
    let config = tmp.path().join("connsync.toml");
    fs::write(
        &config,
        format!(
            "[layout]\nproject_root = {:?}\ntarget = \"../x.json\"\n",
            root.display().to_string()
        ),
    )
    .unwrap();

    connsync(&tmp)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("escapes the project root"));

    assert!(!tmp.path().join("x.json").exists());
    assert!(!root.join("connectors").exists());
}

#[test]
fn test_directory_at_source_path_fails_in_copy() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    fs::create_dir_all(root.join(SOURCE)).unwrap();

    connsync(&tmp).args(root_arg(&root)).assert().failure().code(1);

    assert!(!root.join(TARGET).is_file());
}

/// No flags, no config: the root is two levels above the executable.
#[cfg(unix)]
#[test]
fn test_root_derived_from_executable_location() {
    let (tmp, root) = project_with_source(br#"{"a":1}"#);
    let scripts = root.join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    let exe = scripts.join("connsync");
    let built = assert_cmd::cargo::cargo_bin("connsync");
    // A hard link avoids ETXTBSY from executing a freshly written copy.
    if fs::hard_link(&built, &exe).is_err() {
        fs::copy(&built, &exe).unwrap();
    }

    let mut cmd = Command::new(&exe);
    isolate(&mut cmd, &tmp);
    cmd.assert().success();

    assert_eq!(fs::read(root.join(TARGET)).unwrap(), br#"{"a":1}"#);
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    connsync(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_shell_completions() {
    let tmp = TempDir::new().unwrap();
    connsync(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connsync"));
}
