//! Integration tests for the `gantry` binary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A `gantry` command isolated from the host: no user config, no colour,
/// no inherited `GANTRY_*` overrides.
fn gantry(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.current_dir(sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("GANTRY_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

fn tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn help_describes_the_scaffold_action() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[test]
fn version_flag_prints_package_version() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn default_name_scaffolds_edge_platform() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .arg("--no-vcs")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready"));

    let root = sandbox.path().join("edge-platform");
    assert!(root.join("gateway/crates/core/src/lib.rs").is_file());
    assert!(root.join("gateway/bin/gatewayd/src/main.rs").is_file());
    assert!(root.join("Justfile").is_file());
    assert!(!root.join(".git").exists());

    let manifest = fs::read_to_string(root.join("Cargo.toml")).unwrap();
    assert!(!manifest.contains("@gantry:members"));
    let core = manifest.find("\"gateway/crates/core\"").unwrap();
    let gatewayd = manifest.find("\"gateway/bin/gatewayd\"").unwrap();
    let config_sync = manifest
        .find("\"control-plane/services/config-sync\"")
        .unwrap();
    assert!(core < gatewayd && gatewayd < config_sync);
}

#[test]
fn output_dir_and_name_pick_the_project_root() {
    let sandbox = TempDir::new().unwrap();
    let parent = sandbox.path().join("work");
    fs::create_dir(&parent).unwrap();

    gantry(&sandbox)
        .args(["my-gateway", "--no-vcs", "--output-dir"])
        .arg(&parent)
        .assert()
        .success();

    let readme = fs::read_to_string(parent.join("my-gateway/README.md")).unwrap();
    assert!(readme.starts_with("# my-gateway"));
}

#[test]
fn second_run_changes_nothing() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox).arg("--no-vcs").assert().success();
    let root = sandbox.path().join("edge-platform");
    let before = tree(&root);

    let out = gantry(&sandbox)
        .args(["--no-vcs", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(tree(&root), before);
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["files_written"], 0);
    assert_eq!(report["manifest"], "unchanged");
    assert_eq!(report["vcs"]["status"], "disabled");
}

#[test]
fn existing_files_are_preserved() {
    let sandbox = TempDir::new().unwrap();
    let readme = sandbox.path().join("edge-platform/gateway/crates/proxy/README.md");
    fs::create_dir_all(readme.parent().unwrap()).unwrap();
    fs::write(&readme, "hand-written\n").unwrap();

    gantry(&sandbox).arg("--no-vcs").assert().success();

    assert_eq!(fs::read_to_string(&readme).unwrap(), "hand-written\n");
}

#[test]
fn json_report_lists_members_in_order() {
    let sandbox = TempDir::new().unwrap();
    let out = gantry(&sandbox)
        .args(["--no-vcs", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let members = report["members"].as_array().unwrap();
    assert_eq!(members.len(), 10);
    assert_eq!(members[0], "gateway/crates/core");
    assert_eq!(members[5], "gateway/bin/gatewayd");
    assert_eq!(report["manifest"], "created");
}

#[test]
fn dry_run_writes_nothing() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("gateway/crates/core/Cargo.toml"));

    assert!(!sandbox.path().join("edge-platform").exists());
}

#[test]
fn missing_required_tool_exits_3_without_writing() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("gantry.toml");
    fs::write(
        &config,
        "[preflight]\nrequired_tools = [\"gantry-no-such-tool-4f2a\"]\n",
    )
    .unwrap();

    gantry(&sandbox)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("gantry-no-such-tool-4f2a"))
        .stderr(predicate::str::contains("No files were written"));

    assert!(!sandbox.path().join("edge-platform").exists());
}

#[test]
fn missing_tool_from_environment_exits_3() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .env("GANTRY_PREFLIGHT__REQUIRED_TOOLS", "cargo,gantry-no-such-tool-4f2a")
        .assert()
        .code(3);

    assert!(!sandbox.path().join("edge-platform").exists());
}

#[test]
fn absent_vcs_tool_is_only_a_warning() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .env("GANTRY_PREFLIGHT__VCS_TOOL", "gantry-no-such-vcs-4f2a")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository not initialised"));

    let root = sandbox.path().join("edge-platform");
    assert!(root.join("Cargo.toml").is_file());
    assert!(!root.join(".git").exists());
}

#[test]
fn template_without_marker_exits_5_and_skips_manifest() {
    let sandbox = TempDir::new().unwrap();
    let template = sandbox.path().join("root.toml");
    fs::write(&template, "[workspace]\nmembers = []\n").unwrap();

    gantry(&sandbox)
        .arg("--no-vcs")
        .arg("--template")
        .arg(&template)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("@gantry:members"));

    let root = sandbox.path().join("edge-platform");
    assert!(!root.join("Cargo.toml").exists());
    assert!(root.join("gateway/crates/core/Cargo.toml").is_file());
}

#[test]
fn custom_template_from_config_is_used() {
    let sandbox = TempDir::new().unwrap();
    fs::write(
        sandbox.path().join("root.toml"),
        "# custom {{PROJECT_NAME}}\n[workspace]\nmembers = [\n  # @gantry:members\n]\n",
    )
    .unwrap();
    let config = sandbox.path().join("gantry.toml");
    fs::write(&config, "[templates]\nroot_manifest = \"root.toml\"\n").unwrap();

    gantry(&sandbox)
        .arg("--no-vcs")
        .arg("-c")
        .arg(&config)
        .assert()
        .success();

    let manifest =
        fs::read_to_string(sandbox.path().join("edge-platform/Cargo.toml")).unwrap();
    assert!(manifest.starts_with("# custom edge-platform\n"));
    assert!(manifest.contains("  \"gateway/crates/core\",\n"));
}

#[test]
fn invalid_project_name_exits_2() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .arg(".hidden")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn project_path_that_is_a_file_exits_2() {
    let sandbox = TempDir::new().unwrap();
    fs::write(sandbox.path().join("edge-platform"), "not a dir").unwrap();

    gantry(&sandbox).arg("--no-vcs").assert().code(2);
}

#[test]
fn malformed_config_exits_4() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("gantry.toml");
    fs::write(&config, "[preflight\n").unwrap();

    gantry(&sandbox)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_flag_exits_2() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox).arg("--frobnicate").assert().code(2);
}

#[test]
fn completions_for_bash() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry"));
}

#[test]
fn config_show_prints_merged_toml() {
    let sandbox = TempDir::new().unwrap();
    gantry(&sandbox)
        .env("GANTRY_PROJECT__DEFAULT_NAME", "edge-lab")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_name = \"edge-lab\""))
        .stdout(predicate::str::contains("vcs_tool = \"git\""));
}

#[test]
fn config_path_points_at_explicit_file() {
    let sandbox = TempDir::new().unwrap();
    let config = sandbox.path().join("gantry.toml");
    fs::write(&config, "").unwrap();

    gantry(&sandbox)
        .args(["config", "path", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry.toml"));
}
