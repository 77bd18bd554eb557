use std::fs;
use std::path::PathBuf;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const CATALOG: &str = r#"
default = "4.11.0"
versions = ["4.10.3", "4.10.5", "4.11.0"]

[streams."fast-4.11"]
latest = "4.11.0"
image = "quay.io/openshift-release-dev/ocp-release:4.11.0-x86_64"
"#;

const RUN_ENV_VARS: &[&str] = &[
    "CLUSTER_VERSION",
    "MAJOR_TARGET",
    "MINOR_TARGET",
    "UPGRADE_IMAGE",
    "UPGRADE_RELEASE_STREAM",
    "UPGRADE_RELEASE_NAME",
    "RUST_LOG",
];

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write file");
    path
}

macro_rules! clusterver {
    () => {{
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("clusterver");
        for var in RUN_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }};
}

#[test]
fn resolves_default_version_from_catalog() {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = write_file(&dir, "catalog.toml", CATALOG);

    clusterver!()
        .args(["resolve", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("cluster version: 4.11.0"))
        .stdout(contains("upgrade version: (unset)"))
        .stdout(contains("resolved via:    selected"));
}

#[test]
fn upgrade_stream_from_config_file_picks_previous_version() {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = write_file(&dir, "catalog.toml", CATALOG);
    let config = write_file(
        &dir,
        "run.toml",
        "upgrade-release-stream = \"fast-4.11\"\n",
    );

    clusterver!()
        .arg("--config")
        .arg(&config)
        .args(["resolve", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("cluster version: 4.10.5"))
        .stdout(contains("upgrade version: 4.11.0"))
        .stdout(contains("ocp-release:4.11.0-x86_64"));
}

#[test]
fn environment_overrides_config_file() {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = write_file(&dir, "catalog.toml", CATALOG);
    let config = write_file(&dir, "run.toml", "minor-target = 11\n");

    clusterver!()
        .env("MINOR_TARGET", "10")
        .arg("--config")
        .arg(&config)
        .args(["resolve", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("cluster version: 4.10.5"));
}

#[test]
fn json_output_contains_metadata_and_events() {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = write_file(&dir, "catalog.toml", CATALOG);

    clusterver!()
        .args([
            "resolve",
            "--format",
            "json",
            "--upgrade-release-stream",
            "fast-4.11",
            "--catalog",
        ])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains(r#""cluster_version": "4.10.5""#))
        .stdout(contains(r#""upgrade_version": "4.11.0""#))
        .stdout(contains(r#""path": "upgrade-stream""#))
        .stdout(contains("equal to or newer than upgrade version"));
}

#[test]
fn pinned_version_needs_no_catalog() {
    clusterver!()
        .args(["resolve", "--cluster-version", "4.9.0"])
        .assert()
        .success()
        .stdout(contains("cluster version: 4.9.0"))
        .stdout(contains("resolved via:    pinned"));
}

#[test]
fn missing_catalog_fails_but_still_prints_metadata() {
    clusterver!()
        .args(["resolve", "--upgrade-release-stream", "fast-4.11"])
        .assert()
        .failure()
        .stdout(contains("cluster version: (unset)"))
        .stderr(contains("error: version resolution failed"))
        .stderr(contains("cluster client required"));
}

#[test]
fn unknown_stream_reports_partial_metadata_and_cause() {
    let dir = TempDir::new().expect("create temp dir");
    let catalog = write_file(&dir, "catalog.toml", CATALOG);

    clusterver!()
        .args(["resolve", "--upgrade-release-stream", "candidate-4.12", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stdout(contains("cluster version: 4.11.0"))
        .stdout(contains("resolved via").not())
        .stderr(contains("candidate-4.12"));
}

#[test]
fn invalid_target_in_environment_is_a_config_error() {
    clusterver!()
        .env("MAJOR_TARGET", "four")
        .arg("resolve")
        .assert()
        .failure()
        .stderr(contains("error: configuration error"))
        .stderr(contains("MAJOR_TARGET"));
}
