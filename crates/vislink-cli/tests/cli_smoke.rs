use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(rel: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join(rel);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_json(args: &[&str]) -> Value {
    let exe = assert_cmd::cargo_bin!("vislink-cli");
    let out = Command::new(exe)
        .current_dir(repo_root())
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

#[test]
fn cli_lays_out_chord_fixture() {
    let path = fixture("chord/basic.json");
    let v = run_json(&["chord", path.to_string_lossy().as_ref()]);
    assert_eq!(v["meta"]["diagram_type"], "chord");
    let groups = v["layout"]["ChordDiagram"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 6);
}

#[test]
fn cli_reads_stdin_and_honors_size_flags() {
    let text = fs::read_to_string(fixture("radar/basic.json")).unwrap();
    let exe = assert_cmd::cargo_bin!("vislink-cli");
    let out = assert_cmd::Command::new(exe)
        .args(["spider", "--pretty", "--width", "200", "--height", "300", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).unwrap();
    let radar = &v["layout"]["RadarDiagram"];
    assert_eq!(radar["width"], 200.0);
    assert_eq!(radar["height"], 300.0);
    assert_eq!(radar["radius"], 100.0);
}

#[test]
fn cli_merges_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cfg = tmp.path().join("config.json");
    fs::write(
        &cfg,
        r#"{ "network": { "maxIterations": 12, "seed": 3 } }"#,
    )
    .unwrap();

    let path = fixture("network/basic.json");
    let v = run_json(&[
        "network",
        "--config",
        cfg.to_string_lossy().as_ref(),
        path.to_string_lossy().as_ref(),
    ]);
    let net = &v["layout"]["NetworkDiagram"];
    assert_eq!(net["iterations"], 12);
    assert_eq!(net["nodes"].as_array().unwrap().len(), 4);
}

#[test]
fn cli_network_output_is_stable_across_runs() {
    let path = fixture("network/basic.json");
    let a = run_json(&["network", "--seed", "11", path.to_string_lossy().as_ref()]);
    let b = run_json(&["network", "--seed", "11", path.to_string_lossy().as_ref()]);
    assert_eq!(a, b);
}

#[test]
fn cli_reports_domain_errors() {
    let path = fixture("network/reflexive.json");
    let exe = assert_cmd::cargo_bin!("vislink-cli");
    let out = Command::new(exe)
        .args(["network", path.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("reflexive relationship"), "{stderr}");
}

#[test]
fn cli_usage_errors_exit_with_two() {
    let exe = assert_cmd::cargo_bin!("vislink-cli");
    Command::new(exe).args(["pie"]).assert().failure().code(2);
}
