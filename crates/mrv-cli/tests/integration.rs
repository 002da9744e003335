//! Integration tests for CLI commands.

use serde_json::json;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn make_record(energy_kwh: f64) -> serde_json::Value {
    json!({
        "schema_version": "1.0",
        "mrv_id": "MRV-cli-test",
        "experiment": {
            "experiment_name": "cli-test",
            "model_name": "resnet18",
            "dataset_name": "cifar10"
        },
        "training": {
            "epochs": 2,
            "batch_size": 32,
            "framework": "PyTorch"
        },
        "hardware": {
            "gpu_type": "None",
            "num_gpus": 0,
            "cpu_type": "test-cpu",
            "ram_gb": 16,
            "gpu_memory_gb": 0.0
        },
        "energy_emissions": {
            "measurement_tool": "CodeCarbon",
            "energy_kwh": energy_kwh,
            "co2_kg": 0.0,
            "duration_seconds": 60
        },
        "timestamps": {
            "start_time": "2024-01-01T00:00:00Z",
            "end_time": "2024-01-01T00:01:00Z"
        }
    })
}

fn write_record(dir: &Path, name: &str, record: &serde_json::Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(record).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_mrv"))
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (stdout, stderr, output.status.code().unwrap_or(-1))
}

#[test]
fn anchor_then_verify_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (stdout, stderr, code) = run_cli(&["anchor", "--ledger", ledger, &record_path]);
    assert_eq!(code, 0, "anchor failed: {}", stderr);
    assert!(stdout.contains("Anchored MRV-cli-test"));

    let (stdout, _, code) = run_cli(&["verify", "--ledger", ledger, &record_path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("VALID"));
}

#[test]
fn altered_record_is_reported_tampered() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (_, _, code) = run_cli(&["anchor", "--ledger", ledger, &record_path]);
    assert_eq!(code, 0);

    let altered_path = write_record(temp_dir.path(), "altered.json", &make_record(0.50001));
    let (stdout, _, code) = run_cli(&["verify", "--ledger", ledger, &altered_path]);
    assert_eq!(code, 1);
    assert!(stdout.contains("TAMPERED"));
}

#[test]
fn unanchored_id_is_reported_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (stdout, _, code) = run_cli(&[
        "verify",
        "--ledger",
        ledger,
        &record_path,
        "--id",
        "MRV-never-anchored",
        "--json",
    ]);
    assert_eq!(code, 2);
    assert!(stdout.contains("NOT_FOUND"));
}

#[test]
fn re_anchoring_the_same_record_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (_, _, code) = run_cli(&["anchor", "--ledger", ledger, &record_path]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(&["anchor", "--ledger", ledger, &record_path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Already anchored"));
}

#[test]
fn get_and_exists_report_registry_state() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (stdout, _, code) = run_cli(&["exists", "--ledger", ledger, "MRV-cli-test"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "false");

    run_cli(&["anchor", "--ledger", ledger, &record_path]);

    let (stdout, _, code) = run_cli(&["exists", "--ledger", ledger, "MRV-cli-test"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (stdout, _, code) = run_cli(&["get", "--ledger", ledger, "MRV-cli-test", "--json"]);
    assert_eq!(code, 0);
    let entry: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry["id"], "MRV-cli-test");
    assert_eq!(entry["submitter"], "cli:local");

    let (_, stderr, code) = run_cli(&["get", "--ledger", ledger, "MRV-missing"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("not found"));
}

#[test]
fn hash_agrees_with_the_anchored_digest() {
    let temp_dir = TempDir::new().unwrap();
    let ledger = temp_dir.path().join("ledger.mrvl");
    let ledger = ledger.to_str().unwrap();
    let record_path = write_record(temp_dir.path(), "record.json", &make_record(0.5));

    let (stdout, _, code) = run_cli(&["hash", &record_path]);
    assert_eq!(code, 0);
    let digest = stdout.trim().to_string();
    assert_eq!(digest.len(), 64);

    run_cli(&["anchor", "--ledger", ledger, &record_path]);
    let (stdout, _, _) = run_cli(&["get", "--ledger", ledger, "MRV-cli-test", "--json"]);
    let entry: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry["digest"]["hex"], digest.as_str());
}

#[test]
fn canonicalize_emits_sorted_compact_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("input.json");
    std::fs::write(&path, r#"{"b": 1, "a": {"z": 0.0, "y": true}}"#).unwrap();

    let (stdout, _, code) = run_cli(&["canonicalize", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"a":{"y":true,"z":0.0},"b":1}"#);
}

#[test]
fn list_shows_stored_records() {
    let temp_dir = TempDir::new().unwrap();
    let store_dir = temp_dir.path().join("records");
    std::fs::create_dir_all(&store_dir).unwrap();
    std::fs::write(
        store_dir.join("MRV-one.json"),
        serde_json::to_string_pretty(&make_record(0.5)).unwrap(),
    )
    .unwrap();

    let (stdout, _, code) = run_cli(&["list", store_dir.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "MRV-one");
}
