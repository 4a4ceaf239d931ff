//! End-to-end tests of the `timcalc` binary.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn timcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timcalc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn no_subcommand_prints_every_part() {
    let output = timcalc(&[]);
    assert!(output.status.success());
    let text = stdout(&output);
    for part in ["M65Kx001AM", "M65Kx002AM", "MT29CxGxxMAxAPxxx", "H9DH4GH4JJAPER"] {
        assert!(text.lines().any(|l| l == part), "{part} missing");
    }
    assert_eq!(text.matches("actim ctrla : ").count(), 15);
}

#[test]
fn show_prints_known_registers() {
    let output = timcalc(&["show", "m65kx002am", "--mhz", "200"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("actim ctrla : 0xe2e1c4c6"));
    assert!(text.contains("actim ctrlb : 0x22328"));
    assert!(text.contains("rfr_ctrl : 0x5e601"));
    assert!(text.contains("mr : 0x32"));
}

#[test]
fn show_unknown_part_fails() {
    let output = timcalc(&["show", "NOPE"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown part `NOPE`"));
}

#[test]
fn list_as_json() {
    let output = timcalc(&["list", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
}

fn write_record(dir: &TempDir, t_rfc: f64) -> std::path::PathBuf {
    let path = dir.path().join("record.json");
    let json = format!(
        r#"{{"tCK": 5, "tRFC": {t_rfc}, "tRC": 55, "tRAS": 40, "tRP": 15, "tRCD": 16.2,
            "tRRD": 10, "tWR": 15, "tWTR": 10, "tCKE": 10, "tXP": 2.9, "tXSR": 200,
            "arcv": 1510, "are": 1, "wbst": 0, "casl": 3, "bl": 2}}"#
    );
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn calc_reads_json_record() {
    let tmp = TempDir::new().unwrap();
    let path = write_record(&tmp, 140.0);
    let output = timcalc(&["calc", path.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["registers"]["ACTIM_CTRLA"], "0xe2e1c4c6");
}

#[test]
fn calc_overflow_fails_unless_truncating() {
    let tmp = TempDir::new().unwrap();
    let path = write_record(&tmp, 200.0);

    let strict = timcalc(&["calc", path.to_str().unwrap()]);
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("ACTIM_CTRLA.tRFC needs 40 cycles"));

    let lenient = timcalc(&["--truncate", "calc", path.to_str().unwrap()]);
    assert!(lenient.status.success());
    assert!(stdout(&lenient).contains("actim ctrla : 0x42e1c4c6"));
}
