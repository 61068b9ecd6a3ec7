//! Baseline failure modes and format guarantees, end to end

use clap::Parser;
use driftscan::cli::Cli;
use driftscan::error::{BaselineError, MonitorError};
use std::fs;
use tempfile::TempDir;

use crate::integration::{test_context, write_tree};

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["driftscan"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

#[test]
fn test_check_without_baseline_instructs_init() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    write_tree(&root, &[("a.txt", "hello")]);
    let baseline = temp_dir.path().join("absent.json");

    let err = test_context()
        .execute(&cli(&[
            root.to_str().unwrap(),
            "--baseline",
            baseline.to_str().unwrap(),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Baseline(BaselineError::NotFound { .. })
    ));
    assert!(err.to_string().contains("does not exist"));
    assert!(err.to_string().contains("--init"));
}

#[test]
fn test_check_with_corrupt_baseline_instructs_reinit() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    write_tree(&root, &[("a.txt", "hello")]);
    let baseline = temp_dir.path().join("baseline.json");
    fs::write(&baseline, "{ \"truncated\": ").unwrap();

    let err = test_context()
        .execute(&cli(&[
            root.to_str().unwrap(),
            "--baseline",
            baseline.to_str().unwrap(),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Baseline(BaselineError::Corrupt { .. })
    ));
    assert!(err.to_string().contains("corrupted"));
    assert!(err.to_string().contains("--init"));
}

#[test]
fn test_baseline_is_flat_json_without_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    write_tree(&root, &[("a.txt", "hello")]);
    let baseline = temp_dir.path().join("baseline.json");

    test_context()
        .execute(&cli(&[
            root.to_str().unwrap(),
            "--init",
            "--baseline",
            baseline.to_str().unwrap(),
        ]))
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&baseline).unwrap()).unwrap();
    let object = parsed.as_object().unwrap();

    // Flat path→digest members only; no version or algorithm field
    assert_eq!(object.len(), 1);
    let (path, digest) = object.iter().next().unwrap();
    assert!(path.ends_with("a.txt"));
    assert!(digest.as_str().unwrap().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_algorithm_mismatch_reports_everything_modified() {
    // The baseline does not record its algorithm; checking with a different
    // --algo than init mismatches every digest.
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    write_tree(&root, &[("a.txt", "hello"), ("b.txt", "world")]);
    let baseline = temp_dir.path().join("baseline.json");

    let context = test_context();
    let root_str = root.to_str().unwrap();
    let baseline_str = baseline.to_str().unwrap();

    context
        .execute(&cli(&[
            root_str,
            "--init",
            "--algo",
            "sha256",
            "--baseline",
            baseline_str,
        ]))
        .unwrap();

    let output = context
        .execute(&cli(&[
            root_str,
            "--algo",
            "md5",
            "--baseline",
            baseline_str,
        ]))
        .unwrap();

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("MODIFIED: "));
    assert!(lines[2].starts_with("MODIFIED: "));
}

#[cfg(unix)]
#[test]
fn test_init_to_unwritable_baseline_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    write_tree(&root, &[("a.txt", "hello")]);
    let baseline = temp_dir.path().join("missing_dir").join("baseline.json");

    let err = test_context()
        .execute(&cli(&[
            root.to_str().unwrap(),
            "--init",
            "--baseline",
            baseline.to_str().unwrap(),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        MonitorError::Baseline(BaselineError::Io(_))
    ));
}
