//! Single-file hash mode (--file), which bypasses directory scanning

use clap::Parser;
use driftscan::cli::Cli;
use driftscan::error::MonitorError;
use std::fs;
use tempfile::TempDir;

use crate::integration::test_context;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["driftscan"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

#[test]
fn test_prints_uppercased_algorithm_and_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello").unwrap();

    let output = test_context()
        .execute(&cli(&["--file", file.to_str().unwrap()]))
        .unwrap();

    assert_eq!(
        output,
        format!(
            "SHA256 hash of {}: 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            file.display()
        )
    );
}

#[test]
fn test_md5_selection() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello").unwrap();

    let output = test_context()
        .execute(&cli(&["--file", file.to_str().unwrap(), "--algo", "md5"]))
        .unwrap();

    assert_eq!(
        output,
        format!(
            "MD5 hash of {}: 5d41402abc4b2a76b9719d911017c592",
            file.display()
        )
    );
}

#[test]
fn test_missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no_such_file.txt");

    let err = test_context()
        .execute(&cli(&["--file", missing.to_str().unwrap()]))
        .unwrap_err();

    assert!(matches!(err, MonitorError::FileNotFound(_)));
    assert!(err.to_string().starts_with("File not found: "));
}

#[test]
fn test_file_mode_wins_over_directory_argument() {
    // A directory argument alongside --file is ignored; no traversal happens
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello").unwrap();
    let bogus_dir = temp_dir.path().join("does_not_exist");

    let output = test_context()
        .execute(&cli(&[
            bogus_dir.to_str().unwrap(),
            "--file",
            file.to_str().unwrap(),
        ]))
        .unwrap();

    assert!(output.starts_with("SHA256 hash of "));
}

#[test]
fn test_directory_path_is_not_a_file() {
    let temp_dir = TempDir::new().unwrap();

    let err = test_context()
        .execute(&cli(&["--file", temp_dir.path().to_str().unwrap()]))
        .unwrap_err();

    assert!(matches!(err, MonitorError::FileNotFound(_)));
}
