//! CLI parse: clap types for driftscan. No behavior; definitions only.

use crate::hash::HashAlgorithm;
use clap::Parser;
use std::path::PathBuf;

/// Driftscan CLI - file integrity monitoring via content-hash baselines
#[derive(Parser)]
#[command(name = "driftscan")]
#[command(about = "Detect added, removed, and modified files against a hashed baseline")]
pub struct Cli {
    /// Directory to scan (required unless --file is given)
    pub directory: Option<PathBuf>,

    /// Hash algorithm (default: sha256, or the configured value)
    #[arg(long, value_enum)]
    pub algo: Option<HashAlgorithm>,

    /// Baseline file location (default: baseline.json, or the configured value)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Initialize the baseline instead of checking against it
    #[arg(long)]
    pub init: bool,

    /// Hash a single file and print its digest (skips directory scanning)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
