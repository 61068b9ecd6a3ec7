//! Error types for the driftscan integrity pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while hashing files or walking the target tree
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    #[error("Scan I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the baseline store
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("Baseline {} does not exist. Run with --init to create one first.", path.display())]
    NotFound { path: PathBuf },

    #[error("Baseline {} is corrupted ({reason}). Re-run with --init to rebuild it.", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Baseline I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level errors surfaced through the CLI
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for MonitorError {
    fn from(err: config::ConfigError) -> Self {
        MonitorError::Config(err.to_string())
    }
}
