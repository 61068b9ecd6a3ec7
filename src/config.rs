//! Configuration System
//!
//! Layered configuration: built-in defaults, then an optional workspace
//! `driftscan.toml`, then `DRIFTSCAN_*` environment overrides. CLI flags are
//! applied last by the route layer, so they always win.

use crate::error::MonitorError;
use crate::hash::HashAlgorithm;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftscanConfig {
    /// Hash algorithm used when --algo is not given
    #[serde(default = "default_algorithm")]
    pub algorithm: HashAlgorithm,

    /// Baseline location used when --baseline is not given
    #[serde(default = "default_baseline")]
    pub baseline: PathBuf,

    /// Scanner settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scanner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Follow symbolic links during traversal (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Directory or file names excluded from scans (e.g., ".git")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Maximum traversal depth (unlimited when absent)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_algorithm() -> HashAlgorithm {
    HashAlgorithm::Sha256
}

fn default_baseline() -> PathBuf {
    PathBuf::from("baseline.json")
}

impl Default for DriftscanConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            baseline: default_baseline(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Loader applying the merge policy.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    ///
    /// Precedence: defaults, then `<workdir>/driftscan.toml` if present, then
    /// `DRIFTSCAN_*` environment variables (`__` separates nested keys, e.g.
    /// `DRIFTSCAN_SCAN__FOLLOW_SYMLINKS=true`).
    pub fn load(workdir: &Path) -> Result<DriftscanConfig, MonitorError> {
        let mut builder = builder_with_defaults()?;

        let config_file = workdir.join("driftscan.toml");
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("DRIFTSCAN").separator("__"));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<DriftscanConfig, MonitorError> {
        if !path.exists() {
            return Err(MonitorError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let config = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Create a Config builder with merge policy defaults applied.
fn builder_with_defaults(
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, MonitorError> {
    Ok(Config::builder()
        .set_default("algorithm", "sha256")?
        .set_default("baseline", "baseline.json")?)
}
