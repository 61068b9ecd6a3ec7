//! CLI route: mode resolution and dispatch to the scan, baseline, and diff
//! services.

use crate::baseline;
use crate::cli::output::render_check_report;
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, DriftscanConfig};
use crate::diff;
use crate::error::MonitorError;
use crate::hash::{file_digest, HashAlgorithm};
use crate::scan::walker::WalkerConfig;
use crate::scan::Scanner;
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: the merged configuration.
pub struct RunContext {
    config: DriftscanConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from an optional explicit config path. Without one,
    /// configuration is loaded from the current directory.
    pub fn new(config_path: Option<&Path>) -> Result<Self, MonitorError> {
        let config = if let Some(path) = config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(Path::new("."))?
        };

        Ok(Self {
            config,
            color: std::io::stdout().is_terminal(),
        })
    }

    /// Create run context from an already-merged configuration, without
    /// colored output. Used by tests and embedders.
    pub fn with_config(config: DriftscanConfig) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// The merged configuration backing this context.
    pub fn config(&self) -> &DriftscanConfig {
        &self.config
    }

    /// Resolve the requested mode and run it, returning the rendered output.
    ///
    /// Mode precedence follows the reference surface: --file bypasses
    /// everything else, then --init selects initialization, otherwise the run
    /// is a check against the configured baseline.
    pub fn execute(&self, cli: &Cli) -> Result<String, MonitorError> {
        let algorithm = cli.algo.unwrap_or(self.config.algorithm);
        let baseline_path = cli
            .baseline
            .clone()
            .unwrap_or_else(|| self.config.baseline.clone());

        if let Some(ref file) = cli.file {
            return self.hash_single_file(file, algorithm);
        }

        let directory = cli.directory.as_deref().ok_or_else(|| {
            MonitorError::Usage(
                "the directory argument is required unless --file is given".to_string(),
            )
        })?;

        if cli.init {
            self.init_baseline(directory, &baseline_path, algorithm)
        } else {
            self.check(directory, &baseline_path, algorithm)
        }
    }

    fn scanner(&self, algorithm: HashAlgorithm) -> Scanner {
        let walker_config = WalkerConfig {
            follow_symlinks: self.config.scan.follow_symlinks,
            ignore_patterns: self.config.scan.ignore_patterns.clone(),
            max_depth: self.config.scan.max_depth,
        };
        Scanner::with_walker_config(algorithm, walker_config)
    }

    fn hash_single_file(
        &self,
        file: &Path,
        algorithm: HashAlgorithm,
    ) -> Result<String, MonitorError> {
        if !file.is_file() {
            return Err(MonitorError::FileNotFound(file.to_path_buf()));
        }

        let digest = file_digest(file, algorithm).map_err(MonitorError::Scan)?;
        Ok(format!(
            "{} hash of {}: {}",
            algorithm.name().to_uppercase(),
            file.display(),
            digest
        ))
    }

    fn init_baseline(
        &self,
        directory: &Path,
        baseline_path: &Path,
        algorithm: HashAlgorithm,
    ) -> Result<String, MonitorError> {
        info!(
            "Initializing baseline for {} with {}",
            directory.display(),
            algorithm
        );
        let map = self.scanner(algorithm).scan(directory)?;
        baseline::save(&map, baseline_path)?;
        Ok(format!("Baseline saved to {}", baseline_path.display()))
    }

    fn check(
        &self,
        directory: &Path,
        baseline_path: &Path,
        algorithm: HashAlgorithm,
    ) -> Result<String, MonitorError> {
        let recorded = baseline::load(baseline_path)?;
        let current = self.scanner(algorithm).scan(directory)?;
        let changes = diff::diff(&recorded, &current);
        info!(
            "Check against {} found {} changed paths",
            baseline_path.display(),
            changes.len()
        );
        Ok(render_check_report(&changes, self.color))
    }
}
