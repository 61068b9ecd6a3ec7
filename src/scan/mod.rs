//! Tree scanner: recursive file enumeration plus per-file hashing.
//!
//! Produces one path→digest map per invocation. Individual files that cannot
//! be hashed are logged and omitted; only a root-level traversal failure
//! aborts the scan.

pub mod path;
pub mod walker;

use crate::error::ScanError;
use crate::hash::{file_digest, HashAlgorithm};
use crate::types::PathDigestMap;
use std::path::Path;
use tracing::{debug, warn};
use walker::{Walker, WalkerConfig};

/// Scanner over one directory tree.
///
/// Algorithm and walker options are threaded through the constructor, never
/// read from process-wide state.
pub struct Scanner {
    algorithm: HashAlgorithm,
    walker_config: WalkerConfig,
}

impl Scanner {
    /// Create a scanner with default walker options.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            walker_config: WalkerConfig::default(),
        }
    }

    /// Create a scanner with custom walker options.
    pub fn with_walker_config(algorithm: HashAlgorithm, walker_config: WalkerConfig) -> Self {
        Self {
            algorithm,
            walker_config,
        }
    }

    /// Hash every regular file reachable from `root`.
    ///
    /// Keys are the traversal paths rooted at `root` as given (after
    /// trailing-separator and Unicode normalization): an absolute root yields
    /// absolute keys, a relative root relative ones. Callers must pass the
    /// same root spelling across runs for keys to line up in the differ.
    pub fn scan(&self, root: &Path) -> Result<PathDigestMap, ScanError> {
        let root = path::normalize_root(root);
        let walker = Walker::with_config(root.clone(), self.walker_config.clone());

        let mut map = PathDigestMap::new();
        for entry in walker.files()? {
            match file_digest(&entry.path, self.algorithm) {
                Ok(digest) => {
                    map.insert(entry.path.to_string_lossy().into_owned(), digest);
                }
                Err(e) => {
                    warn!("Error hashing {}: {}", entry.path.display(), e);
                }
            }
        }

        debug!(
            "Scanned {} files under {} with {}",
            map.len(),
            root.display(),
            self.algorithm
        );

        Ok(map)
    }
}
