//! Change classification between a baseline and a current scan.

use crate::types::PathDigestMap;
use serde::{Deserialize, Serialize};

/// Kind of change detected for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    New,
    Modified,
    Removed,
}

impl ChangeStatus {
    /// Uppercase label used in check-mode output.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeStatus::New => "NEW",
            ChangeStatus::Modified => "MODIFIED",
            ChangeStatus::Removed => "REMOVED",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One changed path and how it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub path: String,
    pub status: ChangeStatus,
}

/// Compare a baseline map against a current scan.
///
/// Baseline entries missing from current become [`ChangeStatus::Removed`],
/// entries present with a different digest become [`ChangeStatus::Modified`],
/// and current entries absent from the baseline become [`ChangeStatus::New`].
/// Unchanged paths produce no record, and no path ever produces more than
/// one. Removed/modified records come first in baseline iteration order,
/// then new records in current iteration order; with sorted maps this makes
/// the output stable across runs.
pub fn diff(baseline: &PathDigestMap, current: &PathDigestMap) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();

    for (path, recorded_digest) in baseline {
        match current.get(path) {
            None => changes.push(ChangeRecord {
                path: path.clone(),
                status: ChangeStatus::Removed,
            }),
            Some(digest) if digest != recorded_digest => changes.push(ChangeRecord {
                path: path.clone(),
                status: ChangeStatus::Modified,
            }),
            Some(_) => {}
        }
    }

    for path in current.keys() {
        if !baseline.contains_key(path) {
            changes.push(ChangeRecord {
                path: path.clone(),
                status: ChangeStatus::New,
            });
        }
    }

    changes
}
