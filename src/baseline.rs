//! Baseline store: durable JSON snapshots of path→digest maps.
//!
//! A baseline is a flat JSON object, one member per path, pretty-printed with
//! keys in sorted order so two baselines can be compared with ordinary diff
//! tools. There is no version field and no record of the producing algorithm;
//! a check run must use the same `--algo` as the init run that wrote it.

use crate::error::BaselineError;
use crate::types::PathDigestMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Serialize `map` to `storage_path`, fully overwriting any prior baseline.
///
/// An unwritable destination is an error; the save never silently succeeds.
pub fn save(map: &PathDigestMap, storage_path: &Path) -> Result<(), BaselineError> {
    let json = serde_json::to_string_pretty(map).map_err(|e| {
        BaselineError::Io(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("Failed to serialize baseline: {}", e),
        ))
    })?;

    fs::write(storage_path, json)?;
    info!("Baseline written to {} ({} entries)", storage_path.display(), map.len());
    Ok(())
}

/// Load a baseline previously written by [`save`].
///
/// A missing file and an unparseable file are distinct failures so the
/// operator is told whether to initialize or re-initialize.
pub fn load(storage_path: &Path) -> Result<PathDigestMap, BaselineError> {
    let content = match fs::read_to_string(storage_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(BaselineError::NotFound {
                path: storage_path.to_path_buf(),
            });
        }
        Err(e) => return Err(BaselineError::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| BaselineError::Corrupt {
        path: storage_path.to_path_buf(),
        reason: e.to_string(),
    })
}
