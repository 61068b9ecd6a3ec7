//! Scan-root normalization.
//!
//! Map keys are built by joining the traversal segments onto the root exactly
//! as the caller spelled it, so the root itself is normalized first: trailing
//! separators are stripped and Unicode is composed to NFC. `dir` and `dir/`
//! then produce identical keys. Absolute and relative spellings of the same
//! directory remain distinct key spaces.

use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Normalize a scan root for deterministic map keys.
pub fn normalize_root(root: &Path) -> PathBuf {
    let normalized: String = root.to_string_lossy().nfc().collect();

    // Remove trailing slashes (except root)
    let mut result = normalized;
    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    PathBuf::from(result)
}
