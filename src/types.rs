//! Core type aliases for the scan-and-diff pipeline.

use std::collections::BTreeMap;

/// Lowercase hexadecimal digest of a file's full byte content.
pub type Digest = String;

/// Mapping from file path (exactly as recorded by the scanner) to digest.
///
/// Keyed by path, so traversal order never affects semantics. A `BTreeMap`
/// keeps keys sorted, which makes persisted baselines and diff output
/// deterministic and reviewable.
pub type PathDigestMap = BTreeMap<String, Digest>;
