//! Content hashing for files under a selectable algorithm.
//!
//! Digests are a pure function of file bytes: no mtime, permissions, or
//! ownership is mixed in. Files are streamed through the hasher in bounded
//! chunks so multi-gigabyte files never have to fit in memory.

use crate::error::ScanError;
use crate::types::Digest;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read buffer size for streaming file content through a hasher.
const CHUNK_SIZE: usize = 64 * 1024;

/// Supported hash algorithms.
///
/// A closed set: adding an algorithm means adding a variant here and an arm
/// to [`HasherState`], so support stays statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    Md5,
    Blake3,
}

impl HashAlgorithm {
    /// Lowercase name as accepted on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "md5" => Ok(HashAlgorithm::Md5),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!("Unknown hash algorithm: {}", other)),
        }
    }
}

/// In-flight hash state for one file.
enum HasherState {
    Sha256(Sha256),
    Md5(Md5),
    Blake3(blake3::Hasher),
}

impl HasherState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => HasherState::Sha256(Sha256::new()),
            HashAlgorithm::Md5 => HasherState::Md5(Md5::new()),
            HashAlgorithm::Blake3 => HasherState::Blake3(blake3::Hasher::new()),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        match self {
            HasherState::Sha256(hasher) => hasher.update(bytes),
            HasherState::Md5(hasher) => hasher.update(bytes),
            HasherState::Blake3(hasher) => {
                hasher.update(bytes);
            }
        }
    }

    fn finalize(self) -> Digest {
        match self {
            HasherState::Sha256(hasher) => hex::encode(hasher.finalize()),
            HasherState::Md5(hasher) => hex::encode(hasher.finalize()),
            HasherState::Blake3(hasher) => hasher.finalize().to_hex().to_string(),
        }
    }
}

/// Compute the digest of a single file's contents.
///
/// Fails with an I/O error when the file cannot be opened or read (permission
/// denied, vanished mid-read, path is a directory).
pub fn file_digest(path: &Path, algorithm: HashAlgorithm) -> Result<Digest, ScanError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut state = HasherState::new(algorithm);
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        state.update(&buf[..n]);
    }

    Ok(state.finalize())
}
