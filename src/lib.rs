//! Driftscan: file integrity monitoring via content-hash baselines
//!
//! Scans a directory tree into a path→digest map, persists it as a named
//! baseline, and on later runs reports every path added, removed, or
//! modified since.

pub mod baseline;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod hash;
pub mod logging;
pub mod scan;
pub mod types;
