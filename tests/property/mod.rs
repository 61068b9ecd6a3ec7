//! Property-based tests for the scan-and-diff invariants
