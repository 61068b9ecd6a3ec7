//! CLI output: error mapping and change-report rendering.

use crate::diff::{ChangeRecord, ChangeStatus};
use crate::error::MonitorError;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Map domain errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &MonitorError) -> String {
    e.to_string()
}

/// Render a check report: one `STATUS: path` line per change record, or a
/// single no-change line. `color` wraps the status labels in ANSI colors for
/// terminal output.
pub fn render_check_report(changes: &[ChangeRecord], color: bool) -> String {
    if changes.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut out = String::from("Changes detected:");
    for change in changes {
        let _ = write!(out, "\n{}: {}", status_label(change.status, color), change.path);
    }
    out
}

fn status_label(status: ChangeStatus, color: bool) -> String {
    if !color {
        return status.label().to_string();
    }
    match status {
        ChangeStatus::New => status.label().green().to_string(),
        ChangeStatus::Modified => status.label().yellow().to_string(),
        ChangeStatus::Removed => status.label().red().to_string(),
    }
}
