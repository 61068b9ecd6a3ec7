//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to the scan, baseline,
//! and diff services.

mod output;
mod parse;
mod route;

pub use output::{map_error, render_check_report};
pub use parse::Cli;
pub use route::RunContext;
