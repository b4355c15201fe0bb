//! # CLI Behavior
//!
//! This is **one possible UI client** for farm2home, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! ## Confirmations
//!
//! Destructive commands (`farmers remove`, `reset`) ask `[y/N]` on stderr and
//! read the answer from stdin. Anything but `y`/`yes` cancels. `--yes` skips
//! the question, which is what scripts should pass.
//!
//! ## Module Structure
//!
//! - `commands`: Entry point, logging setup and dispatch
//! - `handlers`: Per-command handlers that call the API and render output
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
