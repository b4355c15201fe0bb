//! # Farm2Home CLI
//!
//! The binary is intentionally thin: the presentation layer lives in `src/cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/farm2home/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, session setup and dispatch (mod.rs)             │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  farm2homeapp::api::Farm2HomeApi                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. The CLI owns every
//! user-facing concern: argument parsing, confirmation prompts, rendering and
//! exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
