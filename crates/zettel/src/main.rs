//! # Zettel CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/zettelapp/`: core library with the identifier algebra, the hierarchy
//!   reorganizer, storage and configuration
//! - `crates/zettel/`: this CLI tool, depends on the `zettelapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/zettel/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! │  - Logger bootstrap (logging.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/zettelapp/src/api.rs)                    │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, context initialization, rendering, and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests per command against `InMemoryStore`, plus property
//!   tests for the identifier algebra.
//! - **CLI**: parsing tests in `setup.rs`, rendering tests over canned values in
//!   `render.rs`, and end-to-end runs of the binary in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
