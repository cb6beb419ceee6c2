//! # CLI Behavior
//!
//! This is **one possible UI client** for zettelapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution (`zettel`)
//!
//! Running `zettel` with no subcommand lists the notes of the current directory.
//!
//! ## Notes Directory
//!
//! Resolved from `--dir`, then `ZETTEL_DIR`, then the working directory. The
//! configuration is loaded for that directory (see `zettelapp::config`).
//!
//! ## Output
//!
//! Command results come back as `CmdResult` values and are rendered here:
//! messages are colored by level, listings are printed as an indented tree, and
//! `list --json` / `config` emit machine-readable text on stdout. Diagnostics go to
//! stderr through the logger.

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
