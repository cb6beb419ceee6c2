//! # Storage Layer
//!
//! The [`NoteStore`] trait is everything the engine needs from the host: a listing
//! of note filenames and the ability to rename (and create) notes. The store knows
//! nothing about identifiers; mapping filenames to identifiers happens in
//! [`Snapshot::from_filenames`](crate::model::Snapshot::from_filenames) under the
//! active [`MatchPolicy`](crate::id::MatchPolicy).
//!
//! ## Philosophy
//!
//! - **Files are Truth**: a note exists iff a file with a matching name exists.
//! - **No Index**: there is no cache to reconcile. Each top-level operation lists
//!   the container afresh.
//! - **No Transactions**: a rename is one unit of work. Multi-rename operations are
//!   best-effort; a failure leaves earlier renames in place.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a flat directory of note files.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Every file name in the notes container, notes or not.
    fn list_filenames(&self) -> Result<Vec<String>>;

    /// Rename a note file. Fails if `from` is missing or `to` already exists.
    fn rename_note(&mut self, from: &str, to: &str) -> Result<()>;

    /// Create a new note file. Fails if it already exists.
    fn create_note(&mut self, filename: &str, content: &str) -> Result<()>;

    /// Read a note's content.
    fn read_note(&self, filename: &str) -> Result<String>;

    /// The path of a note (virtual for non-filesystem stores).
    fn note_path(&self, filename: &str) -> Result<PathBuf>;
}
