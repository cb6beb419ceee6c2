//! # Command Layer
//!
//! Each user-facing operation lives in its own submodule as a pure function over a
//! [`NoteStore`](crate::store::NoteStore). Commands load a fresh
//! [`Snapshot`](crate::model::Snapshot), do their work (through the
//! [`Reorganizer`](crate::hierarchy::Reorganizer) when notes move), and return a
//! structured [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, colors or exit codes
//! - **Argument parsing**: that is the CLI layer's job
//! - **User interaction**: no prompts; return data and let the UI decide
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and assert on `CmdResult` contents and on the
//! resulting set of filenames.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note at the top level, after a sibling, or under a parent
//! - [`list`]: List all notes in tree order
//! - [`show`]: A note's parent, children and next free identifiers
//! - [`next_ids`]: First free sibling/child identifiers without creating anything
//! - [`rename`]: Move one note to a chosen identifier
//! - [`move_subtree`]: Push a note and its descendants to the next free slot
//! - [`outdent`]: Promote a note to follow its parent
//! - [`helpers`]: Snapshot loading and input validation

use crate::model::{DisplayNote, Rename};
use serde::Serialize;

pub mod create;
pub mod helpers;
pub mod list;
pub mod move_subtree;
pub mod next_ids;
pub mod outdent;
pub mod rename;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Where a note sits relative to its relatives.
#[derive(Debug, Clone, Serialize)]
pub struct Neighborhood {
    pub note: DisplayNote,
    pub parent: Option<DisplayNote>,
    pub children: Vec<DisplayNote>,
    pub next_sibling_id: String,
    pub next_child_id: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub renames: Vec<Rename>,
    pub ids: Vec<String>,
    pub neighborhood: Option<Neighborhood>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_renames(mut self, renames: Vec<Rename>) -> Self {
        self.renames = renames;
        self
    }

    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = ids;
        self
    }
}
