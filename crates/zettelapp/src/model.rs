//! Core data types: notes as (identifier, filename) pairs and the snapshot the
//! hierarchy is derived from.
//!
//! The tree is never stored. A [`Snapshot`] is taken from the store, and parent/child
//! relations are recomputed from identifier strings on every query.

use crate::id::{
    compare_ids, first_available_id, first_child_of, increment_id, parent_id, MatchPolicy,
};
use serde::Serialize;

/// A note as seen by the engine: its identifier and the filename that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub filename: String,
}

impl Note {
    pub fn new(id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
        }
    }

    /// The filename with the leading identifier replaced by `new_id`.
    pub fn renamed_filename(&self, new_id: &str) -> String {
        let rest = self.filename.strip_prefix(self.id.as_str()).unwrap_or("");
        format!("{}{}", new_id, rest)
    }
}

/// A single identifier change performed against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rename {
    pub from_id: String,
    pub to_id: String,
    pub from_filename: String,
    pub to_filename: String,
}

/// A note prepared for display, positioned in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub depth: usize,
}

impl DisplayNote {
    pub fn from_note(note: &Note, policy: &MatchPolicy) -> Self {
        Self {
            id: note.id.clone(),
            filename: note.filename.clone(),
            title: policy.title_of(&note.filename, &note.id),
            depth: crate::id::depth(&note.id).saturating_sub(1),
        }
    }
}

/// All notes known at one point in time, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    notes: Vec<Note>,
}

impl Snapshot {
    pub fn new(mut notes: Vec<Note>) -> Self {
        notes.sort_by(|a, b| compare_ids(&a.id, &b.id));
        Self { notes }
    }

    /// Maps raw filenames through the policy, dropping anything that is not a note.
    pub fn from_filenames<I, T>(filenames: I, policy: &MatchPolicy) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let notes = filenames
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                policy.id_of(name).map(|id| Note::new(id, name))
            })
            .collect();
        Self::new(notes)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.notes.iter().any(|n| n.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Direct children of `id`, in tree order.
    pub fn children_of(&self, id: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.id != id && parent_id(&n.id) == id)
            .cloned()
            .collect()
    }

    /// First free identifier after `id` on the same level.
    pub fn next_sibling_id(&self, id: &str) -> String {
        first_available_id(&increment_id(id), |c| self.exists(c))
    }

    /// First free identifier one level below `parent_id`.
    pub fn next_child_id(&self, parent_id: &str) -> String {
        first_available_id(&first_child_of(parent_id), |c| self.exists(c))
    }

    /// Records a rename so later queries in the same operation see it.
    pub(crate) fn apply_rename(&mut self, from_id: &str, to_id: &str, to_filename: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == from_id) {
            note.id = to_id.to_string();
            note.filename = to_filename.to_string();
        }
        self.notes.sort_by(|a, b| compare_ids(&a.id, &b.id));
    }

}
