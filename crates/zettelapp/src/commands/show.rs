use crate::commands::helpers::{load_snapshot, require_id};
use crate::commands::{CmdResult, Neighborhood};
use crate::error::{Result, ZettelError};
use crate::id::{parent_id, MatchPolicy};
use crate::model::DisplayNote;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, policy: &MatchPolicy, id: &str) -> Result<CmdResult> {
    let id = require_id(id)?;
    let snapshot = load_snapshot(store, policy)?;
    let note = snapshot
        .find(&id)
        .ok_or_else(|| ZettelError::NoteNotFound(id.clone()))?;

    let parent = snapshot
        .find(&parent_id(&id))
        .map(|n| DisplayNote::from_note(n, policy));
    let children = snapshot
        .children_of(&id)
        .iter()
        .map(|n| DisplayNote::from_note(n, policy))
        .collect();

    let neighborhood = Neighborhood {
        note: DisplayNote::from_note(note, policy),
        parent,
        children,
        next_sibling_id: snapshot.next_sibling_id(&id),
        next_child_id: snapshot.next_child_id(&id),
    };

    Ok(CmdResult {
        neighborhood: Some(neighborhood),
        ..Default::default()
    })
}
