use crate::commands::helpers::{load_snapshot, require_id};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::id::MatchPolicy;
use crate::store::NoteStore;

/// The first free identifier after `id` at the same depth.
pub fn sibling<S: NoteStore>(store: &S, policy: &MatchPolicy, id: &str) -> Result<CmdResult> {
    let id = require_id(id)?;
    let snapshot = load_snapshot(store, policy)?;
    let next = snapshot.next_sibling_id(&id);
    Ok(CmdResult::default().with_ids(vec![next]))
}

/// The first free identifier one level below `id`.
pub fn child<S: NoteStore>(store: &S, policy: &MatchPolicy, id: &str) -> Result<CmdResult> {
    let id = require_id(id)?;
    let snapshot = load_snapshot(store, policy)?;
    let next = snapshot.next_child_id(&id);
    Ok(CmdResult::default().with_ids(vec![next]))
}
