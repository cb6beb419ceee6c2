use crate::commands::helpers::load_snapshot;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::id::MatchPolicy;
use crate::model::DisplayNote;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, policy: &MatchPolicy) -> Result<CmdResult> {
    let snapshot = load_snapshot(store, policy)?;
    let listed = snapshot
        .notes()
        .iter()
        .map(|n| DisplayNote::from_note(n, policy))
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
