use crate::commands::helpers::{fmt_rename, load_snapshot, renamed_notes, require_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::hierarchy::Reorganizer;
use crate::id::MatchPolicy;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &mut S, policy: &MatchPolicy, id: &str) -> Result<CmdResult> {
    let id = require_id(id)?;
    let snapshot = load_snapshot(store, policy)?;

    let mut reorganizer = Reorganizer::new(store, snapshot);
    reorganizer.move_subtree_to_next_available(&id)?;

    let affected = renamed_notes(reorganizer.renames(), reorganizer.snapshot(), policy);
    let renames = reorganizer.into_renames();

    let mut result = CmdResult::default().with_affected_notes(affected);
    for rename in &renames {
        result.add_message(CmdMessage::info(format!("Moved {}", fmt_rename(rename))));
    }
    Ok(result.with_renames(renames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::NoteStore;

    #[test]
    fn test_move_into_next_free_slot() {
        let mut store = StoreFixture::new().with_ids(&["2", "3", "5"]).store;
        let result = run(&mut store, &MatchPolicy::default(), "2").unwrap();

        assert_eq!(result.renames.len(), 1);
        assert_eq!(result.renames[0].to_id, "4");
        assert_eq!(
            store.list_filenames().unwrap(),
            vec!["3.md", "4.md", "5.md"]
        );
    }

    #[test]
    fn test_move_reports_every_rename() {
        let mut store = StoreFixture::new().with_ids(&["2", "2a", "2a1", "3"]).store;
        let result = run(&mut store, &MatchPolicy::default(), "2").unwrap();

        let moves: Vec<String> = result.renames.iter().map(fmt_rename).collect();
        assert_eq!(moves, vec!["2a1 -> 2a2", "2a -> 2b", "2 -> 4"]);
        assert_eq!(result.messages.len(), 3);
    }
}
