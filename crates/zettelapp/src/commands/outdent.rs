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
    reorganizer.outdent(&id)?;

    let affected = renamed_notes(reorganizer.renames(), reorganizer.snapshot(), policy);
    let renames = reorganizer.into_renames();

    let mut result = CmdResult::default().with_affected_notes(affected);
    for rename in &renames {
        result.add_message(CmdMessage::info(format!("Moved {}", fmt_rename(rename))));
    }
    if let Some(last) = renames.last() {
        result.add_message(CmdMessage::success(format!(
            "Outdented {} to {}",
            last.from_id, last.to_id
        )));
    }
    Ok(result.with_renames(renames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZettelError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::NoteStore;

    #[test]
    fn test_outdent_scenario() {
        let mut store = StoreFixture::new()
            .with_ids(&["1", "1a", "1a1", "1a2", "1b"])
            .store;
        let result = run(&mut store, &MatchPolicy::default(), "1a1").unwrap();

        assert_eq!(
            store.list_filenames().unwrap(),
            vec!["1.md", "1a.md", "1a2.md", "1b.md", "1c.md"]
        );
        assert_eq!(store.read_note("1b.md").unwrap(), "# 1a1\n");
        let last = result.messages.last().unwrap();
        assert_eq!(last.content, "Outdented 1a1 to 1b");
    }

    #[test]
    fn test_outdent_top_level() {
        let mut store = StoreFixture::new().with_ids(&["4"]).store;
        assert!(matches!(
            run(&mut store, &MatchPolicy::default(), "4"),
            Err(ZettelError::AlreadyTopLevel(id)) if id == "4"
        ));
    }
}
