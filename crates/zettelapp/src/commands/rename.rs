use crate::commands::helpers::{fmt_rename, load_snapshot, renamed_notes, require_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::hierarchy::Reorganizer;
use crate::id::MatchPolicy;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(
    store: &mut S,
    policy: &MatchPolicy,
    from_id: &str,
    to_id: &str,
) -> Result<CmdResult> {
    let from_id = require_id(from_id)?;
    let to_id = require_id(to_id)?;
    let snapshot = load_snapshot(store, policy)?;

    let mut reorganizer = Reorganizer::new(store, snapshot);
    reorganizer.rename_node(&from_id, &to_id)?;

    let affected = renamed_notes(reorganizer.renames(), reorganizer.snapshot(), policy);
    let renames = reorganizer.into_renames();

    let mut result = CmdResult::default()
        .with_affected_notes(affected)
        .with_renames(renames);
    let message = match result.renames.first() {
        Some(rename) => CmdMessage::success(format!("Renamed {}", fmt_rename(rename))),
        None => CmdMessage::info(format!("Note {} already has that identifier", from_id)),
    };
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZettelError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_rename_single_note() {
        let mut store = StoreFixture::new().with_file("3 Title.md").store;
        let result = run(&mut store, &MatchPolicy::default(), "3", "5b").unwrap();

        assert!(store.contains("5b Title.md"));
        assert_eq!(result.renames.len(), 1);
        assert_eq!(result.affected_notes[0].id, "5b");
    }

    #[test]
    fn test_rename_to_self_is_noop() {
        let mut store = StoreFixture::new().with_ids(&["3"]).store;
        let result = run(&mut store, &MatchPolicy::default(), "3", "3").unwrap();
        assert!(result.renames.is_empty());
        assert!(store.contains("3.md"));
    }

    #[test]
    fn test_rename_errors() {
        let mut store = StoreFixture::new().with_ids(&["1", "2"]).store;
        let policy = MatchPolicy::default();
        assert!(matches!(
            run(&mut store, &policy, "9", "10"),
            Err(ZettelError::NoteNotFound(_))
        ));
        assert!(matches!(
            run(&mut store, &policy, "1", "2"),
            Err(ZettelError::IdInUse(_))
        ));
        assert!(matches!(
            run(&mut store, &policy, "1", "x-y"),
            Err(ZettelError::InvalidId(_))
        ));
    }
}
