use crate::error::{Result, ZettelError};
use crate::id::{is_valid_id, MatchPolicy};
use crate::model::{DisplayNote, Rename, Snapshot};
use crate::store::NoteStore;
use log::debug;

pub fn load_snapshot<S: NoteStore>(store: &S, policy: &MatchPolicy) -> Result<Snapshot> {
    let filenames = store.list_filenames()?;
    let total = filenames.len();
    let snapshot = Snapshot::from_filenames(filenames, policy);
    debug!(
        "event=snapshot module=commands files={} notes={} rule={}",
        total,
        snapshot.len(),
        policy.rule
    );
    Ok(snapshot)
}

/// Trims user input and checks it is a well-formed identifier.
pub fn require_id(input: &str) -> Result<String> {
    let id = input.trim();
    if is_valid_id(id) {
        Ok(id.to_string())
    } else {
        Err(ZettelError::InvalidId(input.to_string()))
    }
}

/// The notes that ended up somewhere new, as displayed after the operation.
pub fn renamed_notes(renames: &[Rename], snapshot: &Snapshot, policy: &MatchPolicy) -> Vec<DisplayNote> {
    renames
        .iter()
        .filter_map(|r| snapshot.find(&r.to_id))
        .map(|n| DisplayNote::from_note(n, policy))
        .collect()
}

pub fn fmt_rename(rename: &Rename) -> String {
    format!("{} -> {}", rename.from_id, rename.to_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(" 1a2 ").unwrap(), "1a2");
        assert!(matches!(require_id(""), Err(ZettelError::InvalidId(_))));
        assert!(matches!(require_id("1A"), Err(ZettelError::InvalidId(_))));
        assert!(matches!(require_id("1 a"), Err(ZettelError::InvalidId(_))));
    }
}
