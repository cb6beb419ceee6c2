//! # Hierarchy Reorganization
//!
//! Moving notes around the tree means renaming them: a note's position *is* its
//! identifier. The [`Reorganizer`] owns a working copy of a [`Snapshot`] and issues
//! renames against a [`NoteStore`], updating the snapshot after each one so later
//! existence checks in the same operation see the new layout.
//!
//! ## Operations
//!
//! - [`Reorganizer::rename_node`]: one note, one rename. The tail of the filename
//!   (separator, title, extension) is kept.
//! - [`Reorganizer::move_subtree_to_next_available`]: depth-first, children before
//!   their parent. Each node walks forward from its own slot to the first free one.
//! - [`Reorganizer::outdent`]: a node becomes the next sibling of its parent. Whatever
//!   occupies that slot is evacuated first; direct children are re-homed under the
//!   node's new identifier before the node itself is renamed.
//!
//! ## Failure Model
//!
//! Renames are independent units of work. When one fails, the error is returned
//! as-is and nothing is rolled back. [`Reorganizer::renames`] still lists what was
//! done up to that point.

use crate::error::{Result, ZettelError};
use crate::id::{first_available_id, increment_id, parent_id};
use crate::model::{Note, Rename, Snapshot};
use crate::store::NoteStore;
use log::{debug, info, warn};

pub struct Reorganizer<'s, S: NoteStore> {
    store: &'s mut S,
    snapshot: Snapshot,
    renames: Vec<Rename>,
}

impl<'s, S: NoteStore> Reorganizer<'s, S> {
    pub fn new(store: &'s mut S, snapshot: Snapshot) -> Self {
        Self {
            store,
            snapshot,
            renames: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Renames performed so far, in order.
    pub fn renames(&self) -> &[Rename] {
        &self.renames
    }

    pub fn into_renames(self) -> Vec<Rename> {
        self.renames
    }

    /// Renames the note `from_id` to `to_id`, keeping the rest of its filename.
    pub fn rename_node(&mut self, from_id: &str, to_id: &str) -> Result<()> {
        let note = self
            .snapshot
            .find(from_id)
            .cloned()
            .ok_or_else(|| ZettelError::NoteNotFound(from_id.to_string()))?;
        if from_id == to_id {
            return Ok(());
        }
        if self.snapshot.exists(to_id) {
            return Err(ZettelError::IdInUse(to_id.to_string()));
        }

        let to_filename = note.renamed_filename(to_id);
        if let Err(err) = self.store.rename_note(&note.filename, &to_filename) {
            warn!(
                "event=rename module=hierarchy status=error from={} to={} completed={} error={}",
                from_id,
                to_id,
                self.renames.len(),
                err
            );
            return Err(err);
        }
        info!(
            "event=rename module=hierarchy status=ok from={} to={}",
            from_id, to_id
        );

        self.snapshot.apply_rename(from_id, to_id, &to_filename);
        self.renames.push(Rename {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            from_filename: note.filename,
            to_filename,
        });
        Ok(())
    }

    /// Pushes `id` (and, first, each of its descendants) forward to the first free
    /// slot at or after its current position.
    ///
    /// The search starts at `id` itself, which is occupied by the note being moved,
    /// so a node always lands on a strictly later sibling slot.
    pub fn move_subtree_to_next_available(&mut self, id: &str) -> Result<()> {
        if !self.snapshot.exists(id) {
            return Err(ZettelError::NoteNotFound(id.to_string()));
        }

        let children: Vec<Note> = self.snapshot.children_of(id);
        for child in &children {
            self.move_subtree_to_next_available(&child.id)?;
        }

        let to_id = first_available_id(id, |c| self.snapshot.exists(c));
        debug!(
            "event=slot_search module=hierarchy start={} found={}",
            id, to_id
        );
        self.rename_node(id, &to_id)
    }

    /// Promotes `id` to the sibling slot right after its parent.
    pub fn outdent(&mut self, id: &str) -> Result<()> {
        if !self.snapshot.exists(id) {
            return Err(ZettelError::NoteNotFound(id.to_string()));
        }
        let parent = parent_id(id);
        if parent.is_empty() {
            return Err(ZettelError::AlreadyTopLevel(id.to_string()));
        }

        // Captured before anything below moves
        let children: Vec<Note> = self.snapshot.children_of(id);
        let new_id = increment_id(&parent);

        if self.snapshot.exists(&new_id) {
            debug!(
                "event=evacuate module=hierarchy slot={} for={}",
                new_id, id
            );
            self.move_subtree_to_next_available(&new_id)?;
        }

        for child in &children {
            let new_child_id = self.snapshot.next_child_id(&new_id);
            self.rename_node(&child.id, &new_child_id)?;
        }

        self.rename_node(id, &new_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MatchPolicy;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn snapshot_of(store: &InMemoryStore) -> Snapshot {
        Snapshot::from_filenames(store.list_filenames().unwrap(), &MatchPolicy::default())
    }

    fn ids_of(store: &InMemoryStore) -> Vec<String> {
        snapshot_of(store)
            .notes()
            .iter()
            .map(|n| n.id.clone())
            .collect()
    }

    #[test]
    fn test_rename_node_keeps_title_and_extension() {
        let mut store = StoreFixture::new().with_file("1a Some title.md").store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.rename_node("1a", "1b").unwrap();
        assert_eq!(reorg.renames()[0].to_filename, "1b Some title.md");
        assert!(reorg.snapshot().exists("1b"));
        drop(reorg);
        assert!(store.contains("1b Some title.md"));
    }

    #[test]
    fn test_rename_node_not_found() {
        let mut store = StoreFixture::new().with_ids(&["1"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        match reorg.rename_node("7", "8") {
            Err(ZettelError::NoteNotFound(id)) => assert_eq!(id, "7"),
            other => panic!("Expected NoteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rename_node_refuses_occupied_target() {
        let mut store = StoreFixture::new().with_ids(&["1", "2"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        assert!(matches!(
            reorg.rename_node("1", "2"),
            Err(ZettelError::IdInUse(_))
        ));
    }

    #[test]
    fn test_outdent_evacuates_occupied_slot() {
        let mut store = StoreFixture::new()
            .with_ids(&["1", "1a", "1a1", "1a2", "1b"])
            .store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.outdent("1a1").unwrap();
        let renames: Vec<(String, String)> = reorg
            .renames()
            .iter()
            .map(|r| (r.from_id.clone(), r.to_id.clone()))
            .collect();
        assert_eq!(
            renames,
            vec![
                ("1b".to_string(), "1c".to_string()),
                ("1a1".to_string(), "1b".to_string()),
            ]
        );
        drop(reorg);

        assert_eq!(ids_of(&store), vec!["1", "1a", "1a2", "1b", "1c"]);
        assert_eq!(store.read_note("1b.md").unwrap(), "# 1a1\n");
        assert_eq!(store.read_note("1c.md").unwrap(), "# 1b\n");
    }

    #[test]
    fn test_outdent_rehomes_children() {
        let mut store = StoreFixture::new().with_ids(&["1", "1a", "1a1", "1a2"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.outdent("1a").unwrap();
        drop(reorg);

        assert_eq!(ids_of(&store), vec!["1", "2", "2a", "2b"]);
        assert_eq!(store.read_note("2.md").unwrap(), "# 1a\n");
        assert_eq!(store.read_note("2a.md").unwrap(), "# 1a1\n");
        assert_eq!(store.read_note("2b.md").unwrap(), "# 1a2\n");
    }

    #[test]
    fn test_outdent_evacuates_slot_with_descendants() {
        let mut store = StoreFixture::new()
            .with_ids(&["1", "1a", "1a1", "1b", "1b1"])
            .store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.outdent("1a1").unwrap();
        let renames: Vec<(&str, &str)> = reorg
            .renames()
            .iter()
            .map(|r| (r.from_id.as_str(), r.to_id.as_str()))
            .collect();
        assert_eq!(renames, vec![("1b1", "1b2"), ("1b", "1c"), ("1a1", "1b")]);
        drop(reorg);

        // The evacuated child keeps its prefix and now sits under the outdented note
        assert_eq!(ids_of(&store), vec!["1", "1a", "1b", "1b2", "1c"]);
        assert_eq!(store.read_note("1b.md").unwrap(), "# 1a1\n");
        assert_eq!(store.read_note("1b2.md").unwrap(), "# 1b1\n");
        assert_eq!(store.read_note("1c.md").unwrap(), "# 1b\n");
    }

    #[test]
    fn test_outdent_leaves_grandchildren_in_place() {
        let mut store = StoreFixture::new()
            .with_ids(&["1", "1a", "1a1", "1a1a"])
            .store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.outdent("1a").unwrap();
        assert_eq!(reorg.renames().len(), 2);
        drop(reorg);

        assert_eq!(ids_of(&store), vec!["1", "1a1a", "2", "2a"]);
        assert_eq!(store.read_note("2a.md").unwrap(), "# 1a1\n");
        assert_eq!(store.read_note("1a1a.md").unwrap(), "# 1a1a\n");
    }

    #[test]
    fn test_outdent_top_level_fails() {
        let mut store = StoreFixture::new().with_ids(&["1"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        assert!(matches!(
            reorg.outdent("1"),
            Err(ZettelError::AlreadyTopLevel(_))
        ));
        assert!(reorg.renames().is_empty());
    }

    #[test]
    fn test_outdent_missing_note() {
        let mut store = StoreFixture::new().with_ids(&["1"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        assert!(matches!(
            reorg.outdent("1a"),
            Err(ZettelError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_move_subtree_skips_occupied_slots() {
        let mut store = StoreFixture::new().with_ids(&["2", "2a", "3"]).store;
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        reorg.move_subtree_to_next_available("2").unwrap();
        let renames: Vec<(String, String)> = reorg
            .renames()
            .iter()
            .map(|r| (r.from_id.clone(), r.to_id.clone()))
            .collect();
        // Children go first
        assert_eq!(
            renames,
            vec![
                ("2a".to_string(), "2b".to_string()),
                ("2".to_string(), "4".to_string()),
            ]
        );
        drop(reorg);
        assert_eq!(ids_of(&store), vec!["2b", "3", "4"]);
    }

    #[test]
    fn test_move_subtree_missing_note() {
        let mut store = InMemoryStore::new();
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        assert!(matches!(
            reorg.move_subtree_to_next_available("1"),
            Err(ZettelError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_partial_failure_is_not_rolled_back() {
        let mut store = StoreFixture::new()
            .with_ids(&["1", "1a", "1a1", "1b"])
            .store;
        store.fail_renames_after(1);
        let snapshot = snapshot_of(&store);
        let mut reorg = Reorganizer::new(&mut store, snapshot);

        // Evacuating 1b succeeds, moving 1a1 into its slot fails
        let err = reorg.outdent("1a1").unwrap_err();
        assert!(matches!(err, ZettelError::Store(_)));
        assert_eq!(reorg.renames().len(), 1);
        drop(reorg);

        assert_eq!(ids_of(&store), vec!["1", "1a", "1a1", "1c"]);
    }
}
