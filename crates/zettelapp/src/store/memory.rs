use super::NoteStore;
use crate::error::{Result, ZettelError};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory note store for testing.
///
/// Renames can be made to fail after a number of successes, to exercise
/// reorganizations that break off halfway.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, String>,
    renames_before_failure: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the next `n` renames succeed and fail every one after that.
    pub fn fail_renames_after(&mut self, n: usize) {
        self.renames_before_failure = Some(n);
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }
}

impl NoteStore for InMemoryStore {
    fn list_filenames(&self) -> Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn rename_note(&mut self, from: &str, to: &str) -> Result<()> {
        if let Some(remaining) = self.renames_before_failure.as_mut() {
            if *remaining == 0 {
                return Err(ZettelError::Store("Simulated rename error".to_string()));
            }
            *remaining -= 1;
        }
        if self.files.contains_key(to) {
            return Err(ZettelError::Store(format!(
                "Refusing to overwrite existing file: {}",
                to
            )));
        }
        let content = self
            .files
            .remove(from)
            .ok_or_else(|| ZettelError::Store(format!("Note file not found: {}", from)))?;
        self.files.insert(to.to_string(), content);
        Ok(())
    }

    fn create_note(&mut self, filename: &str, content: &str) -> Result<()> {
        if self.files.contains_key(filename) {
            return Err(ZettelError::Store(format!(
                "Note file already exists: {}",
                filename
            )));
        }
        self.files.insert(filename.to_string(), content.to_string());
        Ok(())
    }

    fn read_note(&self, filename: &str) -> Result<String> {
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| ZettelError::Store(format!("Note file not found: {}", filename)))
    }

    fn note_path(&self, filename: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{}", filename)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `<id>.md` for each identifier.
        pub fn with_ids(mut self, ids: &[&str]) -> Self {
            for id in ids {
                let filename = format!("{}.md", id);
                self.store
                    .create_note(&filename, &format!("# {}\n", id))
                    .unwrap();
            }
            self
        }

        pub fn with_file(mut self, filename: &str) -> Self {
            self.store.create_note(filename, "").unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_rename_moves_content() {
        let mut store = StoreFixture::new().with_ids(&["1"]).store;
        store.rename_note("1.md", "2.md").unwrap();
        assert!(!store.contains("1.md"));
        assert_eq!(store.read_note("2.md").unwrap(), "# 1\n");
    }

    #[test]
    fn test_rename_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.rename_note("1.md", "2.md"),
            Err(ZettelError::Store(_))
        ));
    }

    #[test]
    fn test_rename_refuses_overwrite() {
        let mut store = StoreFixture::new().with_ids(&["1", "2"]).store;
        assert!(store.rename_note("1.md", "2.md").is_err());
        assert!(store.contains("1.md"));
    }

    #[test]
    fn test_simulated_failure_after_n() {
        let mut store = StoreFixture::new().with_ids(&["1", "2"]).store;
        store.fail_renames_after(1);
        store.rename_note("1.md", "3.md").unwrap();
        let err = store.rename_note("2.md", "4.md").unwrap_err();
        assert!(err.to_string().contains("Simulated"));
        assert!(store.contains("2.md"));
    }

    #[test]
    fn test_list_is_sorted() {
        let store = StoreFixture::new()
            .with_file("b.md")
            .with_file("a.md")
            .store;
        assert_eq!(store.list_filenames().unwrap(), vec!["a.md", "b.md"]);
    }
}
