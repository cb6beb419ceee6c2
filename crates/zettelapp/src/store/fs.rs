use super::NoteStore;
use crate::error::{Result, ZettelError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A flat directory of note files.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename == ".." {
            return Err(ZettelError::Store(format!(
                "Invalid note filename: \"{}\"",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }
}

impl NoteStore for FileStore {
    fn list_filenames(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Non UTF-8 names can never carry an identifier
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn rename_note(&mut self, from: &str, to: &str) -> Result<()> {
        let from_path = self.path_for(from)?;
        let to_path = self.path_for(to)?;

        if !from_path.is_file() {
            return Err(ZettelError::Store(format!("Note file not found: {}", from)));
        }
        if to_path.exists() {
            return Err(ZettelError::Store(format!(
                "Refusing to overwrite existing file: {}",
                to
            )));
        }

        fs::rename(&from_path, &to_path)?;
        Ok(())
    }

    fn create_note(&mut self, filename: &str, content: &str) -> Result<()> {
        let path = self.path_for(filename)?;
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::AlreadyExists {
                    ZettelError::Store(format!("Note file already exists: {}", filename))
                } else {
                    ZettelError::Io(err)
                }
            })?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn read_note(&self, filename: &str) -> Result<String> {
        let path = self.path_for(filename)?;
        Ok(fs::read_to_string(path)?)
    }

    fn note_path(&self, filename: &str) -> Result<PathBuf> {
        self.path_for(filename)
    }
}
