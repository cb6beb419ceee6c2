//! # Configuration
//!
//! Configuration is loaded by [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `ZETTEL_MATCH_RULE`, `ZETTEL_SEPARATOR`, ...
//! 2. **Project Config**: `<notes-dir>/.zettel.toml`
//! 3. **Global Config**: `zettel.toml` in the OS config directory (via `directories`),
//!    or the file named by `ZETTEL_GLOBAL_CONFIG`.
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `match_rule` | `fuzzy` | How identifiers are found in filenames: `strict`, `separator`, `fuzzy` |
//! | `separator` | `" "` | Text between identifier and title |
//! | `note_extension` | `.md` | Suffix of note files |
//! | `add_title` | `true` | Whether new filenames include the title |
//!
//! With `add_title` on, the separator must not be empty or start with a digit or
//! lowercase letter: the title would otherwise read back as part of the identifier
//! (`1` + `abc` is `1abc`). Such configurations are rejected at load time.

use crate::error::{Result, ZettelError};
use crate::id::{MatchPolicy, MatchRule};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILENAME: &str = ".zettel.toml";
pub const GLOBAL_CONFIG_FILENAME: &str = "zettel.toml";
pub const GLOBAL_CONFIG_ENV: &str = "ZETTEL_GLOBAL_CONFIG";

/// Configuration for zettel, stored in `.zettel.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZettelConfig {
    /// How the leading identifier is recognized: "strict", "separator" or "fuzzy"
    #[config(env = "ZETTEL_MATCH_RULE", default = "fuzzy")]
    pub match_rule: MatchRule,

    /// Separator between identifier and title in filenames
    #[config(env = "ZETTEL_SEPARATOR", default = " ")]
    pub separator: String,

    /// Suffix of note files (e.g. ".md")
    #[config(env = "ZETTEL_NOTE_EXTENSION", default = ".md")]
    pub note_extension: String,

    /// Append the title to the identifier when creating notes
    #[config(env = "ZETTEL_ADD_TITLE", default = true)]
    pub add_title: bool,
}

impl Default for ZettelConfig {
    fn default() -> Self {
        Self {
            match_rule: MatchRule::Fuzzy,
            separator: " ".to_string(),
            note_extension: ".md".to_string(),
            add_title: true,
        }
    }
}

impl ZettelConfig {
    /// Loads the layered configuration for a notes directory.
    pub fn load(notes_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(notes_dir.join(PROJECT_CONFIG_FILENAME));
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a separator that would merge titles into identifiers.
    pub fn validate(&self) -> Result<()> {
        let merges = self
            .separator
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_digit() || c.is_ascii_lowercase());
        if self.add_title && merges {
            return Err(ZettelError::InvalidConfig(format!(
                "separator {:?} would run titles into identifiers; start it with a space or punctuation",
                self.separator
            )));
        }
        Ok(())
    }

    /// The note extension, normalized to start with a dot.
    pub fn note_extension(&self) -> String {
        if self.note_extension.is_empty() || self.note_extension.starts_with('.') {
            self.note_extension.clone()
        } else {
            format!(".{}", self.note_extension)
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy::new(
            self.match_rule,
            self.separator.clone(),
            self.note_extension(),
        )
    }
}

/// The global config file: `$ZETTEL_GLOBAL_CONFIG`, else the OS config dir.
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(GLOBAL_CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "zettel", "zettel")
        .map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILENAME))
}
