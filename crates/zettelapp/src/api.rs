//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI clients.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries the active configuration** so callers do not thread it through
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no I/O of its own.
//!
//! `ZettelApi<S: NoteStore>` is generic over the store:
//! - Production: `ZettelApi<FileStore>`
//! - Testing: `ZettelApi<InMemoryStore>`

use crate::commands;
use crate::config::ZettelConfig;
use crate::error::Result;
use crate::id::{file_to_id, MatchPolicy};
use crate::store::NoteStore;

pub struct ZettelApi<S: NoteStore> {
    store: S,
    config: ZettelConfig,
    policy: MatchPolicy,
}

impl<S: NoteStore> ZettelApi<S> {
    pub fn new(store: S, config: ZettelConfig) -> Self {
        let policy = config.policy();
        Self {
            store,
            config,
            policy,
        }
    }

    pub fn config(&self) -> &ZettelConfig {
        &self.config
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.policy)
    }

    pub fn create_note(&mut self, placement: &Placement, title: &str) -> Result<CmdResult> {
        commands::create::run(
            &mut self.store,
            &self.policy,
            self.config.add_title,
            placement,
            title,
        )
    }

    pub fn show_note(&self, id: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, &self.policy, id)
    }

    pub fn next_sibling_id(&self, id: &str) -> Result<CmdResult> {
        commands::next_ids::sibling(&self.store, &self.policy, id)
    }

    pub fn next_child_id(&self, id: &str) -> Result<CmdResult> {
        commands::next_ids::child(&self.store, &self.policy, id)
    }

    pub fn rename_note(&mut self, from_id: &str, to_id: &str) -> Result<CmdResult> {
        commands::rename::run(&mut self.store, &self.policy, from_id, to_id)
    }

    pub fn move_subtree(&mut self, id: &str) -> Result<CmdResult> {
        commands::move_subtree::run(&mut self.store, &self.policy, id)
    }

    pub fn outdent(&mut self, id: &str) -> Result<CmdResult> {
        commands::outdent::run(&mut self.store, &self.policy, id)
    }

    /// Extracts identifiers from names under the active rule; `""` for no match.
    pub fn ids_of<I: AsRef<str>>(&self, names: &[I]) -> Vec<String> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let stem = self.policy.stem(name).unwrap_or(name);
                file_to_id(stem, self.policy.rule, &self.policy.separator)
            })
            .collect()
    }
}

pub use crate::commands::create::Placement;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Neighborhood};
