//! # Zettel Architecture
//!
//! Zettel is a **UI-agnostic library** for Luhmann-style Zettelkasten collections kept
//! as plain files. Each note's filename starts with an identifier such as `1a2`, and
//! those identifiers alone define the tree of notes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/zettel)                                        │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, carries configuration         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                             │
//!                 ▼                             ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Hierarchy (hierarchy.rs)     │ │  Identifiers (id.rs)      │
//! │  - Reorganizer: rename, move, │ │  - Pure string algebra    │
//! │    outdent over a snapshot    │ │    over identifiers       │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Stored Tree
//!
//! Nothing but filenames is persisted. Every top-level operation lists the store,
//! maps names to identifiers, and derives parents and children from the identifier
//! strings. Renames within one operation update that working snapshot so later
//! lookups see them.
//!
//! ## Module Overview
//!
//! - [`id`]: Identifier grammar, increments, parent/child derivation, filename matching
//! - [`hierarchy`]: Tree reorganization by renaming
//! - [`model`]: `Note`, `Snapshot`, `DisplayNote`, `Rename`
//! - [`commands`]: Business logic for each user operation
//! - [`api`]: The facade for UI clients
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod id;
pub mod model;
pub mod store;
