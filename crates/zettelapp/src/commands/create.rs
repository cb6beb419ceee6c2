use crate::commands::helpers::{load_snapshot, require_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ZettelError};
use crate::id::{first_available_id, MatchPolicy, NUMERIC_SEED};
use crate::model::{DisplayNote, Note};
use crate::store::NoteStore;
use log::info;

/// Where a new note goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    TopLevel,
    SiblingAfter(String),
    ChildOf(String),
}

pub fn run<S: NoteStore>(
    store: &mut S,
    policy: &MatchPolicy,
    add_title: bool,
    placement: &Placement,
    title: &str,
) -> Result<CmdResult> {
    let snapshot = load_snapshot(store, policy)?;
    let id = match placement {
        Placement::TopLevel => first_available_id(NUMERIC_SEED, |c| snapshot.exists(c)),
        Placement::SiblingAfter(anchor) => {
            let anchor = require_id(anchor)?;
            if !snapshot.exists(&anchor) {
                return Err(ZettelError::NoteNotFound(anchor));
            }
            snapshot.next_sibling_id(&anchor)
        }
        Placement::ChildOf(anchor) => {
            let anchor = require_id(anchor)?;
            if !snapshot.exists(&anchor) {
                return Err(ZettelError::NoteNotFound(anchor));
            }
            snapshot.next_child_id(&anchor)
        }
    };

    let title = title.trim();
    let filename = policy.build_filename(&id, title, add_title);
    // A name the active rule cannot read back would be invisible to every later lookup
    if !policy.is_zettel_file(&filename) {
        return Err(ZettelError::Api(format!(
            "{} does not match the active match rule ({}); add a title or change the rule",
            filename, policy.rule
        )));
    }
    let content = if title.is_empty() {
        String::new()
    } else {
        format!("# {}\n", title)
    };
    store.create_note(&filename, &content)?;
    info!(
        "event=create module=commands status=ok id={} filename={}",
        id, filename
    );

    let mut result = CmdResult::default()
        .with_affected_notes(vec![DisplayNote::from_note(
            &Note::new(id.clone(), filename.clone()),
            policy,
        )])
        .with_ids(vec![id.clone()]);
    result.add_message(CmdMessage::success(format!("Note created: {}", filename)));
    Ok(result)
}
