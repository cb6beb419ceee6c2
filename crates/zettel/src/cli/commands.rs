//! Dispatch from parsed arguments to the API, and from results to the terminal.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext` with API and configuration
//! - `handle_*()`: per-command handlers that call the API and print

use super::logging;
use super::render::{print_messages, render_neighborhood, render_tree};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use zettelapp::api::{Placement, ZettelApi};
use zettelapp::config::ZettelConfig;
use zettelapp::error::{Result, ZettelError};
use zettelapp::store::fs::FileStore;

struct AppContext {
    api: ZettelApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::New {
            after,
            under,
            title,
        }) => handle_new(&mut ctx, after, under, title),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Next { id }) => handle_next(&ctx, &id),
        Some(Commands::Child { id }) => handle_child(&ctx, &id),
        Some(Commands::Rename { from, to }) => handle_rename(&mut ctx, &from, &to),
        Some(Commands::Move { id }) => handle_move(&mut ctx, &id),
        Some(Commands::Outdent { id }) => handle_outdent(&mut ctx, &id),
        Some(Commands::Id { names }) => handle_id(&ctx, &names),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = ZettelConfig::load(&dir)?;
    debug!(
        "event=context module=cli dir={} rule={} separator={:?}",
        dir.display(),
        config.match_rule,
        config.separator
    );

    Ok(AppContext {
        api: ZettelApi::new(FileStore::new(&dir), config),
    })
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_notes()?;
    if json {
        let text = serde_json::to_string_pretty(&result.listed_notes)
            .map_err(|e| ZettelError::Api(format!("failed to encode listing: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", render_tree(&result.listed_notes));
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_new(
    ctx: &mut AppContext,
    after: Option<String>,
    under: Option<String>,
    title: Vec<String>,
) -> Result<()> {
    let placement = match (after, under) {
        (Some(anchor), _) => Placement::SiblingAfter(anchor),
        (None, Some(anchor)) => Placement::ChildOf(anchor),
        (None, None) => Placement::TopLevel,
    };

    let result = ctx.api.create_note(&placement, &title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_note(id)?;
    if let Some(hood) = &result.neighborhood {
        print!("{}", render_neighborhood(hood));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(ctx: &AppContext, id: &str) -> Result<()> {
    print_ids(&ctx.api.next_sibling_id(id)?.ids);
    Ok(())
}

fn handle_child(ctx: &AppContext, id: &str) -> Result<()> {
    print_ids(&ctx.api.next_child_id(id)?.ids);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, from: &str, to: &str) -> Result<()> {
    let result = ctx.api.rename_note(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.move_subtree(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_outdent(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.outdent(id)?;
    print_messages(&result.messages);
    Ok(())
}

/// One identifier per input name; names without a match print an empty line.
fn handle_id(ctx: &AppContext, names: &[String]) -> Result<()> {
    print_ids(&ctx.api.ids_of(names));
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let text = toml::to_string_pretty(ctx.api.config())
        .map_err(|e| ZettelError::Api(format!("failed to encode configuration: {}", e)))?;
    print!("{}", text);
    Ok(())
}

fn print_ids(ids: &[String]) {
    for id in ids {
        println!("{}", id);
    }
}
