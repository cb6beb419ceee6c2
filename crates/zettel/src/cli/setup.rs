use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zettel", bin_name = "zettel", version)]
#[command(
    about = "Luhmann-style Zettelkasten: numbered notes you can create, list and reorganize",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes directory (defaults to the current directory)
    #[arg(
        short,
        long,
        global = true,
        env = "ZETTEL_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes as a tree
    #[command(alias = "ls")]
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new note
    New {
        /// Place the note as the next free sibling after this note
        #[arg(long, value_name = "ID", conflicts_with = "under")]
        after: Option<String>,

        /// Place the note as the next free child of this note
        #[arg(long, value_name = "ID")]
        under: Option<String>,

        /// Title words (joined with spaces)
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },

    /// Show a note with its parent, children and next free identifiers
    Show { id: String },

    /// Print the next free sibling identifier after a note
    Next { id: String },

    /// Print the next free child identifier of a note
    Child { id: String },

    /// Rename a note to a chosen identifier
    Rename { from: String, to: String },

    /// Move a note and its descendants to the next free identifier
    #[command(name = "move")]
    Move { id: String },

    /// Promote a note to become the next sibling of its parent
    Outdent { id: String },

    /// Print the identifier found in each name under the active match rule
    Id {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}
