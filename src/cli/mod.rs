//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// stickies - short pinnable notes kept in a local store
#[derive(Parser, Debug)]
#[command(name = "stickies", version, about, long_about = None)]
pub struct Cli {
    /// Storage directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, pinned first
    #[command(name = "ls")]
    List(ListArgs),

    /// Find notes containing some text (case-insensitive)
    Search(SearchArgs),

    /// Create a new note
    New(NewArgs),

    /// Show a note's full content
    Show(NoteArgs),

    /// Replace a note's content
    Edit(EditArgs),

    /// Pin or unpin a note
    Pin(NoteArgs),

    /// Delete a note
    Rm(NoteArgs),

    /// Copy a note into a new, unpinned note
    Dup(NoteArgs),

    /// Export all notes as CSV
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for; blank lists everything
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub content: Vec<String>,
}

/// Arguments for commands that target one note
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note ID or unique ID prefix
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID or unique ID prefix
    pub note: String,

    /// New content, stored exactly as given (may be empty)
    pub content: String,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output file (defaults to notes.csv in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
