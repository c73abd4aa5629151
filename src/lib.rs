//! stickies - short pinnable notes kept in a local key-value store

pub mod cli;
pub mod domain;
pub mod export;
pub mod search;
pub mod storage;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::Path;

use cli::{
    Cli, Command, CompletionsArgs,
    config::Config,
    handlers::{
        handle_dup, handle_edit, handle_export, handle_list, handle_new, handle_pin, handle_rm,
        handle_search, handle_show,
    },
};
use storage::{FileStore, JsonStorage};
use store::NoteStore;

/// Note store backed by JSON in a storage directory.
pub type FileNoteStore = NoteStore<JsonStorage<FileStore>>;

/// Opens the note store rooted at `dir`.
pub fn open_store(dir: &Path, config: &Config) -> FileNoteStore {
    let medium = FileStore::new(dir).with_quota(config.quota_bytes);
    NoteStore::new(JsonStorage::new(medium))
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        print_completions(args);
        return Ok(());
    }

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    tracing::debug!(dir = %notes_dir.display(), "using storage directory");
    let mut store = open_store(&notes_dir, &config);

    match &cli.command {
        Command::List(args) => handle_list(args, &store),
        Command::Search(args) => handle_search(args, &store),
        Command::New(args) => handle_new(args, &mut store),
        Command::Show(args) => handle_show(args, &store),
        Command::Edit(args) => handle_edit(args, &mut store),
        Command::Pin(args) => handle_pin(args, &mut store),
        Command::Rm(args) => handle_rm(args, &mut store),
        Command::Dup(args) => handle_dup(args, &mut store),
        Command::Export(args) => handle_export(args, &store),
        Command::Completions(_) => Ok(()),
    }
}

fn print_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "stickies", &mut std::io::stdout());
}
