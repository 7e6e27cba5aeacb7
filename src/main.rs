//! # Task Tracker CLI
//!
//! A small file-backed task tracker: add, list, update, mark, and
//! delete short text tasks, persisted to a local JSON file.
//!
//! ```bash
//! # Add a task
//! task-tracker add "walk the dog"
//!
//! # List tasks, optionally filtered by status
//! task-tracker list
//! task-tracker list in-progress
//!
//! # Move a task through its lifecycle
//! task-tracker mark-in-progress 3f9ac2d1
//! task-tracker mark-done 3f9ac2d1
//!
//! # Change the description, or delete
//! task-tracker update 3f9ac2d1 "walk the dog twice"
//! task-tracker delete 3f9ac2d1
//! ```
//!
//! Tasks live in `db/task.json` next to the working directory (override
//! with `--db <path>`). Each invocation loads the store once, performs
//! one operation, and exits; there is no cross-process locking, so
//! concurrent invocations against the same file can lose writes.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod idgen;
pub mod service;
pub mod status;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::Commands;
use service::Service;
use store::Store;

/// Default task file location, relative to the working directory.
const DEFAULT_DB_PATH: &str = "db/task.json";

fn main() {
    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    match cli.command {
        // Completions need no store.
        Commands::Completions { shell } => cmd::cmd_completions(shell),
        Commands::Add { description } => {
            with_service(&db_path, |svc| cmd::cmd_add(svc, &description))
        }
        Commands::List { filter } => {
            with_service(&db_path, |svc| cmd::cmd_list(svc, filter.as_deref()))
        }
        Commands::Update { id, description } => {
            with_service(&db_path, |svc| cmd::cmd_update(svc, &id, &description))
        }
        Commands::Delete { id, yes } => {
            with_service(&db_path, |svc| cmd::cmd_delete(svc, &id, yes))
        }
        Commands::External(args) => {
            with_service(&db_path, |svc| cmd::cmd_external(svc, &args))
        }
    }
}

/// Open the store at `path` and run one command against it. A store
/// that cannot be opened is fatal: nothing else can be trusted.
fn with_service(path: &Path, run: impl FnOnce(&mut Service)) {
    let store = match Store::open(path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    run(&mut Service::new(store));
}
