//! Error taxonomy for the task tracker core.
//!
//! Four categories cover everything the core can report: bad user input,
//! a missing task id, a failed write during a mutation, and a store that
//! cannot be opened at startup. Only the last one is fatal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the task store and service.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Bad user input: empty description, unknown status or filter.
    #[error("{0}")]
    Validation(String),

    /// No task with the given id exists in the store.
    #[error("no task found with id '{0}'")]
    NotFound(String),

    /// The task file could not be written during a mutating operation.
    #[error("failed to persist tasks to {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The task file could not be created, read, or parsed at startup.
    /// Fatal: no operation can be trusted without a working store.
    #[error("failed to initialise task store at {path}: {reason}")]
    Init { path: PathBuf, reason: String },
}
