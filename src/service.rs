//! Task service: the business-facing surface over the store.
//!
//! Validates user input, generates ids, and delegates all state changes
//! to the store. One instance is wired up per process run and handed to
//! the command handlers; there is no module-level singleton.

use chrono::Utc;

use crate::error::TaskError;
use crate::idgen;
use crate::status::{self, Status};
use crate::store::Store;
use crate::task::Task;

pub struct Service {
    store: Store,
}

impl Service {
    pub fn new(store: Store) -> Service {
        Service { store }
    }

    /// Create a task with a fresh id and `todo` status. Rejects
    /// empty or whitespace-only descriptions.
    pub fn create_task(&mut self, description: &str) -> Result<Task, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::Validation(
                "task description cannot be empty".into(),
            ));
        }
        let now = Utc::now();
        let task = Task {
            id: idgen::generate(),
            description: description.to_string(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        };
        self.store.append(task.clone())?;
        Ok(task)
    }

    /// List tasks, optionally filtered by a raw status string. An
    /// unknown filter is a validation error, not an empty result; a
    /// known filter matching nothing is an empty result, not an error.
    pub fn list_tasks(&self, filter: Option<&str>) -> Result<Vec<&Task>, TaskError> {
        let filter = match filter.map(status::normalize) {
            Some(raw) if !raw.is_empty() => Some(Status::parse(&raw)?),
            _ => None,
        };
        Ok(self.store.list(filter))
    }

    pub fn update_task_status(&mut self, id: &str, status: Status) -> Result<(), TaskError> {
        self.store.update_status(id.trim(), status)
    }

    /// Replace a task's description. Same emptiness validation as
    /// [`Service::create_task`].
    pub fn update_task_description(&mut self, id: &str, description: &str) -> Result<(), TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::Validation(
                "task description cannot be empty".into(),
            ));
        }
        self.store.update_description(id.trim(), description)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<(), TaskError> {
        self.store.delete_by_id(id.trim())
    }
}
