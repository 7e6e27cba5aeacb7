//! File-backed task storage.
//!
//! `Store` is the sole owner of the task file and the in-memory task
//! collection. Every mutating operation rewrites the whole file
//! immediately; there is no batching and no write-ahead log. The write
//! itself goes through a temp file + rename so the file is never left
//! half-written, but nothing guards against two concurrent processes:
//! if two invocations race, the later rename wins and the earlier write
//! is lost. The intended model is one sequential invocation per
//! operation.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::status::Status;
use crate::task::Task;

/// On-disk document: a single object wrapping the ordered task list.
#[derive(Debug, Default, Deserialize)]
struct TaskFile {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct TaskFileRef<'a> {
    tasks: &'a [Task],
}

/// In-memory task collection bound to its backing JSON file.
#[derive(Debug)]
pub struct Store {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl Store {
    /// Open the store at `path`, creating an empty task file (and its
    /// parent directory) if none exists. An existing file that cannot
    /// be read or parsed is a fatal initialisation error.
    pub fn open(path: &Path) -> Result<Store, TaskError> {
        let init_err = |e: &dyn std::fmt::Display| TaskError::Init {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        if !path.exists() {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|e| init_err(&e))?;
            }
            let store = Store {
                tasks: Vec::new(),
                path: path.to_path_buf(),
            };
            store.save().map_err(|e| init_err(&e))?;
            return Ok(store);
        }

        let mut buf = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut buf))
            .map_err(|e| init_err(&e))?;
        let file: TaskFile = serde_json::from_str(&buf).map_err(|e| init_err(&e))?;
        Ok(Store {
            tasks: file.tasks,
            path: path.to_path_buf(),
        })
    }

    /// Add a task and persist the whole collection. If the write fails
    /// the in-memory push is rolled back, so memory never claims more
    /// than disk holds.
    pub fn append(&mut self, task: Task) -> Result<(), TaskError> {
        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Set a task's status, refresh `updated_at`, and persist.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<(), TaskError> {
        let task = self
            .get_mut(id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        task.status = status;
        task.updated_at = Utc::now();
        self.save()
    }

    /// Set a task's description, refresh `updated_at`, and persist.
    pub fn update_description(&mut self, id: &str, description: &str) -> Result<(), TaskError> {
        let task = self
            .get_mut(id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        task.description = description.to_string();
        task.updated_at = Utc::now();
        self.save()
    }

    /// Remove the task with `id`, keeping the relative order of the
    /// remaining tasks, and persist.
    pub fn delete_by_id(&mut self, id: &str) -> Result<(), TaskError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        self.tasks.remove(idx);
        self.save()
    }

    /// All tasks in insertion order, optionally filtered by status.
    pub fn list(&self, filter: Option<Status>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filter.map_or(true, |s| t.status == s))
            .collect()
    }

    /// Serialize the full collection over the task file, replacing its
    /// prior contents. Atomic-ish write via temp + rename.
    pub fn save(&self) -> Result<(), TaskError> {
        self.write_file().map_err(|source| TaskError::Persistence {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self) -> io::Result<()> {
        let data = serde_json::to_string_pretty(&TaskFileRef { tasks: &self.tasks })?;
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.get_mut(idx)
    }
}
