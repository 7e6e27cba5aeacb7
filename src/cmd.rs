//! Command definitions and handlers for the CLI surface.
//!
//! The fixed actions are ordinary clap subcommands. The dynamic
//! `mark-<status>` family (and the bare `version` command) arrives
//! through the external-subcommand escape hatch and is decoded exactly
//! once, at this boundary, into a status for the service.

use std::io::{self, BufRead, Write};

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::TaskError;
use crate::service::Service;
use crate::status::{self, Status};
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task description. Multiple words are joined with spaces.
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// List tasks, optionally filtered by status.
    List {
        /// Status filter: todo | in-progress | completed | done.
        filter: Option<String>,
    },

    /// Replace a task's description.
    Update {
        /// Task id.
        id: String,
        /// New description. Multiple words are joined with spaces.
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Delete a task by id.
    Delete {
        /// Task id.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Dynamic commands: `mark-<status> <id>` (e.g. mark-in-progress,
    /// mark-done) and `version`.
    #[command(external_subcommand)]
    External(Vec<String>),
}

pub fn cmd_add(svc: &mut Service, words: &[String]) {
    let description = words.join(" ");
    match svc.create_task(&description) {
        Ok(task) => println!("Added task {}: {}", task.id, task.description),
        Err(e) => eprintln!("failed to create task: {e}"),
    }
}

pub fn cmd_list(svc: &Service, filter: Option<&str>) {
    match svc.list_tasks(filter) {
        Ok(tasks) if tasks.is_empty() => println!("No tasks found."),
        Ok(tasks) => print_table(&tasks),
        Err(e) => eprintln!("{e}"),
    }
}

pub fn cmd_update(svc: &mut Service, id: &str, words: &[String]) {
    let description = words.join(" ");
    match svc.update_task_description(id, &description) {
        Ok(()) => println!("Task {id} updated"),
        Err(e) => eprintln!("failed to update task: {e}"),
    }
}

pub fn cmd_delete(svc: &mut Service, id: &str, yes: bool) {
    if !yes && !confirm_delete(id) {
        println!("Task deletion cancelled.");
        return;
    }
    match svc.delete_task(id) {
        Ok(()) => println!("Task {id} deleted"),
        Err(e) => eprintln!("failed to delete task: {e}"),
    }
}

/// Decode and run a command caught by the external-subcommand escape
/// hatch: `version`, or `mark-<status> <id>`.
pub fn cmd_external(svc: &mut Service, args: &[String]) {
    if let Some(token) = args.first() {
        if status::normalize(token) == "version" {
            println!("version: {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    }
    match parse_mark_args(args) {
        Ok((status, id)) => match svc.update_task_status(id, status) {
            Ok(()) => println!("Task {id} marked {status}"),
            Err(e) => eprintln!("failed to update task: {e}"),
        },
        Err(e) => eprintln!("{e}"),
    }
}

/// Split raw `mark-<status> <id>` arguments into a status and task id.
/// Exactly one id is accepted; anything after it is rejected the same
/// way clap rejects stray arguments on the fixed subcommands.
fn parse_mark_args(args: &[String]) -> Result<(Status, &str), TaskError> {
    let token = args
        .first()
        .ok_or_else(|| TaskError::Validation("expected a command".into()))?;
    let status = status::parse_mark_command(token).and_then(|s| Status::parse(&s))?;
    let id = args.get(1).ok_or_else(|| {
        TaskError::Validation(format!("expected task id: task-tracker {token} <id>"))
    })?;
    if let Some(extra) = args.get(2) {
        return Err(TaskError::Validation(format!(
            "unexpected argument '{extra}' found"
        )));
    }
    Ok((status, id))
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Ask for y/N confirmation on stdin. Anything but `y`/`yes` declines.
fn confirm_delete(id: &str) -> bool {
    print!("Are you sure you want to delete task '{id}'? [y/N]: ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return false;
    }
    matches!(status::normalize(&input).as_str(), "y" | "yes")
}

/// Print tasks in a fixed-width table.
fn print_table(tasks: &[&Task]) {
    println!(
        "{:<10} {:<13} {:<17} {}",
        "ID", "STATUS", "UPDATED", "DESCRIPTION"
    );
    println!("{}", "-".repeat(72));
    for t in tasks {
        println!(
            "{:<10} {:<13} {:<17} {}",
            t.id,
            t.status.as_str(),
            t.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            t.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_args_decode_status_and_id() {
        let args = vec!["mark-in-progress".to_string(), "a1b2c3d4".to_string()];
        let (status, id) = parse_mark_args(&args).unwrap();
        assert_eq!(status, Status::InProgress);
        assert_eq!(id, "a1b2c3d4");
    }

    #[test]
    fn mark_args_require_an_id() {
        let args = vec!["mark-done".to_string()];
        assert!(matches!(
            parse_mark_args(&args),
            Err(TaskError::Validation(_))
        ));
    }

    #[test]
    fn mark_args_reject_trailing_arguments() {
        let args = vec![
            "mark-done".to_string(),
            "a1b2c3d4".to_string(),
            "extra".to_string(),
        ];
        let err = parse_mark_args(&args).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(err.to_string().contains("unexpected argument"));
    }
}
