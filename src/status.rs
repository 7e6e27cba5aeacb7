//! Task status model.
//!
//! Defines the three lifecycle states and the text forms accepted on the
//! command line, including the dynamic `mark-<status>` command family.
//! There are no transition restrictions: status is set by explicit user
//! command, so any state is reachable from any other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Completed,
}

impl Status {
    /// Parse user-supplied text into a status.
    ///
    /// Accepts the canonical snake_case names plus the spellings people
    /// actually type on a command line: `in-progress`, and `done` as an
    /// alias for `completed`.
    pub fn parse(raw: &str) -> Result<Status, TaskError> {
        match normalize(raw).as_str() {
            "todo" => Ok(Status::Todo),
            "in_progress" | "in-progress" => Ok(Status::InProgress),
            "completed" | "done" => Ok(Status::Completed),
            other => Err(TaskError::Validation(format!(
                "invalid status: '{other}', expected [todo|in-progress|completed]"
            ))),
        }
    }

    /// Canonical snake_case name, matching the on-disk representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Trim and lowercase user input before matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Decode a `mark-<status>` command token into the status text it names.
///
/// Interior dashes become underscores, so `mark-in-progress` yields
/// `in_progress`. The result still has to pass [`Status::parse`]. Fails
/// when the `mark-` prefix is absent.
pub fn parse_mark_command(raw: &str) -> Result<String, TaskError> {
    let token = normalize(raw);
    let Some(rest) = token.strip_prefix("mark-") else {
        return Err(TaskError::Validation(format!(
            "invalid command: '{token}', expected 'mark-<status>'"
        )));
    };
    Ok(rest.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_and_alias_spellings() {
        assert_eq!(Status::parse("todo").unwrap(), Status::Todo);
        assert_eq!(Status::parse(" In_Progress ").unwrap(), Status::InProgress);
        assert_eq!(Status::parse("in-progress").unwrap(), Status::InProgress);
        assert_eq!(Status::parse("completed").unwrap(), Status::Completed);
        assert_eq!(Status::parse("done").unwrap(), Status::Completed);
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert!(matches!(
            Status::parse("urgent"),
            Err(TaskError::Validation(_))
        ));
        assert!(matches!(Status::parse(""), Err(TaskError::Validation(_))));
    }

    #[test]
    fn mark_command_decodes_status_part() {
        assert_eq!(parse_mark_command("mark-in-progress").unwrap(), "in_progress");
        assert_eq!(parse_mark_command(" MARK-DONE ").unwrap(), "done");
        assert_eq!(parse_mark_command("mark-todo").unwrap(), "todo");
    }

    #[test]
    fn mark_command_requires_prefix() {
        assert!(matches!(
            parse_mark_command("complete"),
            Err(TaskError::Validation(_))
        ));
    }

    #[test]
    fn mark_command_composes_with_parse() {
        let decoded = parse_mark_command("mark-done").unwrap();
        assert_eq!(Status::parse(&decoded).unwrap(), Status::Completed);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"completed\"").unwrap(),
            Status::Completed
        );
    }
}
