//! Task data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// A single tracked task.
///
/// `id` and `created_at` are fixed at creation; every mutation refreshes
/// `updated_at`, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
