//! Client-side DTOs for the todo API.
//!
//! # Design
//! Defined independently of the server crate so the client carries no axum
//! or tokio dependency. The integration test runs both against each other to
//! catch schema drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A todo item as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both create and update. Update replaces both fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    pub completed: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

impl From<&Todo> for TodoInput {
    fn from(todo: &Todo) -> Self {
        Self::new(todo.title.clone(), todo.completed)
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Body of every 4xx response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
