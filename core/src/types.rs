//! Wire DTOs for the `/todos` resource.
//!
//! # Design
//! Defined independently from the mock-server crate; integration tests catch
//! schema drift. Unknown fields are ignored so a server that also reports
//! `completed` or `updated_at` still decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

/// A single todo item owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `GET /todos`: either a bare array or an `items` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TodoListBody {
    Bare(Vec<Todo>),
    Enveloped { items: Vec<Todo> },
}

impl TodoListBody {
    pub(crate) fn into_todos(self) -> Vec<Todo> {
        match self {
            TodoListBody::Bare(todos) => todos,
            TodoListBody::Enveloped { items } => items,
        }
    }
}
