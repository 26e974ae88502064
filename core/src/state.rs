//! In-memory state of the todo list view.
//!
//! # Design
//! Every user action is split in two: a `begin_*` call that updates transient
//! flags before the request goes out, and `apply` which folds the finished
//! operation's `Outcome` into the state. Neither performs I/O, so the whole
//! reconciliation is a function of (previous state, outcome) and outcomes of
//! concurrently issued operations may be applied in any order.

use std::fmt;

use chrono::{Local, TimeZone};

use crate::error::RequestError;
use crate::types::{CreateTodoRequest, Todo, TodoId};

/// Format used for the creation timestamp of each rendered row.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error,
}

/// Result of one finished data access call.
#[derive(Debug, Clone)]
pub enum Outcome {
    Loaded(Result<Vec<Todo>, RequestError>),
    Created(Result<Todo, RequestError>),
    Deleted {
        id: TodoId,
        result: Result<(), RequestError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListState {
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
    draft: String,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListState {
    /// A freshly mounted view: empty and waiting for its first load.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            loading: true,
            error: None,
            draft: String::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.error.is_some() {
            Status::Error
        } else {
            Status::Idle
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Returns the request to send, or `None` when the draft is blank, in
    /// which case the state is left untouched. The title is sent as typed.
    pub fn begin_create(&mut self) -> Option<CreateTodoRequest> {
        if self.draft.trim().is_empty() {
            return None;
        }
        self.error = None;
        Some(CreateTodoRequest::new(self.draft.clone()))
    }

    pub fn begin_delete(&mut self) {
        self.error = None;
    }

    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded(Ok(todos)) => {
                self.loading = false;
                self.todos = todos;
            }
            Outcome::Loaded(Err(err)) => {
                self.loading = false;
                self.fail(err);
            }
            Outcome::Created(Ok(todo)) => {
                self.todos.push(todo);
                self.draft.clear();
            }
            Outcome::Created(Err(err)) => self.fail(err),
            Outcome::Deleted { id, result: Ok(()) } => {
                if let Some(pos) = self.todos.iter().position(|todo| todo.id == id) {
                    self.todos.remove(pos);
                }
            }
            Outcome::Deleted { result: Err(err), .. } => self.fail(err),
        }
    }

    fn fail(&mut self, err: RequestError) {
        self.error = Some(err.to_string());
    }

    /// What the list area should show, with timestamps in local time.
    pub fn render(&self) -> ListView {
        self.render_with(&Local)
    }

    pub fn render_with<Tz>(&self, tz: &Tz) -> ListView
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if self.todos.is_empty() {
            return if self.loading {
                ListView::Loading
            } else {
                ListView::Empty
            };
        }
        let rows = self
            .todos
            .iter()
            .map(|todo| Row {
                id: todo.id,
                title: todo.title.clone(),
                description: todo.description.clone(),
                created: todo
                    .created_at
                    .with_timezone(tz)
                    .format(TIMESTAMP_FORMAT)
                    .to_string(),
            })
            .collect();
        ListView::Rows(rows)
    }
}

/// Observable rendering decision for the list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Rows(Vec<Row>),
}

/// One displayed todo, each paired with a delete action keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub created: String,
}
