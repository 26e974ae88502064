//! Drives `TodoListState` through a `TodoApi`.
//!
//! Each action begins on the state, performs exactly one API call, and
//! applies the outcome. Failures end up in the state's error message; no
//! method returns an error.

use tracing::{debug, warn};

use crate::api::{TodoApi, Transport};
use crate::state::{ListView, Outcome, TodoListState};
use crate::types::TodoId;

pub struct TodoListController<T> {
    api: TodoApi<T>,
    state: TodoListState,
}

impl<T: Transport> TodoListController<T> {
    pub fn new(api: TodoApi<T>) -> Self {
        Self {
            api,
            state: TodoListState::new(),
        }
    }

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn api(&self) -> &TodoApi<T> {
        &self.api
    }

    pub fn render(&self) -> ListView {
        self.state.render()
    }

    /// Mount the view: load the list for the first time.
    pub fn activate(&mut self) {
        self.reload();
    }

    pub fn reload(&mut self) {
        self.state.begin_load();
        let result = self.api.get_todos();
        if let Err(err) = &result {
            warn!(error = %err, "failed to load todos");
        }
        self.state.apply(Outcome::Loaded(result));
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Submit the create form. Returns false when the draft was blank and
    /// nothing was sent.
    pub fn submit_create(&mut self) -> bool {
        let Some(request) = self.state.begin_create() else {
            debug!("ignoring create with blank title");
            return false;
        };
        let result = self.api.create_todo(&request);
        match &result {
            Ok(todo) => debug!(id = todo.id, "created todo"),
            Err(err) => warn!(error = %err, "failed to create todo"),
        }
        self.state.apply(Outcome::Created(result));
        true
    }

    pub fn delete(&mut self, id: TodoId) {
        self.state.begin_delete();
        let result = self.api.delete_todo(id);
        if let Err(err) = &result {
            warn!(id, error = %err, "failed to delete todo");
        }
        self.state.apply(Outcome::Deleted { id, result });
    }
}
