//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! List bodies are normalized here so callers only ever see `Vec<Todo>`.

use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodoRequest, Todo, TodoId, TodoListBody};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodoRequest) -> Result<HttpRequest, RequestError> {
        let body = serde_json::to_string(input).map_err(|e| RequestError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Accepts both a bare array and an `{"items": [...]}` envelope.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, RequestError> {
        check_status(&response)?;
        decode::<TodoListBody>(&response.body).map(TodoListBody::into_todos)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, RequestError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), RequestError> {
        check_status(&response)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Map any non-2xx status to `RequestError::Status` with a readable message.
fn check_status(response: &HttpResponse) -> Result<(), RequestError> {
    if response.is_success() {
        return Ok(());
    }
    Err(RequestError::Status {
        status: response.status,
        message: error_message(response),
    })
}

/// Prefer a non-blank JSON `error`/`message` field, then the raw body, then
/// the status.
fn error_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
        let field = ["error", "message"].iter().find_map(|key| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|message| !message.is_empty())
        });
        if let Some(message) = field {
            return message.to_string();
        }
    }
    let body = response.body.trim();
    if body.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        body.to_string()
    }
}
