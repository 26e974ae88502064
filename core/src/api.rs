//! Data access layer: one network round-trip per operation.
//!
//! # Design
//! `TodoApi` is built once at startup from a `TodoClient` (the base URL) and
//! a host-provided `Transport`, then held for the life of the process. It
//! keeps no state between calls and never retries.

use tracing::debug;

use crate::client::TodoClient;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodoRequest, Todo, TodoId};

/// Executes an `HttpRequest` and returns whatever the server answered.
///
/// Non-2xx responses are returned as `Ok`; only failures that produced no
/// response at all should be `RequestError::Transport`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        (**self).execute(request)
    }
}

#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// All todos currently known to the server, in server order.
    pub fn get_todos(&self) -> Result<Vec<Todo>, RequestError> {
        let response = self.send(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    pub fn create_todo(&self, input: &CreateTodoRequest) -> Result<Todo, RequestError> {
        let request = self.client.build_create_todo(input)?;
        let response = self.send(request)?;
        self.client.parse_create_todo(response)
    }

    pub fn delete_todo(&self, id: TodoId) -> Result<(), RequestError> {
        let response = self.send(self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(&request)?;
        debug!(
            status = response.status,
            content_type = response.header("content-type").unwrap_or("-"),
            "received response"
        );
        Ok(response)
    }
}
