//! Client core for a todo list backed by a `/todos` REST collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! `Transport` that performs the actual round-trip; everything else,
//! including the list view state, is deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - `TodoApi` pairs a client with a transport and is the data access layer.
//! - `TodoListState` reconciles the displayed collection with operation
//!   outcomes as a plain `(state, outcome) -> state` transition.
//! - `TodoListController` wires the two together for hosts that want it.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use api::{TodoApi, Transport};
pub use client::TodoClient;
pub use controller::TodoListController;
pub use error::RequestError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{ListView, Outcome, Row, Status, TodoListState};
pub use types::{CreateTodoRequest, Todo, TodoId};
