//! In-memory `/todos` server used for integration tests and local runs.

use std::{collections::BTreeMap, str::FromStr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope returned by `GET /todos` when serving `ListShape::Items`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsPage {
    pub items: Vec<Todo>,
    pub total: usize,
}

/// Which list response convention the server speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListShape {
    #[default]
    Bare,
    Items,
}

impl FromStr for ListShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bare" => Ok(ListShape::Bare),
            "items" => Ok(ListShape::Items),
            other => Err(format!("unknown list shape: {other}")),
        }
    }
}

#[derive(Default)]
struct Store {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

struct AppState {
    shape: ListShape,
    store: RwLock<Store>,
}

type Shared = Arc<AppState>;

/// Errors rendered as `{"error": "..."}` bodies.
#[derive(Debug)]
pub enum ApiError {
    NotFound(i64),
    EmptyTitle,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(id) => (StatusCode::NOT_FOUND, format!("todo {id} not found")),
            ApiError::EmptyTitle => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "title must not be empty".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn app() -> Router {
    app_with(ListShape::Bare)
}

pub fn app_with(shape: ListShape) -> Router {
    let state: Shared = Arc::new(AppState {
        shape,
        store: RwLock::new(Store::default()),
    });
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .with_state(state)
}

pub async fn run(listener: TcpListener, shape: ListShape) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(shape)).await
}

async fn list_todos(State(state): State<Shared>) -> Response {
    let store = state.store.read().await;
    let todos: Vec<Todo> = store.todos.values().cloned().collect();
    match state.shape {
        ListShape::Bare => Json(todos).into_response(),
        ListShape::Items => Json(ItemsPage {
            total: todos.len(),
            items: todos,
        })
        .into_response(),
    }
}

async fn create_todo(
    State(state): State<Shared>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::EmptyTitle);
    }
    let mut store = state.store.write().await;
    store.last_id += 1;
    let todo = Todo {
        id: store.last_id,
        title: input.title,
        description: input.description,
        created_at: Utc::now(),
    };
    store.todos.insert(todo.id, todo.clone());
    info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo(State(state): State<Shared>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.todos.remove(&id).ok_or(ApiError::NotFound(id))?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
