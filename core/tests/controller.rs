//! Controller behavior against an in-process fake of the `/todos` server.
//!
//! The fake interprets `HttpRequest` values directly, so these tests cover
//! the full build -> execute -> parse -> apply path without a network.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, Utc};
use todo_core::{
    HttpMethod, HttpRequest, HttpResponse, ListView, RequestError, Status, Todo, TodoApi,
    TodoClient, TodoListController, Transport,
};

#[derive(Default)]
struct FakeServer {
    todos: RefCell<Vec<Todo>>,
    last_id: Cell<i64>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: Cell<bool>,
}

impl FakeServer {
    fn with_todos(titles: &[&str]) -> Self {
        let server = FakeServer::default();
        for title in titles {
            server.insert(title);
        }
        server
    }

    fn insert(&self, title: &str) -> Todo {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);
        let todo = Todo {
            id,
            title: title.to_string(),
            description: None,
            created_at: epoch() + Duration::minutes(id),
        };
        self.todos.borrow_mut().push(todo.clone());
        todo
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

fn epoch() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::new(404, format!(r#"{{"error":"todo {id} not found"}}"#))
}

impl Transport for FakeServer {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline.get() {
            return Err(RequestError::Transport("connection refused".to_string()));
        }
        let path = request.path.trim_start_matches("http://fake");
        let response = match (request.method, path) {
            (HttpMethod::Get, "/todos") => {
                HttpResponse::new(200, serde_json::to_string(&*self.todos.borrow()).unwrap())
            }
            (HttpMethod::Post, "/todos") => {
                let body: serde_json::Value =
                    serde_json::from_str(request.body.as_deref().unwrap_or("")).unwrap();
                let todo = self.insert(body["title"].as_str().unwrap());
                HttpResponse::new(201, serde_json::to_string(&todo).unwrap())
            }
            (HttpMethod::Delete, path) => {
                let id = path.trim_start_matches("/todos/");
                let mut todos = self.todos.borrow_mut();
                match todos.iter().position(|t| t.id.to_string() == id) {
                    Some(pos) => {
                        todos.remove(pos);
                        HttpResponse::new(204, "")
                    }
                    None => not_found(id),
                }
            }
            _ => HttpResponse::new(405, ""),
        };
        Ok(response)
    }
}

fn controller(server: &FakeServer) -> TodoListController<&FakeServer> {
    TodoListController::new(TodoApi::new(TodoClient::new("http://fake"), server))
}

fn titles<T: Transport>(c: &TodoListController<T>) -> Vec<String> {
    c.state().todos().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn activate_loads_server_list() {
    let server = FakeServer::with_todos(&["Buy milk"]);
    let mut c = controller(&server);
    assert_eq!(c.state().status(), Status::Loading);

    c.activate();

    assert_eq!(c.state().status(), Status::Idle);
    assert_eq!(titles(&c), vec!["Buy milk"]);
}

#[test]
fn scenario_load_create_delete() {
    let server = FakeServer::with_todos(&["Buy milk"]);
    let mut c = controller(&server);
    c.activate();

    c.set_draft("Call mom");
    assert!(c.submit_create());
    assert_eq!(titles(&c), vec!["Buy milk", "Call mom"]);
    assert_eq!(c.state().todos()[1].id, 2);
    assert_eq!(c.state().draft(), "");

    c.delete(1);
    assert_eq!(titles(&c), vec!["Call mom"]);
    assert_eq!(c.state().error(), None);
}

#[test]
fn each_create_appends_exactly_one_record_last() {
    let server = FakeServer::default();
    let mut c = controller(&server);
    c.activate();

    for (n, title) in ["one", "two", "three", "four"].into_iter().enumerate() {
        c.set_draft(title);
        c.submit_create();
        assert_eq!(c.state().todos().len(), n + 1);
        assert_eq!(c.state().todos().last().unwrap().title, title);
    }
}

#[test]
fn blank_draft_makes_no_request() {
    let server = FakeServer::with_todos(&["Buy milk"]);
    let mut c = controller(&server);
    c.activate();
    let before = c.state().clone();
    let sent = server.request_count();

    for draft in ["", "   ", "\n\t"] {
        c.set_draft(draft);
        assert!(!c.submit_create());
    }

    assert_eq!(server.request_count(), sent);
    c.set_draft("");
    assert_eq!(c.state(), &before);
}

#[test]
fn deleting_absent_id_reports_error_and_keeps_collection() {
    let server = FakeServer::with_todos(&["Buy milk", "Call mom"]);
    let mut c = controller(&server);
    c.activate();

    c.delete(42);

    assert_eq!(titles(&c), vec!["Buy milk", "Call mom"]);
    assert_eq!(c.state().error(), Some("todo 42 not found"));
}

#[test]
fn direct_delete_of_absent_id_is_request_error() {
    let server = FakeServer::default();
    let api = TodoApi::new(TodoClient::new("http://fake"), &server);
    let err = api.delete_todo(42).unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn failed_load_then_successful_reload() {
    let server = FakeServer::with_todos(&["Buy milk"]);
    server.offline.set(true);
    let mut c = controller(&server);

    c.activate();
    assert_eq!(c.state().status(), Status::Error);
    assert!(c.state().todos().is_empty());
    assert_eq!(c.state().error(), Some("request failed: connection refused"));
    assert_eq!(c.state().render_with(&Utc), ListView::Empty);

    server.offline.set(false);
    c.reload();
    assert_eq!(c.state().error(), None);
    assert_eq!(c.state().todos(), server.todos.borrow().as_slice());
}

#[test]
fn failed_create_keeps_draft_and_collection() {
    let server = FakeServer::with_todos(&["Buy milk"]);
    let mut c = controller(&server);
    c.activate();

    server.offline.set(true);
    c.set_draft("Call mom");
    assert!(c.submit_create());

    assert_eq!(titles(&c), vec!["Buy milk"]);
    assert_eq!(c.state().draft(), "Call mom");
    assert!(c.state().error().is_some());

    // retry with the kept draft; the next action clears the banner
    server.offline.set(false);
    c.submit_create();
    assert_eq!(titles(&c), vec!["Buy milk", "Call mom"]);
    assert_eq!(c.state().error(), None);
}

#[test]
fn get_todos_is_idempotent_without_mutation() {
    let server = FakeServer::with_todos(&["Buy milk", "Call mom"]);
    let api = TodoApi::new(TodoClient::new("http://fake"), &server);
    let first = api.get_todos().unwrap();
    let second = api.get_todos().unwrap();
    assert_eq!(first, second);
}
