//! In-memory todo service.
//!
//! # Overview
//! A small CRUD API over a single record type. Records live in a
//! [`TodoStore`] owned by the router state; nothing is persisted.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/` | 200 welcome message |
//! | POST | `/todos/` | 201 created todo |
//! | GET | `/todos/` | 200 all todos, insertion order |
//! | GET | `/todos/{todo_id}` | 200 todo |
//! | PUT | `/todos/{todo_id}` | 200 updated todo |
//! | DELETE | `/todos/{todo_id}` | 204 empty body |
//!
//! Unknown ids give 404 and invalid input gives 422.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod validation;

use axum::{http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use config::Config;
pub use error::ApiError;
pub use model::{NewTodo, Todo, Welcome};
pub use store::{SharedStore, StoreError, TodoStore};

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::shared())
}

/// Build the router around an existing store.
pub fn app_with_store(store: SharedStore) -> Router {
    let todos = get(routes::list_todos).post(routes::create_todo);
    Router::new()
        .route("/", get(routes::root))
        .route("/todos", todos.clone())
        .route("/todos/", todos)
        .route(
            "/todos/{todo_id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
