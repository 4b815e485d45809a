//! Axum handlers for the todo endpoints.
//!
//! Handlers are thin: parse the path id, validate the body, take the store
//! lock once, and map the result to a status code.

use axum::{
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, Welcome};
use crate::store::SharedStore;
use crate::validation::{self, FieldError};

/// A create/update body that has passed [`validation::validate`].
///
/// Malformed JSON and field errors are both rejected with 422.
pub struct ValidTodo(pub NewTodo);

impl<S> FromRequest<S> for ValidTodo
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::InvalidInput(vec![FieldError::json_invalid(rejection.body_text())])
            })?;
        Ok(Self(validation::validate(body)?))
    }
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome::default())
}

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let todos = store.read().await.list();
    tracing::debug!(count = todos.len(), "listed todos");
    Json(todos)
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    ValidTodo(input): ValidTodo,
) -> (StatusCode, Json<Todo>) {
    let todo = store.write().await.create(input);
    tracing::info!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = validation::parse_todo_id(&raw_id)?;
    let todo = store.read().await.get(id).inspect_err(|err| {
        tracing::warn!(%err, "get failed");
    })?;
    tracing::debug!(id, "fetched todo");
    Ok(Json(todo))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    ValidTodo(input): ValidTodo,
) -> Result<Json<Todo>, ApiError> {
    let id = validation::parse_todo_id(&raw_id)?;
    let todo = store.write().await.update(id, input).inspect_err(|err| {
        tracing::warn!(%err, "update failed");
    })?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validation::parse_todo_id(&raw_id)?;
    store.write().await.delete(id).inspect_err(|err| {
        tracing::warn!(%err, "delete failed");
    })?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
